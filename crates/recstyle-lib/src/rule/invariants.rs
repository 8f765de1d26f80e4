//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::semantic::BindingId;

#[inline]
pub fn ensure_mapped_key_binding(binding: Option<BindingId>, key: &str) -> BindingId {
    binding.unwrap_or_else(|| {
        panic!(
            "mapped_type: key `{key}` is not a type variable of the mapped type's scope \
             (binder should declare it)"
        )
    })
}
