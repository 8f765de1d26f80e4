//! Consistent indexed object style.
//!
//! An object type made of one index signature (`{ [k: K]: V }`) or one
//! homogeneous mapped type (`{ [k in Keys]: V }`) means the same as
//! `Record<K, V>`. Depending on the configured [`Style`], one of two
//! strategies walks the tree and reports the other form, attaching a rewrite
//! whenever the rewrite provably keeps the meaning.
//!
//! - [`Style::Record`]: interfaces and type literals holding a single index
//!   signature, and mapped types that never use their key, become `Record`.
//! - [`Style::IndexSignature`]: `Record<K, V>` references become
//!   `{ [key: K]: V }`.

mod circular;
mod emit;
mod index_signature;
mod invariants;
mod mapped;
mod parent;
mod prefer_record;
mod record_ref;
mod visitor;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::parser::Root;
use crate::semantic::SemanticModel;

pub use circular::is_circular;
pub use index_signature::IndexedShape;
pub use mapped::MappedTypeShape;
pub use parent::find_enclosing_alias;
pub use record_ref::MapInstantiation;

use prefer_record::PreferRecord;
use record_ref::PreferIndexSignature;
use visitor::Visitor;

/// Which of the two equivalent forms the codebase standardizes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// `Record<K, V>` is preferred.
    #[default]
    Record,
    /// `{ [key: K]: V }` is preferred.
    IndexSignature,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Record, Style::IndexSignature];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Record => "record",
            Style::IndexSignature => "index-signature",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| crate::Error::UnknownStyle(s.to_string()))
    }
}

/// Runs the strategy selected by `style` over a bound, error-free tree.
pub fn check(root: &Root, model: &SemanticModel, style: Style) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    match style {
        Style::Record => PreferRecord::new(model, &mut diagnostics).visit_root(root),
        Style::IndexSignature => PreferIndexSignature::new(&mut diagnostics).visit_root(root),
    }
    diagnostics
}
