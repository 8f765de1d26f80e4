use tracing::debug;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::ast::{Type, TypeRef};

use super::emit::{self, FIX_TO_INDEX_SIGNATURE};
use super::visitor::{Visitor, walk_children};

/// `Record<K, V>`: the bare name `Record` with exactly two type arguments.
///
/// Recognition is by name only, a shadowed or re-exported `Record` matches too.
#[derive(Debug, Clone)]
pub struct MapInstantiation {
    pub key_arg: Type,
    pub value_arg: Type,
}

impl MapInstantiation {
    pub fn from_type_ref(type_ref: &TypeRef) -> Option<Self> {
        let name = type_ref.simple_name()?;
        if name.text() != "Record" {
            return None;
        }

        let args = type_ref.type_args()?;
        let mut types = args.types();
        let key_arg = types.next()?;
        let value_arg = types.next()?;
        if types.next().is_some() {
            return None;
        }

        Some(Self { key_arg, value_arg })
    }

    pub fn to_index_signature(&self) -> String {
        emit::index_signature(&self.key_arg.text(), &self.value_arg.text())
    }
}

/// Strategy for [`Style::IndexSignature`](super::Style::IndexSignature).
pub(super) struct PreferIndexSignature<'d> {
    diagnostics: &'d mut Diagnostics,
}

impl<'d> PreferIndexSignature<'d> {
    pub(super) fn new(diagnostics: &'d mut Diagnostics) -> Self {
        Self { diagnostics }
    }
}

impl Visitor for PreferIndexSignature<'_> {
    fn visit_type_ref(&mut self, type_ref: &TypeRef) {
        if let Some(shape) = MapInstantiation::from_type_ref(type_ref) {
            let range = type_ref.as_cst().text_range();
            debug!(?range, "record prefers an index signature");
            self.diagnostics
                .report(DiagnosticKind::PreferIndexSignature, range)
                .fix(FIX_TO_INDEX_SIGNATURE, shape.to_index_signature())
                .emit();
        }
        walk_children(self, type_ref.as_cst());
    }
}
