use tracing::debug;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::SyntaxNode;
use crate::parser::ast::{Interface, MappedType, TypeAlias, TypeLiteral};
use crate::semantic::{ScopeId, SemanticModel};

use super::circular::is_circular;
use super::emit::{self, FIX_TO_RECORD};
use super::index_signature::IndexedShape;
use super::mapped::MappedTypeShape;
use super::parent::find_enclosing_alias;
use super::visitor::{Visitor, walk_children};

/// Strategy for [`Style::Record`](super::Style::Record).
pub(super) struct PreferRecord<'a> {
    model: &'a SemanticModel,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> PreferRecord<'a> {
    pub(super) fn new(model: &'a SemanticModel, diagnostics: &'a mut Diagnostics) -> Self {
        Self { model, diagnostics }
    }

    /// An interface keeps its name after the rewrite, so a self-referencing
    /// one is still reported, only without a fix.
    fn check_interface(&mut self, interface: &Interface) {
        let Some(body) = interface.body() else {
            return;
        };
        let Some(shape) = IndexedShape::from_members(body.members()) else {
            return;
        };
        let Some(name) = interface.name() else {
            return;
        };

        let node = interface.as_cst();
        let fix = if interface.has_heritage() {
            debug!(name = name.text(), "interface has supertypes, no fix");
            None
        } else if is_circular(self.model, name.text(), self.declaring_scope(node), node) {
            debug!(name = name.text(), "interface refers to itself, no fix");
            None
        } else {
            let type_params: Vec<String> = interface
                .type_params()
                .map(|params| {
                    params
                        .params()
                        .map(|p| p.as_cst().text().to_string())
                        .collect()
                })
                .unwrap_or_default();
            let alias = emit::type_alias(
                interface.is_declare(),
                name.text(),
                &type_params,
                &shape.to_record(),
            );
            Some((FIX_TO_RECORD, alias))
        };

        debug!(name = name.text(), fixable = fix.is_some(), "interface prefers a record");
        self.diagnostics
            .report(DiagnosticKind::PreferRecord, node.text_range())
            .maybe_fix(fix)
            .emit();
    }

    fn check_type_literal(&mut self, literal: &TypeLiteral) {
        let Some(shape) = IndexedShape::from_members(literal.members()) else {
            return;
        };

        let node = literal.as_cst();
        if let Some(alias) = find_enclosing_alias(node) {
            let scope = self.declaring_scope(alias.as_cst());
            if self.alias_is_circular(&alias, scope, node) {
                debug!(range = ?node.text_range(), "type literal refers to its alias, skipped");
                return;
            }
        }

        debug!(range = ?node.text_range(), "type literal prefers a record");
        self.diagnostics
            .report(DiagnosticKind::PreferRecord, node.text_range())
            .fix(FIX_TO_RECORD, shape.to_record())
            .emit();
    }

    fn check_mapped_type(&mut self, mapped: &MappedType) {
        let Some(shape) = MappedTypeShape::analyze(mapped, self.model) else {
            return;
        };

        let node = mapped.as_cst();
        if shape.key_used {
            debug!(key = shape.key_param.text(), "mapped type uses its key, skipped");
            return;
        }
        if shape.has_bare_keyof_constraint() {
            debug!(range = ?node.text_range(), "mapped type over bare `keyof`, skipped");
            return;
        }
        if let Some(alias) = find_enclosing_alias(node) {
            let scope = self.model.scope_of(node);
            if self.alias_is_circular(&alias, scope, node) {
                debug!(range = ?node.text_range(), "mapped type refers to its alias, skipped");
                return;
            }
        }

        let fix = shape.to_record().map(|text| (FIX_TO_RECORD, text));
        debug!(
            range = ?node.text_range(),
            fixable = fix.is_some(),
            "mapped type prefers a record"
        );
        self.diagnostics
            .report(DiagnosticKind::PreferRecord, node.text_range())
            .maybe_fix(fix)
            .emit();
    }

    /// The scope a declaration's own name is bound in.
    fn declaring_scope(&self, declaration: &SyntaxNode) -> ScopeId {
        declaration
            .parent()
            .map(|parent| self.model.scope_of(&parent))
            .unwrap_or_else(|| self.model.root_scope())
    }

    fn alias_is_circular(&self, alias: &TypeAlias, scope: ScopeId, candidate: &SyntaxNode) -> bool {
        alias
            .name()
            .is_some_and(|name| is_circular(self.model, name.text(), scope, candidate))
    }
}

impl Visitor for PreferRecord<'_> {
    fn visit_interface(&mut self, interface: &Interface) {
        self.check_interface(interface);
        walk_children(self, interface.as_cst());
    }

    fn visit_type_literal(&mut self, literal: &TypeLiteral) {
        self.check_type_literal(literal);
        walk_children(self, literal.as_cst());
    }

    fn visit_mapped_type(&mut self, mapped: &MappedType) {
        self.check_mapped_type(mapped);
        walk_children(self, mapped.as_cst());
    }
}
