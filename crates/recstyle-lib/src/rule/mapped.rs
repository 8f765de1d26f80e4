use crate::parser::SyntaxToken;
use crate::parser::ast::{MappedModifier, MappedType, Type};
use crate::semantic::SemanticModel;

use super::emit;
use super::invariants::ensure_mapped_key_binding;

/// A mapped type `{ readonly [K in C]?: V }` together with what is known
/// about its key.
#[derive(Debug, Clone)]
pub struct MappedTypeShape {
    pub key_param: SyntaxToken,
    /// Whether the key has any type-level reference, typically `Lookup[K]`.
    pub key_used: bool,
    pub constraint: Type,
    pub value_type: Option<Type>,
    pub optional_modifier: Option<MappedModifier>,
    pub readonly_modifier: Option<MappedModifier>,
}

impl MappedTypeShape {
    /// `None` for mapped types with an `as` clause or a malformed key.
    ///
    /// # Panics
    ///
    /// When the binder did not declare the key in the mapped type's scope.
    pub fn analyze(mapped: &MappedType, model: &SemanticModel) -> Option<Self> {
        if mapped.has_as_clause() {
            return None;
        }

        let param = mapped.type_param()?;
        let key_param = param.name()?;
        let constraint = param.constraint()?;

        let scope = model.scope_of(mapped.as_cst());
        let key = ensure_mapped_key_binding(
            model.own_type_binding(scope, key_param.text()),
            key_param.text(),
        );
        let key_used = model.references(key).iter().any(|r| r.is_type());

        Some(Self {
            key_param,
            key_used,
            constraint,
            value_type: mapped.value_type(),
            optional_modifier: mapped.optional_modifier(),
            readonly_modifier: mapped.readonly_modifier(),
        })
    }

    /// `keyof X` written without parentheses.
    pub fn has_bare_keyof_constraint(&self) -> bool {
        matches!(&self.constraint, Type::Operator(op) if op.is_keyof())
    }

    /// The equivalent `Record` type with modifier sugar translated to
    /// wrappers, optionality innermost.
    ///
    /// `None` when there is no direct counterpart: `-readonly`, or a
    /// missing value type.
    pub fn to_record(&self) -> Option<String> {
        if self.readonly_modifier == Some(MappedModifier::Minus) {
            return None;
        }
        let value = self.value_type.as_ref()?;

        let mut text = emit::record(&self.constraint.text(), &value.text());
        match self.optional_modifier {
            Some(MappedModifier::True | MappedModifier::Plus) => {
                text = emit::wrap("Partial", text);
            }
            Some(MappedModifier::Minus) => text = emit::wrap("Required", text),
            None => {}
        }
        if matches!(
            self.readonly_modifier,
            Some(MappedModifier::True | MappedModifier::Plus)
        ) {
            text = emit::wrap("Readonly", text);
        }
        Some(text)
    }
}
