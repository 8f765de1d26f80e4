use crate::parser::SyntaxNode;
use crate::semantic::{ScopeId, SemanticModel};

/// Whether the declaration named `name`, looked up from `scope`, is referred
/// to at type level from inside `candidate`.
///
/// An unresolved name is never circular.
pub fn is_circular(
    model: &SemanticModel,
    name: &str,
    scope: ScopeId,
    candidate: &SyntaxNode,
) -> bool {
    let Some(id) = model.find_binding(scope, name) else {
        return false;
    };
    model
        .binding(id)
        .has_type_reference_within(candidate.text_range())
}
