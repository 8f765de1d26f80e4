use crate::parser::ast::TypeAlias;
use crate::parser::SyntaxNode;

/// Nearest type alias lexically containing `node`.
///
/// Type annotation wrappers (`: T`) and every other node in between are
/// walked past. `None` when the node sits outside any alias.
pub fn find_enclosing_alias(node: &SyntaxNode) -> Option<TypeAlias> {
    node.ancestors().skip(1).find_map(TypeAlias::cast)
}
