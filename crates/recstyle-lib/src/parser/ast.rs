//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(TypeAlias, TypeAlias);
ast_node!(Interface, Interface);
ast_node!(InterfaceBody, InterfaceBody);
ast_node!(ExtendsClause, ExtendsClause);
ast_node!(HeritageType, HeritageType);
ast_node!(TypeParams, TypeParams);
ast_node!(TypeParam, TypeParam);
ast_node!(TypeArgs, TypeArgs);
ast_node!(TypeAnnotation, TypeAnnotation);
ast_node!(VarDeclarator, VarDeclarator);
ast_node!(FunctionDecl, FunctionDecl);
ast_node!(ModuleDecl, ModuleDecl);
ast_node!(Param, Param);
ast_node!(IndexSignature, IndexSignature);
ast_node!(PropertySignature, PropertySignature);
ast_node!(MethodSignature, MethodSignature);
ast_node!(CallSignature, CallSignature);
ast_node!(ConstructSignature, ConstructSignature);
ast_node!(TypeRef, TypeRef);
ast_node!(TypeLiteral, TypeLiteral);
ast_node!(MappedType, MappedType);
ast_node!(MappedTypeParam, MappedTypeParam);
ast_node!(ParenType, ParenType);
ast_node!(TypeOperator, TypeOperator);
ast_node!(TypeQuery, TypeQuery);
ast_node!(InferType, InferType);

/// Modifier written on a mapped type's `readonly` or `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappedModifier {
    /// Bare `readonly` / `?`
    True,
    /// `+readonly` / `+?`
    Plus,
    /// `-readonly` / `-?`
    Minus,
}

/// Type expression. Kinds the engine inspects get their own variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Ref(TypeRef),
    Literal(TypeLiteral),
    Mapped(MappedType),
    Paren(ParenType),
    Operator(TypeOperator),
    Other(SyntaxNode),
}

impl Type {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::TypeRef => TypeRef::cast(node).map(Type::Ref),
            SyntaxKind::TypeLiteral => TypeLiteral::cast(node).map(Type::Literal),
            SyntaxKind::MappedType => MappedType::cast(node).map(Type::Mapped),
            SyntaxKind::ParenType => ParenType::cast(node).map(Type::Paren),
            SyntaxKind::TypeOperator => TypeOperator::cast(node).map(Type::Operator),
            kind if kind.is_type() => Some(Type::Other(node)),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Type::Ref(n) => n.as_cst(),
            Type::Literal(n) => n.as_cst(),
            Type::Mapped(n) => n.as_cst(),
            Type::Paren(n) => n.as_cst(),
            Type::Operator(n) => n.as_cst(),
            Type::Other(n) => n,
        }
    }

    /// Strips any number of enclosing parentheses.
    pub fn unparenthesized(&self) -> Type {
        let mut ty = self.clone();
        while let Type::Paren(paren) = &ty {
            match paren.inner() {
                Some(inner) => ty = inner,
                None => break,
            }
        }
        ty
    }

    /// Source text with enclosing parentheses removed.
    pub fn text(&self) -> String {
        self.unparenthesized().as_cst().text().to_string()
    }
}

/// Member of an interface body or type literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Index(IndexSignature),
    Property(PropertySignature),
    Method(MethodSignature),
    Call(CallSignature),
    Construct(ConstructSignature),
}

impl Member {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::IndexSignature => IndexSignature::cast(node).map(Member::Index),
            SyntaxKind::PropertySignature => PropertySignature::cast(node).map(Member::Property),
            SyntaxKind::MethodSignature => MethodSignature::cast(node).map(Member::Method),
            SyntaxKind::CallSignature => CallSignature::cast(node).map(Member::Call),
            SyntaxKind::ConstructSignature => {
                ConstructSignature::cast(node).map(Member::Construct)
            }
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Member::Index(n) => n.as_cst(),
            Member::Property(n) => n.as_cst(),
            Member::Method(n) => n.as_cst(),
            Member::Call(n) => n.as_cst(),
            Member::Construct(n) => n.as_cst(),
        }
    }
}

/// Direct child tokens, trivia excluded.
fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    tokens(node).any(|t| t.kind() == kind)
}

/// The direct child token right after the first `kind` token.
fn token_after(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    let mut iter = tokens(node).skip_while(|t| t.kind() != kind);
    iter.next()?;
    iter.next()
}

fn first_name(node: &SyntaxNode) -> Option<SyntaxToken> {
    tokens(node).find(|t| t.kind().is_name())
}

impl Root {
    pub fn statements(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

impl TypeAlias {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwType).filter(|t| t.kind().is_name())
    }

    pub fn type_params(&self) -> Option<TypeParams> {
        self.0.children().find_map(TypeParams::cast)
    }

    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl Interface {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwInterface).filter(|t| t.kind().is_name())
    }

    pub fn is_declare(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwDeclare)
    }

    pub fn type_params(&self) -> Option<TypeParams> {
        self.0.children().find_map(TypeParams::cast)
    }

    pub fn extends_clause(&self) -> Option<ExtendsClause> {
        self.0.children().find_map(ExtendsClause::cast)
    }

    /// Whether the interface names at least one supertype.
    pub fn has_heritage(&self) -> bool {
        self.extends_clause()
            .is_some_and(|clause| clause.types().next().is_some())
    }

    pub fn body(&self) -> Option<InterfaceBody> {
        self.0.children().find_map(InterfaceBody::cast)
    }
}

impl InterfaceBody {
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

impl ExtendsClause {
    pub fn types(&self) -> impl Iterator<Item = HeritageType> + '_ {
        self.0.children().filter_map(HeritageType::cast)
    }
}

impl HeritageType {
    /// First segment of a possibly qualified name.
    pub fn name(&self) -> Option<SyntaxToken> {
        first_name(&self.0)
    }

    pub fn type_args(&self) -> Option<TypeArgs> {
        self.0.children().find_map(TypeArgs::cast)
    }
}

impl TypeParams {
    pub fn params(&self) -> impl Iterator<Item = TypeParam> + '_ {
        self.0.children().filter_map(TypeParam::cast)
    }
}

impl TypeParam {
    /// The declared name; `in` / `out` / `const` modifiers come before it.
    pub fn name(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .take_while(|t| !matches!(t.kind(), SyntaxKind::KwExtends | SyntaxKind::Equals))
            .filter(|t| t.kind().is_name())
            .last()
    }
}

impl TypeArgs {
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        self.0.children().filter_map(Type::cast)
    }
}

impl TypeAnnotation {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl VarDeclarator {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_name(&self.0)
    }
}

impl FunctionDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwFunction)
            .filter(|t| t.kind().is_name())
            .or_else(|| {
                let mut iter = tokens(&self.0).skip_while(|t| t.kind() != SyntaxKind::Star);
                iter.next()?;
                iter.next().filter(|t| t.kind().is_name())
            })
    }
}

impl ModuleDecl {
    /// First segment of the module name; `None` for string-named modules.
    pub fn name(&self) -> Option<SyntaxToken> {
        let mut iter = tokens(&self.0).skip_while(|t| {
            !matches!(
                t.kind(),
                SyntaxKind::KwNamespace | SyntaxKind::KwModule | SyntaxKind::Id
            )
        });
        let keyword = iter.next()?;
        if keyword.kind() == SyntaxKind::Id {
            // `declare global`
            return None;
        }
        iter.next().filter(|t| t.kind().is_name())
    }
}

impl Param {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_name(&self.0)
    }

    pub fn is_rest(&self) -> bool {
        has_token(&self.0, SyntaxKind::DotDotDot)
    }

    /// A single named parameter, not a rest element or destructuring pattern.
    pub fn is_plain_identifier(&self) -> bool {
        !self.is_rest() && self.name().is_some()
    }

    pub fn type_annotation(&self) -> Option<TypeAnnotation> {
        self.0.children().find_map(TypeAnnotation::cast)
    }
}

impl IndexSignature {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.0.children().filter_map(Param::cast)
    }

    pub fn is_readonly(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwReadonly)
    }

    pub fn type_annotation(&self) -> Option<TypeAnnotation> {
        self.0.children().find_map(TypeAnnotation::cast)
    }
}

impl TypeRef {
    /// Name tokens of the reference, one per qualified segment.
    pub fn segments(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        tokens(&self.0).filter(|t| t.kind().is_name())
    }

    /// The name of an unqualified reference like `Foo<T>`.
    ///
    /// `None` for `A.B` and `import("m").C`.
    pub fn simple_name(&self) -> Option<SyntaxToken> {
        if has_token(&self.0, SyntaxKind::Dot) || has_token(&self.0, SyntaxKind::KwImport) {
            return None;
        }
        self.segments().next()
    }

    /// First segment, the part resolved against scopes. `None` for import types.
    pub fn head(&self) -> Option<SyntaxToken> {
        if has_token(&self.0, SyntaxKind::KwImport) {
            return None;
        }
        self.segments().next()
    }

    pub fn type_args(&self) -> Option<TypeArgs> {
        self.0.children().find_map(TypeArgs::cast)
    }
}

impl TypeLiteral {
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

impl MappedType {
    fn modifier_before(&self, target: SyntaxKind) -> Option<MappedModifier> {
        let kinds: Vec<SyntaxKind> = tokens(&self.0).map(|t| t.kind()).collect();
        let idx = kinds.iter().position(|k| *k == target)?;
        let modifier = match idx.checked_sub(1).map(|i| kinds[i]) {
            Some(SyntaxKind::Plus) => MappedModifier::Plus,
            Some(SyntaxKind::Minus) => MappedModifier::Minus,
            _ => MappedModifier::True,
        };
        Some(modifier)
    }

    pub fn readonly_modifier(&self) -> Option<MappedModifier> {
        self.modifier_before(SyntaxKind::KwReadonly)
    }

    pub fn optional_modifier(&self) -> Option<MappedModifier> {
        self.modifier_before(SyntaxKind::Question)
    }

    pub fn type_param(&self) -> Option<MappedTypeParam> {
        self.0.children().find_map(MappedTypeParam::cast)
    }

    pub fn has_as_clause(&self) -> bool {
        self.0
            .children()
            .any(|n| n.kind() == SyntaxKind::MappedAsClause)
    }

    pub fn value_type(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl MappedTypeParam {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_name(&self.0)
    }

    pub fn constraint(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl ParenType {
    pub fn inner(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl TypeOperator {
    pub fn operator(&self) -> Option<SyntaxKind> {
        tokens(&self.0).next().map(|t| t.kind())
    }

    pub fn is_keyof(&self) -> bool {
        self.operator() == Some(SyntaxKind::KwKeyof)
    }

    pub fn operand(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

impl TypeQuery {
    /// The value being queried: `a` in `typeof a.b`. `None` for `typeof import(..)`.
    pub fn head(&self) -> Option<SyntaxToken> {
        if has_token(&self.0, SyntaxKind::KwImport) {
            return None;
        }
        token_after(&self.0, SyntaxKind::KwTypeof).filter(|t| t.kind().is_name())
    }
}

impl InferType {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_after(&self.0, SyntaxKind::KwInfer).filter(|t| t.kind().is_name())
    }
}
