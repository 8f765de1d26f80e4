//! Syntax kinds for the TypeScript declaration grammar.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `TsLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
/// Token discriminants must stay below 64 so they fit in a [`TokenSet`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("<")]
    LAngle,

    /// Always a single `>`: `A<B<C>>` must close two argument lists.
    #[token(">")]
    RAngle,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(":")]
    Colon,

    #[token("?")]
    Question,

    #[token(".")]
    Dot,

    #[token("...")]
    DotDotDot,

    #[token("=")]
    Equals,

    #[token("=>")]
    FatArrow,

    #[token("|")]
    Pipe,

    #[token("&")]
    Amp,

    /// Modifier sugar `+readonly` / `+?`, or a sign in expressions.
    #[token("+")]
    Plus,

    /// Modifier sugar `-readonly` / `-?`, or a negative literal type.
    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("@")]
    At,

    #[token("!")]
    Bang,

    #[token("type")]
    KwType,

    #[token("interface")]
    KwInterface,

    #[token("extends")]
    KwExtends,

    #[token("keyof")]
    KwKeyof,

    #[token("readonly")]
    KwReadonly,

    #[token("in")]
    KwIn,

    #[token("as")]
    KwAs,

    #[token("typeof")]
    KwTypeof,

    #[token("infer")]
    KwInfer,

    #[token("unique")]
    KwUnique,

    #[token("export")]
    KwExport,

    #[token("declare")]
    KwDeclare,

    #[token("default")]
    KwDefault,

    #[token("let")]
    KwLet,

    #[token("const")]
    KwConst,

    #[token("var")]
    KwVar,

    #[token("function")]
    KwFunction,

    #[token("namespace")]
    KwNamespace,

    #[token("module")]
    KwModule,

    #[token("new")]
    KwNew,

    #[token("is")]
    KwIs,

    #[token("asserts")]
    KwAsserts,

    #[token("import")]
    KwImport,

    #[token("this")]
    KwThis,

    /// Identifier. Defined after keywords so they take precedence on equal length.
    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Id,

    #[regex(r"[0-9][0-9_]*(?:\.[0-9_]*)?(?:[eE][+-]?[0-9]+)?n?")]
    #[regex(r"0[xXoObB][0-9a-fA-F_]+n?")]
    Number,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    StringLiteral,

    #[regex(r"`(?:[^`\\]|\\[\s\S])*`")]
    TemplateLiteral,

    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    Root,
    ExportDecl,
    TypeAlias,
    Interface,
    InterfaceBody,
    ExtendsClause,
    HeritageType,
    TypeParams,
    TypeParam,
    TypeArgs,
    TypeAnnotation,
    VarDecl,
    VarDeclarator,
    FunctionDecl,
    ModuleDecl,
    ModuleBlock,
    ParamList,
    Param,
    Initializer,
    Verbatim,

    // Type members
    PropertySignature,
    MethodSignature,
    CallSignature,
    ConstructSignature,
    IndexSignature,
    ComputedName,

    // Types
    TypeRef,
    TypeLiteral,
    MappedType,
    MappedTypeParam,
    MappedAsClause,
    UnionType,
    IntersectionType,
    ArrayType,
    IndexedAccessType,
    TupleType,
    TupleElement,
    ParenType,
    TypeOperator,
    TypeQuery,
    LiteralType,
    FunctionType,
    ConstructorType,
    ConditionalType,
    InferType,
    ThisType,
    TypePredicate,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Keywords are contextual in TypeScript and double as names in most positions.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (KwType as u16) && (self as u16) <= (KwThis as u16)
    }

    /// Anything usable as a property, parameter or binding name.
    #[inline]
    pub fn is_name(self) -> bool {
        self == Id || self.is_keyword()
    }

    #[inline]
    pub fn is_type(self) -> bool {
        (self as u16) >= (TypeRef as u16) && (self as u16) <= (TypePredicate as u16)
            && !matches!(self, MappedTypeParam | MappedAsClause | TupleElement)
    }

    #[inline]
    pub fn is_member(self) -> bool {
        matches!(
            self,
            PropertySignature
                | MethodSignature
                | CallSignature
                | ConstructSignature
                | IndexSignature
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TsLang {}

impl Language for TsLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<TsLang>;
pub type SyntaxToken = rowan::SyntaxToken<TsLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Tokens that can start a type.
    pub const TYPE_FIRST: TokenSet = TokenSet::new(&[
        ParenOpen,
        BracketOpen,
        BraceOpen,
        LAngle,
        Pipe,
        Amp,
        Minus,
        Id,
        Number,
        StringLiteral,
        TemplateLiteral,
        KwKeyof,
        KwReadonly,
        KwUnique,
        KwTypeof,
        KwInfer,
        KwNew,
        KwThis,
        KwAsserts,
        KwImport,
    ]);

    pub const TYPE_OPERATORS: TokenSet = TokenSet::new(&[KwKeyof, KwReadonly, KwUnique]);

    pub const MEMBER_SEPARATORS: TokenSet = TokenSet::new(&[Semicolon, Comma]);

    /// Tokens that start a statement the grammar understands.
    pub const STATEMENT_FIRST: TokenSet = TokenSet::new(&[
        KwType,
        KwInterface,
        KwExport,
        KwDeclare,
        KwLet,
        KwConst,
        KwVar,
        KwFunction,
        KwNamespace,
        KwModule,
    ]);

    pub const MEMBER_RECOVERY: TokenSet = TokenSet::new(&[BraceClose, Semicolon, Comma]);

    pub const TYPE_RECOVERY: TokenSet = TokenSet::new(&[
        Semicolon,
        Comma,
        ParenClose,
        BracketClose,
        BraceClose,
        RAngle,
        Equals,
    ]);
}
