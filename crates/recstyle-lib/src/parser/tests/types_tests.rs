use super::expect_valid_cst;
use indoc::indoc;

#[test]
fn mapped_type_with_modifiers() {
    let input = "type M = { readonly [K in keyof T]?: T[K] };";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "M"
        Equals "="
        MappedType
          BraceOpen "{"
          KwReadonly "readonly"
          BracketOpen "["
          MappedTypeParam
            Id "K"
            KwIn "in"
            TypeOperator
              KwKeyof "keyof"
              TypeRef
                Id "T"
          BracketClose "]"
          Question "?"
          Colon ":"
          IndexedAccessType
            TypeRef
              Id "T"
            BracketOpen "["
            TypeRef
              Id "K"
            BracketClose "]"
          BraceClose "}"
        Semicolon ";"
    "#);
}

#[test]
fn mapped_type_with_sign_modifiers_and_as_clause() {
    let input = "type M = { -readonly [K in Keys as `get${K}`]-?: V };";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "M"
        Equals "="
        MappedType
          BraceOpen "{"
          Minus "-"
          KwReadonly "readonly"
          BracketOpen "["
          MappedTypeParam
            Id "K"
            KwIn "in"
            TypeRef
              Id "Keys"
          MappedAsClause
            KwAs "as"
            LiteralType
              TemplateLiteral "`get${K}`"
          BracketClose "]"
          Minus "-"
          Question "?"
          Colon ":"
          TypeRef
            Id "V"
          BraceClose "}"
        Semicolon ";"
    "#);
}

#[test]
fn function_type() {
    let input = "type F = (x: string) => void;";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "F"
        Equals "="
        FunctionType
          ParamList
            ParenOpen "("
            Param
              Id "x"
              TypeAnnotation
                Colon ":"
                TypeRef
                  Id "string"
            ParenClose ")"
          FatArrow "=>"
          TypeRef
            Id "void"
        Semicolon ";"
    "#);
}

#[test]
fn parenthesized_type_is_not_a_function_type() {
    let input = "type P = (A | B)[];";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "P"
        Equals "="
        ArrayType
          ParenType
            ParenOpen "("
            UnionType
              TypeRef
                Id "A"
              Pipe "|"
              TypeRef
                Id "B"
            ParenClose ")"
          BracketOpen "["
          BracketClose "]"
        Semicolon ";"
    "#);
}

#[test]
fn conditional_type_with_infer() {
    let input = "type U<T> = T extends Array<infer E> ? E : never;";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "U"
        TypeParams
          LAngle "<"
          TypeParam
            Id "T"
          RAngle ">"
        Equals "="
        ConditionalType
          TypeRef
            Id "T"
          KwExtends "extends"
          TypeRef
            Id "Array"
            TypeArgs
              LAngle "<"
              InferType
                KwInfer "infer"
                Id "E"
              RAngle ">"
          Question "?"
          TypeRef
            Id "E"
          Colon ":"
          TypeRef
            Id "never"
        Semicolon ";"
    "#);
}

#[test]
fn union_with_leading_pipe() {
    let input = indoc! {r#"
    type S =
      | "a"
      | -1;
    "#};

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "S"
        Equals "="
        UnionType
          Pipe "|"
          LiteralType
            StringLiteral "\"a\""
          Pipe "|"
          LiteralType
            Minus "-"
            Number "1"
        Semicolon ";"
    "#);
}

#[test]
fn tuple_elements() {
    let input = "type T = [a: string, b?: number, ...rest: boolean[]];";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "T"
        Equals "="
        TupleType
          BracketOpen "["
          TupleElement
            Id "a"
            Colon ":"
            TypeRef
              Id "string"
          Comma ","
          TupleElement
            Id "b"
            Question "?"
            Colon ":"
            TypeRef
              Id "number"
          Comma ","
          TupleElement
            DotDotDot "..."
            Id "rest"
            Colon ":"
            ArrayType
              TypeRef
                Id "boolean"
              BracketOpen "["
              BracketClose "]"
          BracketClose "]"
        Semicolon ";"
    "#);
}

#[test]
fn typeof_query() {
    let input = "let x: typeof y.z;";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      VarDecl
        KwLet "let"
        VarDeclarator
          Id "x"
          TypeAnnotation
            Colon ":"
            TypeQuery
              KwTypeof "typeof"
              Id "y"
              Dot "."
              Id "z"
        Semicolon ";"
    "#);
}

#[test]
fn readonly_array_operator() {
    let input = "type R = readonly string[];";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "R"
        Equals "="
        TypeOperator
          KwReadonly "readonly"
          ArrayType
            TypeRef
              Id "string"
            BracketOpen "["
            BracketClose "]"
        Semicolon ";"
    "#);
}
