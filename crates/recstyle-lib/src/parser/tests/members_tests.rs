use super::expect_valid_cst;
use indoc::indoc;

#[test]
fn readonly_index_signature() {
    let input = indoc! {r#"
    interface Dict {
      readonly [key: string]: number;
    }
    "#};

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Interface
        KwInterface "interface"
        Id "Dict"
        InterfaceBody
          BraceOpen "{"
          IndexSignature
            KwReadonly "readonly"
            BracketOpen "["
            Param
              Id "key"
              TypeAnnotation
                Colon ":"
                TypeRef
                  Id "string"
            BracketClose "]"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "number"
          Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn every_member_kind() {
    let input = indoc! {r#"
    interface I {
      a?: string
      [key: string]: any
      m<T>(x: T): void;
      (): number;
      new (s: string): I;
    }
    "#};

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Interface
        KwInterface "interface"
        Id "I"
        InterfaceBody
          BraceOpen "{"
          PropertySignature
            Id "a"
            Question "?"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "string"
          IndexSignature
            BracketOpen "["
            Param
              Id "key"
              TypeAnnotation
                Colon ":"
                TypeRef
                  Id "string"
            BracketClose "]"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "any"
          MethodSignature
            Id "m"
            TypeParams
              LAngle "<"
              TypeParam
                Id "T"
              RAngle ">"
            ParamList
              ParenOpen "("
              Param
                Id "x"
                TypeAnnotation
                  Colon ":"
                  TypeRef
                    Id "T"
              ParenClose ")"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "void"
          Semicolon ";"
          CallSignature
            ParamList
              ParenOpen "("
              ParenClose ")"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "number"
          Semicolon ";"
          ConstructSignature
            KwNew "new"
            ParamList
              ParenOpen "("
              Param
                Id "s"
                TypeAnnotation
                  Colon ":"
                  TypeRef
                    Id "string"
              ParenClose ")"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "I"
          Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn computed_name_and_keyword_names() {
    let input = "type T = { [Symbol.iterator](): void, readonly: boolean, type?: string };";

    let res = expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      TypeAlias
        KwType "type"
        Id "T"
        Equals "="
        TypeLiteral
          BraceOpen "{"
          MethodSignature
            ComputedName
              BracketOpen "["
              Id "Symbol"
              Dot "."
              Id "iterator"
              BracketClose "]"
            ParamList
              ParenOpen "("
              ParenClose ")"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "void"
          Comma ","
          PropertySignature
            KwReadonly "readonly"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "boolean"
          Comma ","
          PropertySignature
            KwType "type"
            Question "?"
            TypeAnnotation
              Colon ":"
              TypeRef
                Id "string"
          BraceClose "}"
        Semicolon ";"
    "#);
}
