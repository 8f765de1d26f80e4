use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::{lex, token_text};

/// Format tokens without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

/// Format tokens with trivia included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, include_trivia: bool) -> String {
    let tokens = lex(input);
    let mut out = String::new();
    for token in tokens {
        if include_trivia || !token.kind.is_trivia() {
            out.push_str(&format!(
                "{:?} {:?}\n",
                token.kind,
                token_text(input, &token)
            ));
        }
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("( ) [ ] { } < > , ; : ? . ... = => | & + - * @ !"), @r#"
    ParenOpen "("
    ParenClose ")"
    BracketOpen "["
    BracketClose "]"
    BraceOpen "{"
    BraceClose "}"
    LAngle "<"
    RAngle ">"
    Comma ","
    Semicolon ";"
    Colon ":"
    Question "?"
    Dot "."
    DotDotDot "..."
    Equals "="
    FatArrow "=>"
    Pipe "|"
    Amp "&"
    Plus "+"
    Minus "-"
    Star "*"
    At "@"
    Bang "!"
    "#);
}

#[test]
fn keywords_win_only_on_exact_match() {
    insta::assert_snapshot!(snapshot("type types typeof keyof readonly in infer $in"), @r#"
    KwType "type"
    Id "types"
    KwTypeof "typeof"
    KwKeyof "keyof"
    KwReadonly "readonly"
    KwIn "in"
    KwInfer "infer"
    Id "$in"
    "#);
}

#[test]
fn nested_type_arguments_close_separately() {
    insta::assert_snapshot!(snapshot("Record<string, Array<number>>"), @r#"
    Id "Record"
    LAngle "<"
    Id "string"
    Comma ","
    Id "Array"
    LAngle "<"
    Id "number"
    RAngle ">"
    RAngle ">"
    "#);
}

#[test]
fn literals() {
    insta::assert_snapshot!(snapshot(r#"'a' "b" 42 0xff 1.5 `t${x}`"#), @r#"
    StringLiteral "'a'"
    StringLiteral "\"b\""
    Number "42"
    Number "0xff"
    Number "1.5"
    TemplateLiteral "`t${x}`"
    "#);
}

#[test]
fn trivia() {
    insta::assert_snapshot!(snapshot_raw("a // c\n/* b */ b"), @r#"
    Id "a"
    Whitespace " "
    LineComment "// c"
    Newline "\n"
    BlockComment "/* b */"
    Whitespace " "
    Id "b"
    "#);
}

#[test]
fn unknown_characters_coalesce() {
    insta::assert_snapshot!(snapshot("a #% b"), @r##"
    Id "a"
    Garbage "#%"
    Id "b"
    "##);
}

#[test]
fn unicode_identifiers() {
    insta::assert_snapshot!(snapshot("interface Données { [clé: string]: π }"), @r#"
    KwInterface "interface"
    Id "Données"
    BraceOpen "{"
    BracketOpen "["
    Id "clé"
    Colon ":"
    Id "string"
    BracketClose "]"
    Colon ":"
    Id "π"
    BraceClose "}"
    "#);
}

#[test]
fn hashbang_line_is_a_comment() {
    insta::assert_snapshot!(snapshot_raw("#!/usr/bin/env ts-node\ntype A = B;"), @r##"
    LineComment "#!/usr/bin/env ts-node"
    Newline "\n"
    KwType "type"
    Whitespace " "
    Id "A"
    Whitespace " "
    Equals "="
    Whitespace " "
    Id "B"
    Semicolon ";"
    "##);
}

#[test]
fn hashbang_only_at_start() {
    insta::assert_snapshot!(snapshot("a\n#!b"), @r##"
    Id "a"
    Garbage "#"
    Bang "!"
    Id "b"
    "##);
}

#[test]
fn byte_order_mark_is_whitespace() {
    let input = "\u{FEFF}#!node\ntype A = B;";
    let tokens = lex(input);

    assert_eq!(tokens[0].kind, SyntaxKind::Whitespace);
    assert_eq!(token_text(input, &tokens[1]), "#!node");
    assert_eq!(tokens[1].kind, SyntaxKind::LineComment);
    assert_eq!(tokens[2].kind, SyntaxKind::Newline);
    assert_eq!(u32::from(tokens[2].span.start()), 9);
}
