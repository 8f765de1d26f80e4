//! Lexer for TypeScript declaration source.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. Expression syntax the grammar never inspects
//! (operators like `/` or `%`) ends up as `Garbage` inside opaque `Verbatim` nodes.
//!
//! ## Preamble
//!
//! A leading byte order mark is whitespace and a `#!` line at the very start of the file
//! is a line comment, so executable scripts (`#!/usr/bin/env ts-node`) parse cleanly.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let offset = lex_preamble(source, &mut tokens);
    let body = &source[offset..];
    let shifted =
        |range: Range<usize>| range_to_text_range(range.start + offset..range.end + offset);

    let mut lexer = SyntaxKind::lexer(body);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(SyntaxKind::Garbage, shifted(start..end)));
                }
                tokens.push(Token::new(kind, shifted(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(SyntaxKind::Garbage, shifted(start..body.len())));
                }
                break;
            }
        }
    }

    tokens
}

/// Pushes BOM and hashbang tokens; returns the offset where regular lexing starts.
fn lex_preamble(source: &str, tokens: &mut Vec<Token>) -> usize {
    let mut offset = 0;
    if source.starts_with('\u{FEFF}') {
        offset = '\u{FEFF}'.len_utf8();
        tokens.push(Token::new(SyntaxKind::Whitespace, range_to_text_range(0..offset)));
    }
    if source[offset..].starts_with("#!") {
        let line_end = source[offset..]
            .find(['\r', '\n'])
            .map_or(source.len(), |i| offset + i);
        tokens.push(Token::new(
            SyntaxKind::LineComment,
            range_to_text_range(offset..line_end),
        ));
        offset = line_end;
    }
    offset
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
