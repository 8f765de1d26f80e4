//! Parser infrastructure for TypeScript declarations.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached before the next node,
//!   so node ranges never include surrounding trivia
//! - Checkpoint-based wrapping: retroactively wrap nodes for unions, postfix `[]` and
//!   conditional types
//! - Opaque statements: anything outside the declaration grammar becomes a `Verbatim`
//!   node skipped with bracket balancing
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Unclosed delimiters at EOF are reported once, spanning the whole construct
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;
mod printer;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    HeritageType, IndexSignature, InferType, Interface, InterfaceBody, MappedModifier,
    MappedType, MappedTypeParam, Member, Param, ParenType, Root, Type, TypeAlias,
    TypeAnnotation, TypeArgs, TypeLiteral, TypeOperator, TypeParam, TypeParams, TypeQuery,
    TypeRef,
};

pub use core::{ParseResult, Parser};
pub use printer::CstPrinter;

use crate::Result;
use lexer::lex;

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
pub const DEFAULT_RECURSION_FUEL: u32 = 1024;

/// Main entry point with default fuel limits. Returns Err on fuel exhaustion.
pub fn parse(source: &str) -> Result<ParseResult> {
    parse_with_fuel(source, Some(DEFAULT_EXEC_FUEL), Some(DEFAULT_RECURSION_FUEL))
}

/// Parse with custom fuel limits. `None` = unlimited.
pub fn parse_with_fuel(
    source: &str,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
) -> Result<ParseResult> {
    Parser::new(source, lex(source))
        .with_exec_fuel(exec_fuel)
        .with_recursion_fuel(recursion_fuel)
        .parse()
}
