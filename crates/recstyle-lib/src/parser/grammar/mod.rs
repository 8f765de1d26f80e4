//! Grammar productions for TypeScript declarations.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Only the declaration-level grammar is understood; statements and
//! expressions outside it are kept as opaque `Verbatim` nodes.

mod members;
mod statements;
mod types;

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::token_text;

impl<'src> Parser<'src> {
    /// Runs `f` with conditional types allowed again, as inside any bracketed construct.
    pub(super) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.disallow_conditional, false);
        let result = f(self);
        self.disallow_conditional = saved;
        result
    }

    /// Bumps the current opener and everything up to its partner (or EOF).
    pub(super) fn bump_balanced(&mut self) {
        let mut depth = 0usize;
        loop {
            let kind = self.current();
            if self.should_stop() {
                break;
            }
            match kind {
                SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => {
                    depth += 1
                }
                SyntaxKind::ParenClose | SyntaxKind::BracketClose | SyntaxKind::BraceClose => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.bump();
            if depth == 0 {
                break;
            }
        }
    }

    /// Text of the n-th non-trivia token ahead (empty past EOF).
    pub(super) fn peek_nth_text(&mut self, n: usize) -> &'src str {
        self.skip_trivia_to_buffer();
        let mut count = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let token = self.tokens[pos];
            if !token.kind.is_trivia() {
                if count == n {
                    return token_text(self.source, &token);
                }
                count += 1;
            }
            pos += 1;
        }
        ""
    }
}
