use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{TYPE_FIRST, TYPE_OPERATORS, TYPE_RECOVERY};

impl Parser<'_> {
    /// Parses a type if one can start here, otherwise reports `ExpectedType` without consuming.
    pub(crate) fn parse_type_or_error(&mut self, context: &str) {
        if self.currently_is_one_of(TYPE_FIRST) {
            self.parse_type();
        } else {
            self.error_msg(DiagnosticKind::ExpectedType, context);
        }
    }

    /// Type with conditional types allowed regardless of the enclosing context.
    fn parse_nested_type(&mut self, context: &str) {
        self.nested(|p| p.parse_type_or_error(context));
    }

    /// `Check extends Extends ? True : False` or any narrower type.
    pub(crate) fn parse_type(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        let checkpoint = self.checkpoint();
        self.parse_union_type();

        if !self.disallow_conditional
            && self.currently_is(SyntaxKind::KwExtends)
            && !self.has_preceding_newline()
        {
            self.start_node_at(checkpoint, SyntaxKind::ConditionalType);
            self.bump(); // consume 'extends'

            let saved = std::mem::replace(&mut self.disallow_conditional, true);
            self.parse_type_or_error("after `extends`");
            self.disallow_conditional = saved;

            self.expect(SyntaxKind::Question, "`?` in conditional type");
            self.parse_type_or_error("for the true branch");
            self.expect(SyntaxKind::Colon, "`:` in conditional type");
            self.parse_type_or_error("for the false branch");
            self.finish_node();
        }

        self.exit_recursion();
    }

    /// `A | B | C`, optionally with a leading `|`.
    fn parse_union_type(&mut self) {
        let checkpoint = self.checkpoint();
        self.eat_token(SyntaxKind::Pipe);
        self.parse_intersection_type();
        if !self.currently_is(SyntaxKind::Pipe) {
            return;
        }
        self.start_node_at(checkpoint, SyntaxKind::UnionType);
        while self.eat_token(SyntaxKind::Pipe) {
            self.parse_intersection_or_error();
        }
        self.finish_node();
    }

    fn parse_intersection_or_error(&mut self) {
        if self.currently_is_one_of(TYPE_FIRST) {
            self.parse_intersection_type();
        } else {
            self.error_msg(DiagnosticKind::ExpectedType, "after `|`");
        }
    }

    /// `A & B & C`, optionally with a leading `&`.
    fn parse_intersection_type(&mut self) {
        let checkpoint = self.checkpoint();
        self.eat_token(SyntaxKind::Amp);
        self.parse_operator_type();
        if !self.currently_is(SyntaxKind::Amp) {
            return;
        }
        self.start_node_at(checkpoint, SyntaxKind::IntersectionType);
        while self.eat_token(SyntaxKind::Amp) {
            if self.currently_is_one_of(TYPE_FIRST) {
                self.parse_operator_type();
            } else {
                self.error_msg(DiagnosticKind::ExpectedType, "after `&`");
            }
        }
        self.finish_node();
    }

    /// `keyof T` | `readonly T[]` | `unique symbol` | `infer U`
    fn parse_operator_type(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        let next = self.peek_nth(1);
        let operand_follows = TYPE_FIRST.contains(next);
        match self.current() {
            kind if TYPE_OPERATORS.contains(kind) && operand_follows => {
                self.start_node(SyntaxKind::TypeOperator);
                self.bump();
                self.parse_operator_type();
                self.finish_node();
            }
            SyntaxKind::KwInfer if next.is_name() => self.parse_infer_type(),
            _ => self.parse_postfix_type(),
        }
        self.exit_recursion();
    }

    /// `infer U` with an optional `extends C` constraint.
    fn parse_infer_type(&mut self) {
        self.start_node(SyntaxKind::InferType);
        self.bump(); // consume 'infer'
        self.bump(); // consume name
        if self.currently_is(SyntaxKind::KwExtends) && self.infer_constraint_follows() {
            self.bump();
            let saved = std::mem::replace(&mut self.disallow_conditional, true);
            self.parse_type_or_error("as the constraint");
            self.disallow_conditional = saved;
        }
        self.finish_node();
    }

    /// At `extends` after `infer U`: a constraint, unless this `extends`
    /// starts a conditional type (the operand is followed by `?`).
    fn infer_constraint_follows(&mut self) -> bool {
        if self.disallow_conditional {
            return true;
        }
        self.skip_trivia_to_buffer();
        let mut depth = 0usize;
        for token in &self.tokens[self.pos + 1..] {
            match token.kind {
                SyntaxKind::ParenOpen
                | SyntaxKind::BracketOpen
                | SyntaxKind::BraceOpen
                | SyntaxKind::LAngle => depth += 1,
                SyntaxKind::ParenClose
                | SyntaxKind::BracketClose
                | SyntaxKind::BraceClose
                | SyntaxKind::RAngle => {
                    if depth == 0 {
                        return true;
                    }
                    depth -= 1;
                }
                SyntaxKind::Question if depth == 0 => return false,
                SyntaxKind::Comma | SyntaxKind::Semicolon | SyntaxKind::Equals
                    if depth == 0 =>
                {
                    return true;
                }
                _ => {}
            }
        }
        true
    }

    /// Primary type followed by `[]` / `[K]` postfixes on the same line.
    fn parse_postfix_type(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary_type();
        while self.currently_is(SyntaxKind::BracketOpen) && !self.has_preceding_newline() {
            if self.next_is(SyntaxKind::BracketClose) {
                self.start_node_at(checkpoint, SyntaxKind::ArrayType);
                self.bump();
                self.bump();
            } else {
                self.start_node_at(checkpoint, SyntaxKind::IndexedAccessType);
                self.open_delimiter(); // consume '['
                self.parse_nested_type("as the index");
                self.close_delimiter(SyntaxKind::BracketClose, "indexed access type");
            }
            self.finish_node();
        }
    }

    fn parse_primary_type(&mut self) {
        let next = self.peek_nth(1);
        match self.current() {
            SyntaxKind::ParenOpen if self.at_function_type() => {
                self.parse_function_type(SyntaxKind::FunctionType)
            }
            SyntaxKind::ParenOpen => self.parse_paren_type(),
            SyntaxKind::LAngle => self.parse_function_type(SyntaxKind::FunctionType),
            SyntaxKind::KwNew => self.parse_function_type(SyntaxKind::ConstructorType),
            SyntaxKind::Id if next == SyntaxKind::KwNew && self.current_text() == "abstract" => {
                self.parse_function_type(SyntaxKind::ConstructorType)
            }
            SyntaxKind::BraceOpen if self.at_mapped_type() => self.parse_mapped_type(),
            SyntaxKind::BraceOpen => self.parse_type_literal(),
            SyntaxKind::BracketOpen => self.parse_tuple_type(),
            SyntaxKind::StringLiteral | SyntaxKind::Number | SyntaxKind::TemplateLiteral => {
                self.start_node(SyntaxKind::LiteralType);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::Minus if next == SyntaxKind::Number => {
                self.start_node(SyntaxKind::LiteralType);
                self.bump();
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwTypeof => self.parse_type_query(),
            SyntaxKind::KwThis if next == SyntaxKind::KwIs => self.parse_type_predicate(),
            SyntaxKind::KwThis => {
                self.start_node(SyntaxKind::ThisType);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwAsserts if next.is_name() && !self.next_on_new_line() => {
                self.parse_type_predicate()
            }
            SyntaxKind::KwImport if next == SyntaxKind::ParenOpen => self.parse_import_type(),
            kind if kind.is_name() && next == SyntaxKind::KwIs => self.parse_type_predicate(),
            kind if kind.is_name() => self.parse_type_ref(),
            _ => self.error_recover(DiagnosticKind::ExpectedType, "here", TYPE_RECOVERY),
        }
    }

    fn next_on_new_line(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.tokens[self.pos + 1..]
            .iter()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| t.kind == SyntaxKind::Newline)
    }

    /// At `(`: a function type when the matching `)` is followed by `=>`.
    fn at_function_type(&mut self) -> bool {
        self.scan_past_balanced()
            .is_some_and(|pos| self.kind_at(pos) == SyntaxKind::FatArrow)
    }

    /// At `{`: `{ [K in`, optionally after `readonly` / `+readonly` / `-readonly`.
    fn at_mapped_type(&mut self) -> bool {
        let mut at = 1;
        match self.peek_nth(1) {
            SyntaxKind::Plus | SyntaxKind::Minus => {
                if self.peek_nth(2) != SyntaxKind::KwReadonly {
                    return false;
                }
                at = 3;
            }
            SyntaxKind::KwReadonly => at = 2,
            _ => {}
        }
        self.peek_nth(at) == SyntaxKind::BracketOpen
            && self.peek_nth(at + 1).is_name()
            && self.peek_nth(at + 2) == SyntaxKind::KwIn
    }

    /// `(params) => R` | `new (params) => R` | `abstract new <T>(params) => R`
    fn parse_function_type(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        if self.currently_is(SyntaxKind::Id) {
            self.bump(); // consume 'abstract'
        }
        self.eat_token(SyntaxKind::KwNew);
        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_params();
        }
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_param_list();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` to start the parameter list");
        }
        self.expect(SyntaxKind::FatArrow, "`=>` before the return type");
        self.parse_type_or_error("as the return type");
        self.finish_node();
    }

    fn parse_paren_type(&mut self) {
        self.start_node(SyntaxKind::ParenType);
        self.open_delimiter(); // consume '('
        self.parse_nested_type("inside parentheses");
        self.close_delimiter(SyntaxKind::ParenClose, "parenthesized type");
        self.finish_node();
    }

    /// `{ members }`
    fn parse_type_literal(&mut self) {
        self.start_node(SyntaxKind::TypeLiteral);
        self.open_delimiter(); // consume '{'
        self.nested(|p| p.parse_members());
        self.close_delimiter(SyntaxKind::BraceClose, "type literal");
        self.finish_node();
    }

    /// `{ -readonly [K in Keys as Name]+?: V }`
    fn parse_mapped_type(&mut self) {
        self.start_node(SyntaxKind::MappedType);
        self.open_delimiter(); // consume '{'
        if matches!(self.current(), SyntaxKind::Plus | SyntaxKind::Minus) {
            self.bump();
        }
        self.eat_token(SyntaxKind::KwReadonly);

        self.open_delimiter(); // consume '['
        self.start_node(SyntaxKind::MappedTypeParam);
        self.bump(); // consume key name
        self.bump(); // consume 'in'
        self.parse_nested_type("as the key constraint");
        self.finish_node();
        if self.currently_is(SyntaxKind::KwAs) {
            self.start_node(SyntaxKind::MappedAsClause);
            self.bump();
            self.parse_nested_type("after `as`");
            self.finish_node();
        }
        self.close_delimiter(SyntaxKind::BracketClose, "mapped type key");

        if matches!(self.current(), SyntaxKind::Plus | SyntaxKind::Minus) {
            self.bump();
            self.expect(SyntaxKind::Question, "`?` after the modifier sign");
        } else {
            self.eat_token(SyntaxKind::Question);
        }
        if self.eat_token(SyntaxKind::Colon) {
            self.parse_nested_type("as the mapped value");
        }
        if !self.eat_token(SyntaxKind::Semicolon) {
            self.eat_token(SyntaxKind::Comma);
        }

        while !self.should_stop() && !self.currently_is(SyntaxKind::BraceClose) {
            if self.currently_is(SyntaxKind::Error) {
                break;
            }
            self.error_and_bump_msg(
                DiagnosticKind::UnexpectedToken,
                "a mapped type has exactly one member",
            );
        }
        self.close_delimiter(SyntaxKind::BraceClose, "mapped type");
        self.finish_node();
    }

    /// `[A, b?: B, ...C[]]`
    fn parse_tuple_type(&mut self) {
        self.start_node(SyntaxKind::TupleType);
        self.open_delimiter(); // consume '['
        loop {
            let kind = self.current();
            if self.should_stop() || kind == SyntaxKind::BracketClose {
                break;
            }
            self.parse_tuple_element();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::BracketClose, "tuple type");
        self.finish_node();
    }

    fn parse_tuple_element(&mut self) {
        self.start_node(SyntaxKind::TupleElement);
        self.eat_token(SyntaxKind::DotDotDot);
        let labeled = self.current().is_name()
            && (self.next_is(SyntaxKind::Colon)
                || (self.next_is(SyntaxKind::Question) && self.peek_nth(2) == SyntaxKind::Colon));
        if labeled {
            self.bump();
            self.eat_token(SyntaxKind::Question);
            self.bump(); // consume ':'
        }
        self.parse_nested_type("as a tuple element");
        self.eat_token(SyntaxKind::Question);
        self.finish_node();
    }

    /// `typeof a.b<T>` | `typeof import("m")`
    fn parse_type_query(&mut self) {
        self.start_node(SyntaxKind::TypeQuery);
        self.bump(); // consume 'typeof'
        if self.currently_is(SyntaxKind::KwImport) && self.next_is(SyntaxKind::ParenOpen) {
            self.parse_import_specifier();
        } else if self.current().is_name() {
            self.bump();
        } else {
            self.error_msg(DiagnosticKind::ExpectedName, "after `typeof`");
        }
        self.parse_qualified_rest();
        self.finish_node();
    }

    /// `x is T` | `this is T` | `asserts x` | `asserts x is T`
    fn parse_type_predicate(&mut self) {
        self.start_node(SyntaxKind::TypePredicate);
        if self.currently_is(SyntaxKind::KwAsserts) {
            self.bump();
        }
        self.bump(); // consume parameter name or 'this'
        if self.eat_token(SyntaxKind::KwIs) {
            self.parse_type_or_error("after `is`");
        }
        self.finish_node();
    }

    /// `A.B.C<T>`
    fn parse_type_ref(&mut self) {
        self.start_node(SyntaxKind::TypeRef);
        self.bump();
        self.parse_qualified_rest();
        self.finish_node();
    }

    /// `import("m").A<T>`
    fn parse_import_type(&mut self) {
        self.start_node(SyntaxKind::TypeRef);
        self.parse_import_specifier();
        self.parse_qualified_rest();
        self.finish_node();
    }

    fn parse_import_specifier(&mut self) {
        self.bump(); // consume 'import'
        self.open_delimiter(); // consume '('
        if !self.eat_token(SyntaxKind::StringLiteral) {
            self.error_msg(DiagnosticKind::ExpectedToken, "a module specifier string");
        }
        self.close_delimiter(SyntaxKind::ParenClose, "import type");
    }

    /// `.name` segments, then type arguments on the same line.
    fn parse_qualified_rest(&mut self) {
        while self.currently_is(SyntaxKind::Dot) && self.peek_nth(1).is_name() {
            self.bump();
            self.bump();
        }
        if self.currently_is(SyntaxKind::LAngle) && !self.has_preceding_newline() {
            self.parse_type_args();
        }
    }

    /// `<A, B>`
    pub(super) fn parse_type_args(&mut self) {
        self.start_node(SyntaxKind::TypeArgs);
        self.open_delimiter(); // consume '<'
        loop {
            let kind = self.current();
            if self.should_stop() || kind == SyntaxKind::RAngle {
                break;
            }
            self.parse_nested_type("as a type argument");
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::RAngle, "type arguments");
        self.finish_node();
    }
}
