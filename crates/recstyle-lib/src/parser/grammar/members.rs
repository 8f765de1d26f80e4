use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::MEMBER_SEPARATORS;

impl Parser<'_> {
    /// Members of an interface body or type literal, up to the closing `}`.
    pub(super) fn parse_members(&mut self) {
        loop {
            let kind = self.current();
            if self.should_stop() || kind == SyntaxKind::BraceClose {
                break;
            }
            if MEMBER_SEPARATORS.contains(kind) {
                self.bump();
                continue;
            }
            if starts_member(kind) {
                self.parse_member();
                continue;
            }
            self.error_and_bump_msg(
                DiagnosticKind::UnexpectedToken,
                "not a type member; expected a property, method or signature",
            );
        }
    }

    fn parse_member(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        let checkpoint = self.checkpoint();

        if self.currently_is(SyntaxKind::KwReadonly) && starts_member_name(self.peek_nth(1)) {
            self.bump();
        }
        if matches!(self.current_text(), "get" | "set") && starts_member_name(self.peek_nth(1)) {
            self.bump();
        }

        match self.current() {
            SyntaxKind::BracketOpen if self.at_index_signature() => {
                self.parse_index_signature(checkpoint)
            }
            SyntaxKind::ParenOpen | SyntaxKind::LAngle => {
                self.start_node_at(checkpoint, SyntaxKind::CallSignature);
                self.parse_signature_rest();
                self.finish_node();
            }
            SyntaxKind::KwNew
                if matches!(self.peek_nth(1), SyntaxKind::ParenOpen | SyntaxKind::LAngle) =>
            {
                self.start_node_at(checkpoint, SyntaxKind::ConstructSignature);
                self.bump(); // consume 'new'
                self.parse_signature_rest();
                self.finish_node();
            }
            _ => self.parse_property_or_method(checkpoint),
        }

        self.exit_recursion();
    }

    /// `[` starts an index signature (rather than a computed name) when a
    /// parameter list follows: `[k: K]`, `[k, ...`, `[k?: ...`, `[...` or `[]`.
    fn at_index_signature(&mut self) -> bool {
        let first = self.peek_nth(1);
        if matches!(first, SyntaxKind::DotDotDot | SyntaxKind::BracketClose) {
            return true;
        }
        if !first.is_name() {
            return false;
        }
        match self.peek_nth(2) {
            SyntaxKind::Colon | SyntaxKind::Comma => true,
            SyntaxKind::Question => matches!(
                self.peek_nth(3),
                SyntaxKind::Colon | SyntaxKind::Comma | SyntaxKind::BracketClose
            ),
            _ => false,
        }
    }

    /// `readonly [key: K, ...]: V`
    fn parse_index_signature(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::IndexSignature);
        self.open_delimiter(); // consume '['
        loop {
            let kind = self.current();
            if self.should_stop() || kind == SyntaxKind::BracketClose {
                break;
            }
            self.parse_param();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.close_delimiter(SyntaxKind::BracketClose, "index signature");
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation();
        }
        self.finish_node();
    }

    /// `name?: T` or `name?<T>(params): R`
    fn parse_property_or_method(&mut self, checkpoint: Checkpoint) {
        match self.current() {
            SyntaxKind::BracketOpen => self.parse_computed_name(),
            kind if starts_member_name(kind) => self.bump(),
            _ => {
                self.start_node_at(checkpoint, SyntaxKind::PropertySignature);
                self.error_msg(DiagnosticKind::ExpectedName, "a property name");
                self.finish_node();
                return;
            }
        }
        self.eat_token(SyntaxKind::Question);

        if matches!(self.current(), SyntaxKind::ParenOpen | SyntaxKind::LAngle) {
            self.start_node_at(checkpoint, SyntaxKind::MethodSignature);
            self.parse_signature_rest();
        } else {
            self.start_node_at(checkpoint, SyntaxKind::PropertySignature);
            if self.currently_is(SyntaxKind::Colon) {
                self.parse_type_annotation();
            }
        }
        self.finish_node();
    }

    /// `[expr]` property name; the expression is not interpreted.
    fn parse_computed_name(&mut self) {
        self.start_node(SyntaxKind::ComputedName);
        self.bump_balanced();
        self.finish_node();
    }

    /// `<T>(params): R` shared by signatures and function declarations.
    pub(super) fn parse_signature_rest(&mut self) {
        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_params();
        }
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_param_list();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`(` to start the parameter list");
        }
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation();
        }
    }

    pub(super) fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::ParamList);
        self.open_delimiter(); // consume '('
        self.nested(|p| {
            loop {
                let kind = p.current();
                if p.should_stop() || kind == SyntaxKind::ParenClose {
                    break;
                }
                if starts_param(kind) {
                    p.parse_param();
                } else {
                    p.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "not a parameter");
                    continue;
                }
                if !p.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        });
        self.close_delimiter(SyntaxKind::ParenClose, "parameter list");
        self.finish_node();
    }

    /// `...name?: T = default`
    pub(super) fn parse_param(&mut self) {
        self.start_node(SyntaxKind::Param);
        self.eat_token(SyntaxKind::DotDotDot);
        match self.current() {
            kind if kind.is_name() => self.bump(),
            SyntaxKind::BraceOpen | SyntaxKind::BracketOpen => self.parse_binding_pattern(),
            _ => self.error_msg(DiagnosticKind::ExpectedName, "a parameter name"),
        }
        self.eat_token(SyntaxKind::Question);
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation();
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_initializer();
        }
        self.finish_node();
    }

    /// `: Type`
    pub(super) fn parse_type_annotation(&mut self) {
        self.start_node(SyntaxKind::TypeAnnotation);
        self.bump(); // consume ':'
        self.parse_type_or_error("after `:`");
        self.finish_node();
    }

    /// `<in T extends C = D, ...>`
    pub(super) fn parse_type_params(&mut self) {
        self.start_node(SyntaxKind::TypeParams);
        self.open_delimiter(); // consume '<'
        self.nested(|p| {
            loop {
                let kind = p.current();
                if p.should_stop() || kind == SyntaxKind::RAngle {
                    break;
                }
                if kind.is_name() {
                    p.parse_type_param();
                } else {
                    p.error_and_bump_msg(DiagnosticKind::ExpectedName, "a type parameter name");
                    continue;
                }
                if !p.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        });
        self.close_delimiter(SyntaxKind::RAngle, "type parameters");
        self.finish_node();
    }

    fn parse_type_param(&mut self) {
        self.start_node(SyntaxKind::TypeParam);
        while (matches!(self.current(), SyntaxKind::KwConst | SyntaxKind::KwIn)
            || self.current_text() == "out")
            && self.peek_nth(1).is_name()
            && !matches!(self.peek_nth(1), SyntaxKind::KwExtends)
        {
            self.bump();
        }
        self.bump(); // consume name
        if self.eat_token(SyntaxKind::KwExtends) {
            self.parse_type_or_error("as the constraint");
        }
        if self.eat_token(SyntaxKind::Equals) {
            self.parse_type_or_error("as the default");
        }
        self.finish_node();
    }
}

fn starts_member_name(kind: SyntaxKind) -> bool {
    kind.is_name()
        || matches!(
            kind,
            SyntaxKind::StringLiteral | SyntaxKind::Number | SyntaxKind::BracketOpen
        )
}

fn starts_member(kind: SyntaxKind) -> bool {
    starts_member_name(kind) || matches!(kind, SyntaxKind::ParenOpen | SyntaxKind::LAngle)
}

fn starts_param(kind: SyntaxKind) -> bool {
    kind.is_name()
        || matches!(
            kind,
            SyntaxKind::DotDotDot | SyntaxKind::BraceOpen | SyntaxKind::BracketOpen
        )
}
