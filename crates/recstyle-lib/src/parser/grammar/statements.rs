use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::STATEMENT_FIRST;

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);

        while !self.should_stop() && !self.currently_is(SyntaxKind::Error) {
            if self.currently_is(SyntaxKind::BraceClose) {
                self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "no block to close here");
                continue;
            }
            self.parse_statement();
        }

        self.eat_trivia();
        self.finish_node();
    }

    fn parse_statement(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        match self.current() {
            SyntaxKind::KwExport => self.parse_export(),
            SyntaxKind::Semicolon => self.bump(),
            _ => {
                let checkpoint = self.checkpoint();
                self.parse_declaration(checkpoint, false);
            }
        }
        self.exit_recursion();
    }

    /// `export [default] <declaration>`
    fn parse_export(&mut self) {
        self.start_node(SyntaxKind::ExportDecl);
        self.bump(); // consume 'export'
        self.eat_token(SyntaxKind::KwDefault);
        let checkpoint = self.checkpoint();
        self.parse_declaration(checkpoint, false);
        self.finish_node();
    }

    /// Dispatches on the declaration keyword; modifiers are part of the declaration node.
    fn parse_declaration(&mut self, checkpoint: Checkpoint, mut progressed: bool) {
        if self.currently_is(SyntaxKind::KwDeclare) && self.peek_nth(1) != SyntaxKind::Equals {
            self.bump();
            progressed = true;
        }
        if self.current_text() == "async" && self.next_is(SyntaxKind::KwFunction) {
            self.bump();
            progressed = true;
        }

        let next = self.peek_nth(1);
        match self.current() {
            SyntaxKind::KwType if next.is_name() => self.parse_type_alias(checkpoint),
            SyntaxKind::KwInterface if next.is_name() => self.parse_interface(checkpoint),
            SyntaxKind::KwLet | SyntaxKind::KwConst | SyntaxKind::KwVar
                if starts_binding(next) && self.peek_nth_text(1) != "enum" =>
            {
                self.parse_var_decl(checkpoint)
            }
            SyntaxKind::KwFunction => self.parse_function_decl(checkpoint),
            SyntaxKind::KwNamespace | SyntaxKind::KwModule
                if next.is_name() || next == SyntaxKind::StringLiteral =>
            {
                self.parse_module_decl(checkpoint)
            }
            SyntaxKind::Id
                if self.current_text() == "global" && next == SyntaxKind::BraceOpen =>
            {
                self.parse_module_decl(checkpoint)
            }
            _ => self.parse_verbatim(checkpoint, progressed),
        }
    }

    /// `type Name<T> = Type;`
    fn parse_type_alias(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::TypeAlias);
        self.bump(); // consume 'type'
        self.bump(); // consume name

        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_params();
        }

        self.expect(SyntaxKind::Equals, "`=` after type alias name");
        self.parse_type_or_error("after `=`");
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `interface Name<T> extends A, B { members }`
    fn parse_interface(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::Interface);
        self.bump(); // consume 'interface'
        self.bump(); // consume name

        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_params();
        }
        if self.currently_is(SyntaxKind::KwExtends) {
            self.parse_extends_clause();
        }

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.start_node(SyntaxKind::InterfaceBody);
            self.open_delimiter(); // consume '{'
            self.nested(|p| p.parse_members());
            self.close_delimiter(SyntaxKind::BraceClose, "interface body");
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`{` to start the interface body");
        }
        self.finish_node();
    }

    fn parse_extends_clause(&mut self) {
        self.start_node(SyntaxKind::ExtendsClause);
        self.bump(); // consume 'extends'
        loop {
            self.parse_heritage_type();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }

    /// `A.B<T>` in an `extends` list.
    fn parse_heritage_type(&mut self) {
        if !self.current().is_name() {
            self.error_msg(DiagnosticKind::ExpectedName, "a type to extend");
            return;
        }
        self.start_node(SyntaxKind::HeritageType);
        self.bump();
        while self.currently_is(SyntaxKind::Dot) && self.peek_nth(1).is_name() {
            self.bump();
            self.bump();
        }
        if self.currently_is(SyntaxKind::LAngle) {
            self.parse_type_args();
        }
        self.finish_node();
    }

    /// `let a: T = expr, b;`
    fn parse_var_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::VarDecl);
        self.bump(); // consume 'let' | 'const' | 'var'
        loop {
            self.parse_var_declarator();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    fn parse_var_declarator(&mut self) {
        self.start_node(SyntaxKind::VarDeclarator);
        match self.current() {
            kind if kind.is_name() => self.bump(),
            SyntaxKind::BraceOpen | SyntaxKind::BracketOpen => self.parse_binding_pattern(),
            _ => self.error_msg(DiagnosticKind::ExpectedName, "a variable name"),
        }
        self.eat_token(SyntaxKind::Bang);
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation();
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_initializer();
        }
        self.finish_node();
    }

    /// Destructuring pattern, kept opaque.
    pub(super) fn parse_binding_pattern(&mut self) {
        self.start_node(SyntaxKind::Verbatim);
        self.bump_balanced();
        self.finish_node();
    }

    /// `= expr`, skipped up to `,` `;` or a closing bracket at the same depth.
    ///
    /// Commas between `<` and `>` belong to type arguments or type parameters
    /// (`new Map<K, V>()`, `<T,>(a: T) => a`) and do not end the initializer.
    pub(super) fn parse_initializer(&mut self) {
        self.start_node(SyntaxKind::Initializer);
        self.bump(); // consume '='
        let mut angle_depth = 0u32;
        loop {
            let kind = self.current();
            if self.should_stop() {
                break;
            }
            match kind {
                SyntaxKind::LAngle => {
                    angle_depth += 1;
                    self.bump();
                }
                SyntaxKind::RAngle => {
                    angle_depth = angle_depth.saturating_sub(1);
                    self.bump();
                }
                SyntaxKind::Comma if angle_depth > 0 => self.bump(),
                SyntaxKind::Comma
                | SyntaxKind::Semicolon
                | SyntaxKind::ParenClose
                | SyntaxKind::BracketClose
                | SyntaxKind::BraceClose => break,
                SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => {
                    self.bump_balanced()
                }
                _ if STATEMENT_FIRST.contains(kind) && self.has_preceding_newline() => break,
                _ => self.bump(),
            }
        }
        self.finish_node();
    }

    /// `function name<T>(params): R { body }` or an overload ending in `;`.
    fn parse_function_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::FunctionDecl);
        self.bump(); // consume 'function'
        self.eat_token(SyntaxKind::Star);
        if self.current().is_name() {
            self.bump();
        }
        self.parse_signature_rest();
        if self.currently_is(SyntaxKind::BraceOpen) {
            self.start_node(SyntaxKind::Verbatim);
            self.bump_balanced();
            self.finish_node();
        } else {
            self.eat_token(SyntaxKind::Semicolon);
        }
        self.finish_node();
    }

    /// `namespace A.B { ... }` | `module "m" { ... }` | `declare global { ... }`
    fn parse_module_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ModuleDecl);
        let is_global = self.currently_is(SyntaxKind::Id);
        self.bump(); // consume 'namespace' | 'module' | 'global'

        if !is_global {
            if self.currently_is(SyntaxKind::StringLiteral) {
                self.bump();
            } else {
                self.bump();
                while self.currently_is(SyntaxKind::Dot) && self.peek_nth(1).is_name() {
                    self.bump();
                    self.bump();
                }
            }
        }

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.start_node(SyntaxKind::ModuleBlock);
            self.open_delimiter(); // consume '{'
            while !self.should_stop()
                && !self.currently_is(SyntaxKind::BraceClose)
                && !self.currently_is(SyntaxKind::Error)
            {
                self.parse_statement();
            }
            self.close_delimiter(SyntaxKind::BraceClose, "module block");
            self.finish_node();
        } else {
            self.eat_token(SyntaxKind::Semicolon);
        }
        self.finish_node();
    }

    /// Any statement outside the understood subset, skipped with bracket balancing.
    ///
    /// Stops after `;`, before an unmatched `}`, or before a statement keyword on a new line.
    fn parse_verbatim(&mut self, checkpoint: Checkpoint, mut progressed: bool) {
        self.start_node_at(checkpoint, SyntaxKind::Verbatim);
        loop {
            let kind = self.current();
            if self.should_stop() {
                break;
            }
            match kind {
                SyntaxKind::Semicolon => {
                    self.bump();
                    break;
                }
                SyntaxKind::BraceClose => break,
                SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => {
                    self.bump_balanced()
                }
                _ if progressed
                    && STATEMENT_FIRST.contains(kind)
                    && self.has_preceding_newline() =>
                {
                    break;
                }
                _ => self.bump(),
            }
            progressed = true;
        }
        self.finish_node();
    }
}

fn starts_binding(kind: SyntaxKind) -> bool {
    kind.is_name() || matches!(kind, SyntaxKind::BraceOpen | SyntaxKind::BracketOpen)
}
