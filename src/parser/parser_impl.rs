//! Parser entry point and statement-level parsing
//!
//! [Parser] is the public API: it borrows a validated
//! [Language](crate::language::Language) and parses source strings into
//! [Program] trees. The internal [Cursor] owns the token stream for one
//! parse and is shared with the expression and type submodules.

use crate::ast::{
    Annotation, BreakStatement, CatchClause, ClassDeclaration, ClassMember, ContinueStatement,
    Declaration, DoStatement, DottedName, ElseClause, EmptyStatement, Expression,
    ExpressionStatement, FieldDefinition, FinallyClause, ForStatement, FunctionDeclaration,
    Identifier, IfStatement, ImportStatement, MethodDefinition, Modifier, ModuleDeclaration,
    Parameter, Program, ReturnStatement, SourceLocation, Span, Statement, StatementBlock,
    SwitchCase, SwitchClause, SwitchDefault, SwitchStatement, SymbolLiteral, ThrowStatement,
    TryStatement, TypeAliasStatement, TypeExpr, UsingStatement, VariableDeclaration,
    VariableDeclarator, VariableKind, WhileStatement,
};
use crate::language::Language;
use crate::lexer::{lex, Token};
use std::ops::Range;

use super::error::ParseError;

/// A Monkey C parser bound to a loaded grammar
pub struct Parser<'l> {
    language: &'l Language,
}

impl<'l> Parser<'l> {
    /// Create a parser from a validated language
    pub fn new(language: &'l Language) -> Self {
        Self { language }
    }

    /// Parse a complete source file
    pub fn parse(&self, source: &str) -> Result<Program, ParseError> {
        Cursor::new(self.language, source).parse_program()
    }
}

/// Token cursor for a single parse
pub(super) struct Cursor<'a> {
    language: &'a Language,
    source: &'a str,
    tokens: Vec<(Token, Range<usize>)>,
    pos: usize,
    /// Byte offset one past the last consumed token
    last_end: usize,
    locations: SourceLocation,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(language: &'a Language, source: &'a str) -> Self {
        Self {
            language,
            source,
            tokens: lex(source),
            pos: 0,
            last_end: 0,
            locations: SourceLocation::new(source),
        }
    }

    // ------------------------------------------------------------------
    // Token access
    // ------------------------------------------------------------------

    pub(super) fn language(&self) -> &Language {
        self.language
    }

    pub(super) fn peek(&self) -> Option<Token> {
        self.nth(0)
    }

    pub(super) fn nth(&self, n: usize) -> Option<Token> {
        self.tokens.get(self.pos + n).map(|(token, _)| *token)
    }

    pub(super) fn current_range(&self) -> Option<Range<usize>> {
        self.tokens.get(self.pos).map(|(_, range)| range.clone())
    }

    pub(super) fn bump(&mut self) -> Option<(Token, Range<usize>)> {
        let entry = self.tokens.get(self.pos).cloned();
        if let Some((_, range)) = &entry {
            self.pos += 1;
            self.last_end = range.end;
        }
        entry
    }

    pub(super) fn at(&self, token: Token) -> bool {
        self.peek() == Some(token)
    }

    pub(super) fn eat(&mut self, token: Token) -> Option<Range<usize>> {
        if self.at(token) {
            self.bump().map(|(_, range)| range)
        } else {
            None
        }
    }

    pub(super) fn expect(&mut self, token: Token) -> Result<Range<usize>, ParseError> {
        self.eat(token).ok_or_else(|| self.error(token.describe()))
    }

    pub(super) fn text(&self, range: &Range<usize>) -> &'a str {
        &self.source[range.clone()]
    }

    /// Byte offset of the next token, or end of input
    pub(super) fn offset(&self) -> usize {
        self.current_range()
            .map(|range| range.start)
            .unwrap_or(self.source.len())
    }

    pub(super) fn span_from(&self, start: usize) -> Option<Span> {
        Some(self.locations.range_to_span(&(start..self.last_end)))
    }

    pub(super) fn span_of(&self, range: &Range<usize>) -> Option<Span> {
        Some(self.locations.range_to_span(range))
    }

    /// Byte offset one past the last consumed token
    pub(super) fn last_end(&self) -> usize {
        self.last_end
    }

    /// Consume the `>` closing a generic type
    ///
    /// Nested generics end in `>>`, which the lexer reads as a single shift
    /// token; the first `>` is consumed here and the second is left for the
    /// enclosing type.
    pub(super) fn expect_closing_angle(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(Token::Gt) => {
                self.bump();
                Ok(())
            }
            Some(Token::Shr) => {
                if let Some(range) = self.current_range() {
                    self.tokens[self.pos] = (Token::Gt, range.start + 1..range.end);
                    self.last_end = range.start + 1;
                }
                Ok(())
            }
            _ => Err(self.error("'>'")),
        }
    }

    pub(super) fn error(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some((token, range)) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.describe().to_string(),
                span: self.locations.range_to_span(range),
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }

    // ------------------------------------------------------------------
    // Program and statements
    // ------------------------------------------------------------------

    pub(super) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while self.peek().is_some() {
            statements.push(self.parse_statement()?);
        }
        let span = if statements.is_empty() {
            None
        } else {
            self.span_from(0)
        };
        Ok(Program { statements, span })
    }

    pub(super) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek() {
            Some(Token::Import) => self.parse_import(),
            Some(Token::Using) => self.parse_using(),
            Some(Token::Semicolon) => {
                let start = self.offset();
                self.bump();
                Ok(Statement::Empty(EmptyStatement {
                    span: self.span_from(start),
                }))
            }
            Some(Token::LBrace) => Ok(Statement::Block(self.parse_block()?)),
            Some(Token::Typedef) => self.parse_type_alias(),
            Some(Token::If) => self.parse_if(),
            Some(Token::Switch) => self.parse_switch(),
            Some(Token::For) => self.parse_for(),
            Some(Token::While) => self.parse_while(),
            Some(Token::Do) => self.parse_do(),
            Some(Token::Try) => self.parse_try(),
            Some(Token::Break) => {
                let start = self.offset();
                self.bump();
                self.expect(Token::Semicolon)?;
                Ok(Statement::Break(BreakStatement {
                    span: self.span_from(start),
                }))
            }
            Some(Token::Continue) => {
                let start = self.offset();
                self.bump();
                self.expect(Token::Semicolon)?;
                Ok(Statement::Continue(ContinueStatement {
                    span: self.span_from(start),
                }))
            }
            Some(Token::Return) => self.parse_return(),
            Some(Token::Throw) => self.parse_throw(),
            Some(Token::Var) | Some(Token::Const) => {
                let start = self.offset();
                let declaration = self.parse_variable_declaration(start, Vec::new())?;
                Ok(Statement::Declaration(Declaration::Variable(declaration)))
            }
            Some(Token::Function) => {
                let function = self.parse_function()?;
                Ok(Statement::Declaration(Declaration::Function(function)))
            }
            Some(Token::Class) => {
                let start = self.offset();
                let class = self.parse_class(start, None, Vec::new())?;
                Ok(Statement::Declaration(Declaration::Class(class)))
            }
            Some(Token::Module) => {
                let start = self.offset();
                let module = self.parse_module(start, None)?;
                Ok(Statement::Declaration(Declaration::Module(module)))
            }
            Some(Token::LParen) if self.at_declaration_annotation() => {
                self.parse_annotated_declaration()
            }
            Some(token) if token.is_modifier() => self.parse_modified_declaration(),
            Some(_) => self.parse_expression_statement(),
            None => Err(self.error("statement")),
        }
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        let expression = self.parse_expression()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::Expression(ExpressionStatement {
            expression,
            span: self.span_from(start),
        }))
    }

    fn parse_import(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::Import)?;
        let name = self.parse_dotted_name()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::Import(ImportStatement {
            name,
            span: self.span_from(start),
        }))
    }

    fn parse_using(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::Using)?;
        let name = self.parse_dotted_name()?;
        let alias = if self.eat(Token::As).is_some() {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.expect(Token::Semicolon)?;
        Ok(Statement::Using(UsingStatement {
            name,
            alias,
            span: self.span_from(start),
        }))
    }

    fn parse_dotted_name(&mut self) -> Result<DottedName, ParseError> {
        let start = self.offset();
        let mut parts = vec![self.parse_identifier()?];
        while self.eat(Token::Dot).is_some() {
            parts.push(self.parse_identifier()?);
        }
        Ok(DottedName {
            parts,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let range = self.expect(Token::Identifier)?;
        Ok(Identifier {
            name: self.text(&range).to_string(),
            span: self.span_of(&range),
        })
    }

    fn parse_type_alias(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::Typedef)?;
        let left = self.parse_type()?;
        self.expect(Token::As)?;
        let right = self.parse_type()?;
        Ok(Statement::TypeAlias(TypeAliasStatement {
            left,
            right,
            span: self.span_from(start),
        }))
    }

    // ------------------------------------------------------------------
    // Control flow
    // ------------------------------------------------------------------

    /// `( expression )`, with an optional cast before the closing paren
    fn parse_condition(&mut self) -> Result<Expression, ParseError> {
        self.expect(Token::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(Token::RParen)?;
        Ok(condition)
    }

    fn parse_if(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::If)?;
        let condition = self.parse_condition()?;
        let consequence = Box::new(self.parse_statement()?);
        let alternative = if self.at(Token::Else) {
            let else_start = self.offset();
            self.bump();
            let body = Box::new(self.parse_statement()?);
            Some(ElseClause {
                body,
                span: self.span_from(else_start),
            })
        } else {
            None
        };
        Ok(Statement::If(IfStatement {
            condition,
            consequence,
            alternative,
            span: self.span_from(start),
        }))
    }

    fn parse_switch(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::Switch)?;
        let value = self.parse_condition()?;
        self.expect(Token::LBrace)?;

        let mut clauses = Vec::new();
        loop {
            match self.peek() {
                Some(Token::Case) => {
                    let case_start = self.offset();
                    self.bump();
                    let case_value = self.parse_expression()?;
                    self.expect(Token::Colon)?;
                    let body = self.parse_clause_body()?;
                    clauses.push(SwitchClause::Case(SwitchCase {
                        value: case_value,
                        body,
                        span: self.span_from(case_start),
                    }));
                }
                Some(Token::Default) => {
                    let default_start = self.offset();
                    self.bump();
                    self.expect(Token::Colon)?;
                    let body = self.parse_clause_body()?;
                    clauses.push(SwitchClause::Default(SwitchDefault {
                        body,
                        span: self.span_from(default_start),
                    }));
                }
                Some(Token::RBrace) => break,
                _ => return Err(self.error("'case', 'default', or '}'")),
            }
        }
        self.expect(Token::RBrace)?;

        Ok(Statement::Switch(SwitchStatement {
            value,
            clauses,
            span: self.span_from(start),
        }))
    }

    /// Statements of one switch clause, up to the next clause or the body end
    fn parse_clause_body(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut body = Vec::new();
        while !matches!(
            self.peek(),
            Some(Token::Case) | Some(Token::Default) | Some(Token::RBrace) | None
        ) {
            body.push(self.parse_statement()?);
        }
        Ok(body)
    }

    fn parse_for(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::For)?;
        self.expect(Token::LParen)?;

        let init_start = self.offset();
        let modifiers = self.parse_modifiers();
        // The initializer's declaration consumes its own ';'
        let initializer = self.parse_variable_declaration(init_start, modifiers)?;
        let condition = self.parse_expression()?;
        self.expect(Token::Semicolon)?;
        let increment = self.parse_expression()?;
        self.expect(Token::RParen)?;
        let body = Box::new(self.parse_statement()?);

        Ok(Statement::For(ForStatement {
            initializer,
            condition,
            increment,
            body,
            span: self.span_from(start),
        }))
    }

    fn parse_while(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::While)?;
        let condition = self.parse_condition()?;
        let body = Box::new(self.parse_statement()?);
        Ok(Statement::While(WhileStatement {
            condition,
            body,
            span: self.span_from(start),
        }))
    }

    fn parse_do(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::Do)?;
        let body = Box::new(self.parse_statement()?);
        self.expect(Token::While)?;
        let condition = self.parse_condition()?;
        Ok(Statement::DoWhile(DoStatement {
            body,
            condition,
            span: self.span_from(start),
        }))
    }

    fn parse_try(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::Try)?;
        let body = self.parse_block()?;

        let mut handlers = Vec::new();
        while self.at(Token::Catch) {
            let catch_start = self.offset();
            self.bump();
            let parameter = if self.eat(Token::LParen).is_some() {
                let parameter = self.parse_expression()?;
                self.expect(Token::RParen)?;
                Some(parameter)
            } else {
                None
            };
            let catch_body = self.parse_block()?;
            handlers.push(CatchClause {
                parameter,
                body: catch_body,
                span: self.span_from(catch_start),
            });
        }
        if handlers.is_empty() {
            return Err(self.error("'catch'"));
        }

        let finally_start = self.offset();
        self.expect(Token::Finally)?;
        let finally_body = self.parse_block()?;
        let finalizer = FinallyClause {
            body: finally_body,
            span: self.span_from(finally_start),
        };

        Ok(Statement::Try(TryStatement {
            body,
            handlers,
            finalizer,
            span: self.span_from(start),
        }))
    }

    fn parse_return(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::Return)?;
        let value = if self.at(Token::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(Token::Semicolon)?;
        Ok(Statement::Return(ReturnStatement {
            value,
            span: self.span_from(start),
        }))
    }

    fn parse_throw(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        self.expect(Token::Throw)?;
        let value = self.parse_expression()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::Throw(ThrowStatement {
            value,
            span: self.span_from(start),
        }))
    }

    pub(super) fn parse_block(&mut self) -> Result<StatementBlock, ParseError> {
        let start = self.offset();
        self.expect(Token::LBrace)?;
        let mut statements = Vec::new();
        while !self.at(Token::RBrace) {
            if self.peek().is_none() {
                return Err(self.error("'}'"));
            }
            statements.push(self.parse_statement()?);
        }
        self.expect(Token::RBrace)?;
        Ok(StatementBlock {
            statements,
            span: self.span_from(start),
        })
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        while let Some(token) = self.peek() {
            let modifier = match token {
                Token::Public => Modifier::Public,
                Token::Protected => Modifier::Protected,
                Token::Private => Modifier::Private,
                Token::Static => Modifier::Static,
                Token::Final => Modifier::Final,
                Token::Default => Modifier::Default,
                _ => break,
            };
            self.bump();
            modifiers.push(modifier);
        }
        modifiers
    }

    /// Statement starting with modifiers: a variable or class declaration
    fn parse_modified_declaration(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        let modifiers = self.parse_modifiers();
        match self.peek() {
            Some(Token::Var) | Some(Token::Const) => {
                let declaration = self.parse_variable_declaration(start, modifiers)?;
                Ok(Statement::Declaration(Declaration::Variable(declaration)))
            }
            Some(Token::Class) => {
                let class = self.parse_class(start, None, modifiers)?;
                Ok(Statement::Declaration(Declaration::Class(class)))
            }
            _ => Err(self.error("'var', 'const', or 'class'")),
        }
    }

    /// Whether the cursor sits on `(:symbol)` introducing a declaration
    fn at_declaration_annotation(&self) -> bool {
        self.nth(0) == Some(Token::LParen)
            && self.nth(1) == Some(Token::Symbol)
            && self.nth(2) == Some(Token::RParen)
            && matches!(
                self.nth(3),
                Some(token) if token == Token::Class || token == Token::Module || token.is_modifier()
            )
    }

    fn parse_annotated_declaration(&mut self) -> Result<Statement, ParseError> {
        let start = self.offset();
        let annotation = Some(self.parse_annotation()?);
        match self.peek() {
            Some(Token::Module) => {
                let module = self.parse_module(start, annotation)?;
                Ok(Statement::Declaration(Declaration::Module(module)))
            }
            _ => {
                let modifiers = self.parse_modifiers();
                let class = self.parse_class(start, annotation, modifiers)?;
                Ok(Statement::Declaration(Declaration::Class(class)))
            }
        }
    }

    pub(super) fn parse_annotation(&mut self) -> Result<Annotation, ParseError> {
        let start = self.offset();
        self.expect(Token::LParen)?;
        let range = self.expect(Token::Symbol)?;
        let symbol = SymbolLiteral {
            name: self.text(&range)[1..].to_string(),
            span: self.span_of(&range),
        };
        self.expect(Token::RParen)?;
        Ok(Annotation {
            symbol,
            span: self.span_from(start),
        })
    }

    fn parse_variable_declaration(
        &mut self,
        start: usize,
        modifiers: Vec<Modifier>,
    ) -> Result<VariableDeclaration, ParseError> {
        let kind = match self.peek() {
            Some(Token::Var) => VariableKind::Var,
            Some(Token::Const) => VariableKind::Const,
            _ => return Err(self.error("'var' or 'const'")),
        };
        self.bump();

        let declarator_start = self.offset();
        let name = self.parse_identifier()?;
        let (ty, value) = self.parse_declarator_tail()?;
        let declarator = VariableDeclarator {
            name,
            ty,
            value,
            span: self.span_from(declarator_start),
        };
        self.expect(Token::Semicolon)?;

        Ok(VariableDeclaration {
            modifiers,
            kind,
            declarator,
            span: self.span_from(start),
        })
    }

    /// The optional `as Type` / `= value` tail of a declarator, either order
    ///
    /// A `= value as Type` source yields a cast expression in `value` rather
    /// than a filled `ty`; the two spellings carry the same information.
    fn parse_declarator_tail(
        &mut self,
    ) -> Result<(Option<TypeExpr>, Option<Expression>), ParseError> {
        let mut ty = None;
        let mut value = None;
        if self.eat(Token::As).is_some() {
            ty = Some(self.parse_type()?);
            if self.eat(Token::Eq).is_some() {
                value = Some(self.parse_expression()?);
            }
        } else if self.eat(Token::Eq).is_some() {
            value = Some(self.parse_expression()?);
        }
        Ok((ty, value))
    }

    fn parse_function(&mut self) -> Result<FunctionDeclaration, ParseError> {
        let start = self.offset();
        self.expect(Token::Function)?;
        let name = self.parse_identifier()?;
        let parameters = self.parse_formal_parameters()?;
        let return_type = if self.eat(Token::As).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        let body = self.parse_block()?;
        Ok(FunctionDeclaration {
            name,
            parameters,
            return_type,
            body,
            span: self.span_from(start),
        })
    }

    pub(super) fn parse_formal_parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        self.expect(Token::LParen)?;
        let mut parameters = Vec::new();
        if !self.at(Token::RParen) {
            loop {
                let param_start = self.offset();
                let name = self.parse_identifier()?;
                let ty = if self.eat(Token::As).is_some() {
                    Some(self.parse_type()?)
                } else {
                    None
                };
                parameters.push(Parameter {
                    name,
                    ty,
                    span: self.span_from(param_start),
                });
                if self.eat(Token::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(Token::RParen)?;
        Ok(parameters)
    }

    fn parse_class(
        &mut self,
        start: usize,
        annotation: Option<Annotation>,
        modifiers: Vec<Modifier>,
    ) -> Result<ClassDeclaration, ParseError> {
        self.expect(Token::Class)?;
        let name = self.parse_identifier()?;
        let heritage = if self.eat(Token::Extends).is_some() {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(Token::LBrace)?;
        let mut members = Vec::new();
        while !self.at(Token::RBrace) {
            if self.peek().is_none() {
                return Err(self.error("'}'"));
            }
            members.push(self.parse_class_member()?);
        }
        self.expect(Token::RBrace)?;

        Ok(ClassDeclaration {
            annotation,
            modifiers,
            name,
            heritage,
            members,
            span: self.span_from(start),
        })
    }

    fn parse_class_member(&mut self) -> Result<ClassMember, ParseError> {
        let start = self.offset();
        let annotation = if self.at(Token::LParen) {
            Some(self.parse_annotation()?)
        } else {
            None
        };
        let modifiers = self.parse_modifiers();

        match self.peek() {
            Some(Token::Function) => {
                self.bump();
                let name = self.parse_identifier()?;
                let parameters = self.parse_formal_parameters()?;
                let return_type = if self.eat(Token::As).is_some() {
                    Some(self.parse_type()?)
                } else {
                    None
                };
                let body = self.parse_block()?;
                Ok(ClassMember::Method(MethodDefinition {
                    annotation,
                    modifiers,
                    name,
                    parameters,
                    return_type,
                    body,
                    span: self.span_from(start),
                }))
            }
            Some(Token::Var) | Some(Token::Const) => {
                if annotation.is_some() {
                    // Annotations attach to methods, not fields
                    return Err(self.error("'function'"));
                }
                let kind = if self.peek() == Some(Token::Var) {
                    VariableKind::Var
                } else {
                    VariableKind::Const
                };
                self.bump();
                let name = self.parse_identifier()?;
                let (ty, value) = self.parse_declarator_tail()?;
                self.expect(Token::Semicolon)?;
                Ok(ClassMember::Field(FieldDefinition {
                    modifiers,
                    kind,
                    name,
                    ty,
                    value,
                    span: self.span_from(start),
                }))
            }
            _ => Err(self.error("'function', 'var', or 'const'")),
        }
    }

    fn parse_module(
        &mut self,
        start: usize,
        annotation: Option<Annotation>,
    ) -> Result<ModuleDeclaration, ParseError> {
        self.expect(Token::Module)?;
        let name = self.parse_identifier()?;
        let body = self.parse_block()?;
        Ok(ModuleDeclaration {
            annotation,
            name,
            body,
            span: self.span_from(start),
        })
    }
}
