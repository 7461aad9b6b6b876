//! S-expression rendering of the syntax tree
//!
//! Produces the inspection format printed by `monkeyc parse --format
//! ast-sexp`: one node per line, children indented, node kinds taken from
//! the grammar's node-kind table. Leaf nodes carry their source text in
//! quotes.

use super::node::*;

/// Render a program as an indented S-expression
pub fn to_sexp(program: &Program) -> String {
    let mut writer = SexpWriter::new();
    writer.open("program");
    for statement in &program.statements {
        writer.statement(statement);
    }
    writer.close();
    writer.finish()
}

struct SexpWriter {
    out: String,
    depth: usize,
}

impl SexpWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    fn finish(mut self) -> String {
        self.out.push('\n');
        self.out
    }

    fn line(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn open(&mut self, kind: &str) {
        self.line();
        self.out.push('(');
        self.out.push_str(kind);
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth -= 1;
        self.out.push(')');
    }

    fn atom(&mut self, kind: &str) {
        self.line();
        self.out.push('(');
        self.out.push_str(kind);
        self.out.push(')');
    }

    fn leaf(&mut self, kind: &str, text: &str) {
        self.line();
        self.out.push('(');
        self.out.push_str(kind);
        self.out.push_str(" \"");
        for ch in text.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                other => self.out.push(other),
            }
        }
        self.out.push_str("\")");
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Import(import) => {
                self.open("import_statement");
                self.dotted_name(&import.name);
                self.close();
            }
            Statement::Using(using) => {
                self.open("using_statement");
                self.dotted_name(&using.name);
                if let Some(alias) = &using.alias {
                    self.leaf("identifier", &alias.name);
                }
                self.close();
            }
            Statement::Expression(statement) => {
                self.open("expression_statement");
                self.expression(&statement.expression);
                self.close();
            }
            Statement::Declaration(declaration) => self.declaration(declaration),
            Statement::Block(block) => self.block(block),
            Statement::TypeAlias(alias) => {
                self.open("type_alias_statement");
                self.type_expr(&alias.left);
                self.type_expr(&alias.right);
                self.close();
            }
            Statement::If(statement) => {
                self.open("if_statement");
                self.expression(&statement.condition);
                self.statement(&statement.consequence);
                if let Some(alternative) = &statement.alternative {
                    self.open("else_clause");
                    self.statement(&alternative.body);
                    self.close();
                }
                self.close();
            }
            Statement::Switch(statement) => {
                self.open("switch_statement");
                self.expression(&statement.value);
                self.open("switch_body");
                for clause in &statement.clauses {
                    match clause {
                        SwitchClause::Case(case) => {
                            self.open("switch_case");
                            self.expression(&case.value);
                            for statement in &case.body {
                                self.statement(statement);
                            }
                            self.close();
                        }
                        SwitchClause::Default(default) => {
                            self.open("switch_default");
                            for statement in &default.body {
                                self.statement(statement);
                            }
                            self.close();
                        }
                    }
                }
                self.close();
                self.close();
            }
            Statement::For(statement) => {
                self.open("for_statement");
                self.variable_declaration(&statement.initializer);
                self.expression(&statement.condition);
                self.expression(&statement.increment);
                self.statement(&statement.body);
                self.close();
            }
            Statement::While(statement) => {
                self.open("while_statement");
                self.expression(&statement.condition);
                self.statement(&statement.body);
                self.close();
            }
            Statement::DoWhile(statement) => {
                self.open("do_statement");
                self.statement(&statement.body);
                self.expression(&statement.condition);
                self.close();
            }
            Statement::Try(statement) => {
                self.open("try_statement");
                self.block(&statement.body);
                for handler in &statement.handlers {
                    self.open("catch_clause");
                    if let Some(parameter) = &handler.parameter {
                        self.expression(parameter);
                    }
                    self.block(&handler.body);
                    self.close();
                }
                self.open("finally_clause");
                self.block(&statement.finalizer.body);
                self.close();
                self.close();
            }
            Statement::Break(_) => self.atom("break_statement"),
            Statement::Continue(_) => self.atom("continue_statement"),
            Statement::Return(statement) => {
                self.open("return_statement");
                if let Some(value) = &statement.value {
                    self.expression(value);
                }
                self.close();
            }
            Statement::Throw(statement) => {
                self.open("throw_statement");
                self.expression(&statement.value);
                self.close();
            }
            Statement::Empty(_) => self.atom("empty_statement"),
        }
    }

    fn block(&mut self, block: &StatementBlock) {
        self.open("statement_block");
        for statement in &block.statements {
            self.statement(statement);
        }
        self.close();
    }

    fn dotted_name(&mut self, name: &DottedName) {
        self.open("dotted_name");
        for part in &name.parts {
            self.leaf("identifier", &part.name);
        }
        self.close();
    }

    fn modifiers(&mut self, modifiers: &[Modifier]) {
        if modifiers.is_empty() {
            return;
        }
        self.open("modifiers");
        for modifier in modifiers {
            self.line();
            self.out.push_str(modifier.as_str());
        }
        self.close();
    }

    fn annotation(&mut self, annotation: &Annotation) {
        self.open("annotation");
        self.leaf("symbol", &annotation.symbol.name);
        self.close();
    }

    fn parameters(&mut self, parameters: &[Parameter]) {
        self.open("formal_parameters");
        for parameter in parameters {
            self.open("parameter");
            self.leaf("identifier", &parameter.name.name);
            if let Some(ty) = &parameter.ty {
                self.type_expr(ty);
            }
            self.close();
        }
        self.close();
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn declaration(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Function(function) => {
                self.open("function_declaration");
                self.leaf("identifier", &function.name.name);
                self.parameters(&function.parameters);
                if let Some(return_type) = &function.return_type {
                    self.type_expr(return_type);
                }
                self.block(&function.body);
                self.close();
            }
            Declaration::Class(class) => {
                self.open("class_declaration");
                if let Some(annotation) = &class.annotation {
                    self.annotation(annotation);
                }
                self.modifiers(&class.modifiers);
                self.leaf("identifier", &class.name.name);
                if let Some(heritage) = &class.heritage {
                    self.open("class_heritage");
                    self.expression(heritage);
                    self.close();
                }
                self.open("class_body");
                for member in &class.members {
                    self.class_member(member);
                }
                self.close();
                self.close();
            }
            Declaration::Module(module) => {
                self.open("module_declaration");
                if let Some(annotation) = &module.annotation {
                    self.annotation(annotation);
                }
                self.leaf("identifier", &module.name.name);
                self.block(&module.body);
                self.close();
            }
            Declaration::Variable(variable) => self.variable_declaration(variable),
        }
    }

    fn class_member(&mut self, member: &ClassMember) {
        match member {
            ClassMember::Method(method) => {
                self.open("method_definition");
                if let Some(annotation) = &method.annotation {
                    self.annotation(annotation);
                }
                self.modifiers(&method.modifiers);
                self.leaf("property_identifier", &method.name.name);
                self.parameters(&method.parameters);
                if let Some(return_type) = &method.return_type {
                    self.type_expr(return_type);
                }
                self.block(&method.body);
                self.close();
            }
            ClassMember::Field(field) => {
                self.open("field_definition");
                self.modifiers(&field.modifiers);
                self.leaf("property_identifier", &field.name.name);
                if let Some(ty) = &field.ty {
                    self.type_expr(ty);
                }
                if let Some(value) = &field.value {
                    self.expression(value);
                }
                self.close();
            }
        }
    }

    fn variable_declaration(&mut self, declaration: &VariableDeclaration) {
        self.open("variable_declaration");
        self.modifiers(&declaration.modifiers);
        self.open("variable_declarator");
        self.leaf("identifier", &declaration.declarator.name.name);
        if let Some(ty) = &declaration.declarator.ty {
            self.type_expr(ty);
        }
        if let Some(value) = &declaration.declarator.value {
            self.expression(value);
        }
        self.close();
        self.close();
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Identifier(identifier) => self.leaf("identifier", &identifier.name),
            Expression::Member(member) => {
                self.open("member_expression");
                self.expression(&member.object);
                self.leaf("property_identifier", &member.property.name);
                self.close();
            }
            Expression::Call(call) => {
                self.open("call_expression");
                self.expression(&call.function);
                self.open("arguments");
                for argument in &call.arguments {
                    self.expression(argument);
                }
                self.close();
                self.close();
            }
            Expression::New(new) => {
                self.open("new_expression");
                self.expression(&new.constructor);
                if let Some(arguments) = &new.arguments {
                    self.open("arguments");
                    for argument in arguments {
                        self.expression(argument);
                    }
                    self.close();
                }
                self.close();
            }
            Expression::ArrayAccess(access) => {
                self.open("array_access");
                self.expression(&access.array);
                self.expression(&access.index);
                self.close();
            }
            Expression::Paren(paren) => {
                self.open("parenthesized_expression");
                self.expression(&paren.expression);
                self.close();
            }
            Expression::Assignment(assignment) => {
                self.open("assignment_expression");
                self.expression(&assignment.left);
                self.expression(&assignment.right);
                self.close();
            }
            Expression::AugmentedAssignment(assignment) => {
                self.open("augmented_assignment_expression");
                self.expression(&assignment.left);
                self.leaf("operator", assignment.operator.as_str());
                self.expression(&assignment.right);
                self.close();
            }
            Expression::Binary(binary) => {
                self.open("binary_expression");
                self.expression(&binary.left);
                self.leaf("operator", binary.operator.as_str());
                self.expression(&binary.right);
                self.close();
            }
            Expression::Unary(unary) => {
                self.open("unary_expression");
                self.leaf("operator", unary.operator.as_str());
                self.expression(&unary.argument);
                self.close();
            }
            Expression::Update(update) => {
                self.open("update_expression");
                if update.prefix {
                    self.leaf("operator", update.operator.as_str());
                    self.expression(&update.argument);
                } else {
                    self.expression(&update.argument);
                    self.leaf("operator", update.operator.as_str());
                }
                self.close();
            }
            Expression::Ternary(ternary) => {
                self.open("ternary_expression");
                self.expression(&ternary.condition);
                self.expression(&ternary.consequence);
                self.expression(&ternary.alternative);
                self.close();
            }
            Expression::Cast(cast) => {
                self.open("typed_identifier");
                self.expression(&cast.value);
                self.type_expr(&cast.ty);
                self.close();
            }
            Expression::This(_) => self.atom("this"),
            Expression::Super(_) => self.atom("super"),
            Expression::Number(number) => self.leaf("number", &number.raw),
            Expression::String(string) => self.leaf("string", &string.value),
            Expression::Symbol(symbol) => self.leaf("symbol", &symbol.name),
            Expression::Boolean(boolean) => {
                if boolean.value {
                    self.atom("true")
                } else {
                    self.atom("false")
                }
            }
            Expression::Null(_) => self.atom("null"),
            Expression::Array(array) => {
                self.open("array");
                for element in array.elements.iter().flatten() {
                    self.expression(element);
                }
                self.close();
            }
            Expression::Dictionary(dictionary) => {
                self.open("dictionary");
                for pair in &dictionary.pairs {
                    self.open("pair");
                    self.expression(&pair.key);
                    self.expression(&pair.value);
                    self.close();
                }
                self.close();
            }
        }
    }

    // ------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------

    fn type_expr(&mut self, ty: &TypeExpr) {
        match ty {
            TypeExpr::Named(named) => self.leaf("type", &named.name),
            TypeExpr::Nullable(nullable) => {
                self.open("type_null");
                self.type_expr(&nullable.inner);
                self.close();
            }
            TypeExpr::Union(union) => {
                self.open("union_type");
                for member in &union.members {
                    self.type_expr(member);
                }
                self.close();
            }
            TypeExpr::Member(member) => {
                self.open("member_type");
                self.type_expr(&member.object);
                self.type_expr(&member.property);
                self.close();
            }
            TypeExpr::Generic(generic) => {
                if generic.nullable {
                    self.open("type_null");
                }
                self.open("generic_type");
                self.type_expr(&generic.base);
                self.open("type_arguments");
                self.type_expr(&generic.argument);
                self.close();
                self.close();
                if generic.nullable {
                    self.close();
                }
            }
            TypeExpr::Array(array) => {
                self.open("array_type");
                self.type_expr(&array.element);
                self.open("dimensions");
                for dimension in &array.dimensions {
                    self.expression(dimension);
                }
                self.close();
                self.close();
            }
            TypeExpr::Method(method) => {
                self.open("method_function");
                self.parameters(&method.parameters);
                if let Some(return_type) = &method.return_type {
                    self.type_expr(return_type);
                }
                self.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{language, Language};
    use crate::parser::Parser;

    fn sexp(source: &str) -> String {
        let language = Language::new(language()).unwrap();
        let program = Parser::new(&language).parse(source).unwrap();
        to_sexp(&program)
    }

    #[test]
    fn test_import_sexp() {
        assert_eq!(
            sexp("import Toybox.WatchUi;"),
            "(program\n  (import_statement\n    (dotted_name\n      (identifier \"Toybox\")\n      (identifier \"WatchUi\"))))\n"
        );
    }

    #[test]
    fn test_binary_sexp_carries_operator() {
        let rendered = sexp("x = a + 1;");
        assert!(rendered.contains("(assignment_expression"));
        assert!(rendered.contains("(operator \"+\")"));
        assert!(rendered.contains("(number \"1\")"));
    }

    #[test]
    fn test_string_escapes_in_output() {
        let rendered = sexp(r#"log("say \"hi\"");"#);
        assert!(rendered.contains(r#"(string "say \"hi\"")"#));
    }
}
