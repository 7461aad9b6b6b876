//! Fluent assertion API for AST nodes

use crate::ast::{
    AstNode, ClassDeclaration, ClassMember, Declaration, Expression, FieldDefinition,
    FunctionDeclaration, IfStatement, ImportStatement, MethodDefinition, Modifier,
    ModuleDeclaration, Program, ReturnStatement, Statement, SwitchClause, SwitchStatement,
    TryStatement, UsingStatement, VariableDeclaration,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a program
pub fn assert_ast(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion { program }
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    program: &'a Program,
}

impl<'a> ProgramAssertion<'a> {
    /// Assert the number of top-level statements
    pub fn statement_count(self, expected: usize) -> Self {
        let actual = self.program.statements.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} statements, found {}: [{}]",
            expected,
            actual,
            summarize_statements(&self.program.statements)
        );
        self
    }

    /// Assert on a specific statement by index
    pub fn statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        assert!(
            index < self.program.statements.len(),
            "Statement index {} out of bounds (program has {} statements)",
            index,
            self.program.statements.len()
        );

        assertion(StatementAssertion {
            statement: &self.program.statements[index],
            context: format!("statements[{}]", index),
        });
        self
    }
}

// ============================================================================
// Statement Assertions
// ============================================================================

pub struct StatementAssertion<'a> {
    statement: &'a Statement,
    context: String,
}

impl<'a> StatementAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.statement.kind()
        )
    }

    /// Assert the statement's grammar node kind, e.g. `"for_statement"`
    pub fn has_kind(self, expected: &str) -> Self {
        assert_eq!(
            self.statement.kind(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.statement.kind()
        );
        self
    }

    pub fn assert_import(self) -> ImportAssertion<'a> {
        match self.statement {
            Statement::Import(import) => ImportAssertion {
                import,
                context: self.context,
            },
            _ => self.mismatch("import_statement"),
        }
    }

    pub fn assert_using(self) -> UsingAssertion<'a> {
        match self.statement {
            Statement::Using(using) => UsingAssertion {
                using,
                context: self.context,
            },
            _ => self.mismatch("using_statement"),
        }
    }

    pub fn assert_variable(self) -> VariableAssertion<'a> {
        match self.statement {
            Statement::Declaration(Declaration::Variable(declaration)) => VariableAssertion {
                declaration,
                context: self.context,
            },
            _ => self.mismatch("variable_declaration"),
        }
    }

    pub fn assert_function(self) -> FunctionAssertion<'a> {
        match self.statement {
            Statement::Declaration(Declaration::Function(function)) => FunctionAssertion {
                function,
                context: self.context,
            },
            _ => self.mismatch("function_declaration"),
        }
    }

    pub fn assert_class(self) -> ClassAssertion<'a> {
        match self.statement {
            Statement::Declaration(Declaration::Class(class)) => ClassAssertion {
                class,
                context: self.context,
            },
            _ => self.mismatch("class_declaration"),
        }
    }

    pub fn assert_module(self) -> ModuleAssertion<'a> {
        match self.statement {
            Statement::Declaration(Declaration::Module(module)) => ModuleAssertion {
                module,
                context: self.context,
            },
            _ => self.mismatch("module_declaration"),
        }
    }

    pub fn assert_if(self) -> IfAssertion<'a> {
        match self.statement {
            Statement::If(statement) => IfAssertion {
                statement,
                context: self.context,
            },
            _ => self.mismatch("if_statement"),
        }
    }

    pub fn assert_switch(self) -> SwitchAssertion<'a> {
        match self.statement {
            Statement::Switch(statement) => SwitchAssertion {
                statement,
                context: self.context,
            },
            _ => self.mismatch("switch_statement"),
        }
    }

    pub fn assert_try(self) -> TryAssertion<'a> {
        match self.statement {
            Statement::Try(statement) => TryAssertion {
                statement,
                context: self.context,
            },
            _ => self.mismatch("try_statement"),
        }
    }

    pub fn assert_return(self) -> ReturnAssertion<'a> {
        match self.statement {
            Statement::Return(statement) => ReturnAssertion {
                statement,
                context: self.context,
            },
            _ => self.mismatch("return_statement"),
        }
    }

    /// Assert this is an expression statement and descend into the expression
    pub fn assert_expression(self) -> ExpressionAssertion<'a> {
        match self.statement {
            Statement::Expression(statement) => ExpressionAssertion {
                expression: &statement.expression,
                context: self.context,
            },
            _ => self.mismatch("expression_statement"),
        }
    }

    pub fn assert_type_alias(self) {
        if !matches!(self.statement, Statement::TypeAlias(_)) {
            self.mismatch("type_alias_statement");
        }
    }

    pub fn assert_empty(self) {
        if !matches!(self.statement, Statement::Empty(_)) {
            self.mismatch("empty_statement");
        }
    }
}

// ============================================================================
// Leaf Assertions
// ============================================================================

pub struct ImportAssertion<'a> {
    import: &'a ImportStatement,
    context: String,
}

impl<'a> ImportAssertion<'a> {
    pub fn path(self, expected: &str) -> Self {
        let actual = self.import.name.to_path();
        assert_eq!(
            actual, expected,
            "{}: Expected import of '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }
}

pub struct UsingAssertion<'a> {
    using: &'a UsingStatement,
    context: String,
}

impl<'a> UsingAssertion<'a> {
    pub fn path(self, expected: &str) -> Self {
        let actual = self.using.name.to_path();
        assert_eq!(
            actual, expected,
            "{}: Expected using of '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn alias(self, expected: &str) -> Self {
        match &self.using.alias {
            Some(alias) => assert_eq!(
                alias.name, expected,
                "{}: Expected alias '{}', found '{}'",
                self.context, expected, alias.name
            ),
            None => panic!("{}: Expected alias '{}', found none", self.context, expected),
        }
        self
    }

    pub fn no_alias(self) -> Self {
        assert!(
            self.using.alias.is_none(),
            "{}: Expected no alias, found one",
            self.context
        );
        self
    }
}

pub struct VariableAssertion<'a> {
    declaration: &'a VariableDeclaration,
    context: String,
}

impl<'a> VariableAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        let actual = &self.declaration.declarator.name.name;
        assert_eq!(
            actual, expected,
            "{}: Expected variable '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn is_const(self) -> Self {
        assert_eq!(
            self.declaration.kind.as_str(),
            "const",
            "{}: Expected a const declaration",
            self.context
        );
        self
    }

    pub fn is_var(self) -> Self {
        assert_eq!(
            self.declaration.kind.as_str(),
            "var",
            "{}: Expected a var declaration",
            self.context
        );
        self
    }

    pub fn has_type(self) -> Self {
        assert!(
            self.declaration.declarator.ty.is_some(),
            "{}: Expected a declared type",
            self.context
        );
        self
    }

    pub fn has_value(self) -> Self {
        assert!(
            self.declaration.declarator.value.is_some(),
            "{}: Expected an initializer",
            self.context
        );
        self
    }

    pub fn value<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ExpressionAssertion<'a>),
    {
        match &self.declaration.declarator.value {
            Some(value) => assertion(ExpressionAssertion {
                expression: value,
                context: format!("{}.value", self.context),
            }),
            None => panic!("{}: Expected an initializer, found none", self.context),
        }
        self
    }

    pub fn modifier(self, expected: Modifier) -> Self {
        assert!(
            self.declaration.modifiers.contains(&expected),
            "{}: Expected modifier '{}' in {:?}",
            self.context,
            expected,
            self.declaration.modifiers
        );
        self
    }
}

pub struct FunctionAssertion<'a> {
    function: &'a FunctionDeclaration,
    context: String,
}

impl<'a> FunctionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.function.name.name, expected,
            "{}: Expected function '{}', found '{}'",
            self.context, expected, self.function.name.name
        );
        self
    }

    pub fn parameter_count(self, expected: usize) -> Self {
        assert_eq!(
            self.function.parameters.len(),
            expected,
            "{}: Expected {} parameters, found {}",
            self.context,
            expected,
            self.function.parameters.len()
        );
        self
    }

    pub fn parameter(self, index: usize, expected_name: &str) -> Self {
        let parameter = &self.function.parameters[index];
        assert_eq!(
            parameter.name.name, expected_name,
            "{}: Expected parameter {} to be '{}', found '{}'",
            self.context, index, expected_name, parameter.name.name
        );
        self
    }

    pub fn has_return_type(self) -> Self {
        assert!(
            self.function.return_type.is_some(),
            "{}: Expected a return type",
            self.context
        );
        self
    }

    pub fn body_statement_count(self, expected: usize) -> Self {
        assert_eq!(
            self.function.body.statements.len(),
            expected,
            "{}: Expected {} body statements, found {}",
            self.context,
            expected,
            self.function.body.statements.len()
        );
        self
    }

    /// Assert on a statement inside the function body
    pub fn body_statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        assert!(
            index < self.function.body.statements.len(),
            "{}: Body statement index {} out of bounds",
            self.context,
            index
        );
        assertion(StatementAssertion {
            statement: &self.function.body.statements[index],
            context: format!("{}.body[{}]", self.context, index),
        });
        self
    }
}

pub struct ClassAssertion<'a> {
    class: &'a ClassDeclaration,
    context: String,
}

impl<'a> ClassAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.class.name.name, expected,
            "{}: Expected class '{}', found '{}'",
            self.context, expected, self.class.name.name
        );
        self
    }

    pub fn member_count(self, expected: usize) -> Self {
        assert_eq!(
            self.class.members.len(),
            expected,
            "{}: Expected {} members, found {}",
            self.context,
            expected,
            self.class.members.len()
        );
        self
    }

    pub fn has_heritage(self) -> Self {
        assert!(
            self.class.heritage.is_some(),
            "{}: Expected an extends clause",
            self.context
        );
        self
    }

    pub fn no_heritage(self) -> Self {
        assert!(
            self.class.heritage.is_none(),
            "{}: Expected no extends clause",
            self.context
        );
        self
    }

    pub fn annotated_with(self, expected: &str) -> Self {
        match &self.class.annotation {
            Some(annotation) => assert_eq!(
                annotation.symbol.name, expected,
                "{}: Expected annotation ':{}', found ':{}'",
                self.context, expected, annotation.symbol.name
            ),
            None => panic!(
                "{}: Expected annotation ':{}', found none",
                self.context, expected
            ),
        }
        self
    }

    /// Assert that the member at `index` is a method and descend into it
    pub fn method<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(MethodAssertion<'a>),
    {
        let context = format!("{}.members[{}]", self.context, index);
        match self.class.members.get(index) {
            Some(ClassMember::Method(method)) => assertion(MethodAssertion { method, context }),
            Some(ClassMember::Field(field)) => panic!(
                "{}: Expected a method, found field '{}'",
                context, field.name.name
            ),
            None => panic!("{}: Member index out of bounds", context),
        }
        self
    }

    /// Assert that the member at `index` is a field and descend into it
    pub fn field<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(FieldAssertion<'a>),
    {
        let context = format!("{}.members[{}]", self.context, index);
        match self.class.members.get(index) {
            Some(ClassMember::Field(field)) => assertion(FieldAssertion { field, context }),
            Some(ClassMember::Method(method)) => panic!(
                "{}: Expected a field, found method '{}'",
                context, method.name.name
            ),
            None => panic!("{}: Member index out of bounds", context),
        }
        self
    }
}

pub struct MethodAssertion<'a> {
    method: &'a MethodDefinition,
    context: String,
}

impl<'a> MethodAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.method.name.name, expected,
            "{}: Expected method '{}', found '{}'",
            self.context, expected, self.method.name.name
        );
        self
    }

    pub fn parameter_count(self, expected: usize) -> Self {
        assert_eq!(
            self.method.parameters.len(),
            expected,
            "{}: Expected {} parameters, found {}",
            self.context,
            expected,
            self.method.parameters.len()
        );
        self
    }

    pub fn has_return_type(self) -> Self {
        assert!(
            self.method.return_type.is_some(),
            "{}: Expected a return type",
            self.context
        );
        self
    }

    pub fn annotated_with(self, expected: &str) -> Self {
        match &self.method.annotation {
            Some(annotation) => assert_eq!(
                annotation.symbol.name, expected,
                "{}: Expected annotation ':{}', found ':{}'",
                self.context, expected, annotation.symbol.name
            ),
            None => panic!(
                "{}: Expected annotation ':{}', found none",
                self.context, expected
            ),
        }
        self
    }

    pub fn modifier(self, expected: Modifier) -> Self {
        assert!(
            self.method.modifiers.contains(&expected),
            "{}: Expected modifier '{}' in {:?}",
            self.context,
            expected,
            self.method.modifiers
        );
        self
    }
}

pub struct FieldAssertion<'a> {
    field: &'a FieldDefinition,
    context: String,
}

impl<'a> FieldAssertion<'a> {
    pub fn is_const(self) -> Self {
        assert_eq!(
            self.field.kind.as_str(),
            "const",
            "{}: Expected a const field",
            self.context
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.field.name.name, expected,
            "{}: Expected field '{}', found '{}'",
            self.context, expected, self.field.name.name
        );
        self
    }

    pub fn has_type(self) -> Self {
        assert!(
            self.field.ty.is_some(),
            "{}: Expected a declared type",
            self.context
        );
        self
    }

    pub fn has_value(self) -> Self {
        assert!(
            self.field.value.is_some(),
            "{}: Expected an initializer",
            self.context
        );
        self
    }

    pub fn modifier(self, expected: Modifier) -> Self {
        assert!(
            self.field.modifiers.contains(&expected),
            "{}: Expected modifier '{}' in {:?}",
            self.context,
            expected,
            self.field.modifiers
        );
        self
    }
}

pub struct ModuleAssertion<'a> {
    module: &'a ModuleDeclaration,
    context: String,
}

impl<'a> ModuleAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.module.name.name, expected,
            "{}: Expected module '{}', found '{}'",
            self.context, expected, self.module.name.name
        );
        self
    }

    pub fn body_statement_count(self, expected: usize) -> Self {
        assert_eq!(
            self.module.body.statements.len(),
            expected,
            "{}: Expected {} body statements, found {}",
            self.context,
            expected,
            self.module.body.statements.len()
        );
        self
    }

    pub fn annotated_with(self, expected: &str) -> Self {
        match &self.module.annotation {
            Some(annotation) => assert_eq!(
                annotation.symbol.name, expected,
                "{}: Expected annotation ':{}', found ':{}'",
                self.context, expected, annotation.symbol.name
            ),
            None => panic!(
                "{}: Expected annotation ':{}', found none",
                self.context, expected
            ),
        }
        self
    }

    /// Assert on a statement inside the module body
    pub fn body_statement<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StatementAssertion<'a>),
    {
        assert!(
            index < self.module.body.statements.len(),
            "{}: Body statement index {} out of bounds",
            self.context,
            index
        );
        assertion(StatementAssertion {
            statement: &self.module.body.statements[index],
            context: format!("{}.body[{}]", self.context, index),
        });
        self
    }
}

pub struct IfAssertion<'a> {
    statement: &'a IfStatement,
    context: String,
}

impl<'a> IfAssertion<'a> {
    pub fn has_else(self) -> Self {
        assert!(
            self.statement.alternative.is_some(),
            "{}: Expected an else clause",
            self.context
        );
        self
    }

    pub fn no_else(self) -> Self {
        assert!(
            self.statement.alternative.is_none(),
            "{}: Expected no else clause",
            self.context
        );
        self
    }
}

pub struct SwitchAssertion<'a> {
    statement: &'a SwitchStatement,
    context: String,
}

impl<'a> SwitchAssertion<'a> {
    pub fn clause_count(self, expected: usize) -> Self {
        assert_eq!(
            self.statement.clauses.len(),
            expected,
            "{}: Expected {} clauses, found {}",
            self.context,
            expected,
            self.statement.clauses.len()
        );
        self
    }

    pub fn case_count(self, expected: usize) -> Self {
        let actual = self
            .statement
            .clauses
            .iter()
            .filter(|clause| matches!(clause, SwitchClause::Case(_)))
            .count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} case clauses, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn has_default(self) -> Self {
        assert!(
            self.statement
                .clauses
                .iter()
                .any(|clause| matches!(clause, SwitchClause::Default(_))),
            "{}: Expected a default clause",
            self.context
        );
        self
    }
}

pub struct TryAssertion<'a> {
    statement: &'a TryStatement,
    context: String,
}

impl<'a> TryAssertion<'a> {
    pub fn handler_count(self, expected: usize) -> Self {
        assert_eq!(
            self.statement.handlers.len(),
            expected,
            "{}: Expected {} catch clauses, found {}",
            self.context,
            expected,
            self.statement.handlers.len()
        );
        self
    }
}

pub struct ReturnAssertion<'a> {
    statement: &'a ReturnStatement,
    context: String,
}

impl<'a> ReturnAssertion<'a> {
    pub fn has_value(self) -> Self {
        assert!(
            self.statement.value.is_some(),
            "{}: Expected a return value",
            self.context
        );
        self
    }

    pub fn no_value(self) -> Self {
        assert!(
            self.statement.value.is_none(),
            "{}: Expected no return value",
            self.context
        );
        self
    }
}

pub struct ExpressionAssertion<'a> {
    expression: &'a Expression,
    context: String,
}

impl<'a> ExpressionAssertion<'a> {
    /// Assert the expression's grammar node kind, e.g. `"call_expression"`
    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(
            self.expression.kind(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.expression.kind()
        );
        self
    }
}

fn summarize_statements(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(|statement| statement.kind())
        .collect::<Vec<_>>()
        .join(", ")
}
