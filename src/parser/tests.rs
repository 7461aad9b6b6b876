//! Focused parser unit tests
//!
//! Shape-level checks for tricky corners of the grammar. Broader coverage
//! lives in the integration tests under `tests/`, which use the verified
//! sample sources.

use crate::ast::*;
use crate::language::{language, Language};
use crate::parser::{ParseError, Parser};

fn parse(source: &str) -> Program {
    let language = Language::new(language()).unwrap();
    Parser::new(&language)
        .parse(source)
        .unwrap_or_else(|e| panic!("parse failed for {:?}: {}", source, e))
}

fn parse_err(source: &str) -> ParseError {
    let language = Language::new(language()).unwrap();
    Parser::new(&language)
        .parse(source)
        .expect_err("expected a parse error")
}

fn only_expression(program: &Program) -> &Expression {
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::Expression(statement) => &statement.expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let program = parse("a + b * c;");
    let Expression::Binary(add) = only_expression(&program) else {
        panic!("expected binary expression");
    };
    assert_eq!(add.operator, BinaryOperator::Add);
    let Expression::Binary(mul) = add.right.as_ref() else {
        panic!("expected nested binary expression");
    };
    assert_eq!(mul.operator, BinaryOperator::Mul);
}

#[test]
fn test_binary_operators_associate_left() {
    let program = parse("a - b - c;");
    let Expression::Binary(outer) = only_expression(&program) else {
        panic!("expected binary expression");
    };
    assert!(matches!(outer.left.as_ref(), Expression::Binary(_)));
    assert!(matches!(outer.right.as_ref(), Expression::Identifier(_)));
}

#[test]
fn test_keyword_operators_share_symbolic_precedence() {
    let program = parse("a and b or c;");
    let Expression::Binary(outer) = only_expression(&program) else {
        panic!("expected binary expression");
    };
    assert_eq!(outer.operator, BinaryOperator::Or);
    let Expression::Binary(inner) = outer.left.as_ref() else {
        panic!("expected nested binary expression");
    };
    assert_eq!(inner.operator, BinaryOperator::And);
}

#[test]
fn test_has_sits_between_equality_and_bitwise() {
    let program = parse("a has :symbol == true;");
    let Expression::Binary(outer) = only_expression(&program) else {
        panic!("expected binary expression");
    };
    assert_eq!(outer.operator, BinaryOperator::Has);
}

#[test]
fn test_member_call_index_chain() {
    let program = parse("dict.get(key)[0].toString();");
    let Expression::Call(call) = only_expression(&program) else {
        panic!("expected call expression");
    };
    let Expression::Member(member) = call.function.as_ref() else {
        panic!("expected member expression");
    };
    assert_eq!(member.property.name, "toString");
    assert!(matches!(member.object.as_ref(), Expression::ArrayAccess(_)));
}

#[test]
fn test_assignment_is_right_associative() {
    let program = parse("a = b = c;");
    let Expression::Assignment(outer) = only_expression(&program) else {
        panic!("expected assignment");
    };
    assert!(matches!(outer.right.as_ref(), Expression::Assignment(_)));
}

#[test]
fn test_assignment_to_call_is_rejected() {
    let err = parse_err("f() = 1;");
    assert!(matches!(err, ParseError::InvalidAssignmentTarget { .. }));
}

#[test]
fn test_augmented_assignment() {
    let program = parse("total += delta;");
    let Expression::AugmentedAssignment(assign) = only_expression(&program) else {
        panic!("expected augmented assignment");
    };
    assert_eq!(assign.operator, AssignmentOperator::Add);
}

#[test]
fn test_cast_then_ternary() {
    // The `?` is detached from `Number`, so it starts a ternary over the cast
    let program = parse("x as Number ? x : 0;");
    let Expression::Ternary(ternary) = only_expression(&program) else {
        panic!("expected ternary expression");
    };
    assert!(matches!(ternary.condition.as_ref(), Expression::Cast(_)));
}

#[test]
fn test_nullable_type_requires_adjacency() {
    let program = parse("var x as Number?;");
    let Statement::Declaration(Declaration::Variable(declaration)) = &program.statements[0] else {
        panic!("expected variable declaration");
    };
    assert!(matches!(
        declaration.declarator.ty,
        Some(TypeExpr::Nullable(_))
    ));
}

#[test]
fn test_nested_generic_closes_with_shift_token() {
    let program = parse("var grid as Array<Array<Number>>;");
    let Statement::Declaration(Declaration::Variable(declaration)) = &program.statements[0] else {
        panic!("expected variable declaration");
    };
    let Some(TypeExpr::Generic(outer)) = &declaration.declarator.ty else {
        panic!("expected generic type");
    };
    assert!(matches!(outer.argument.as_ref(), TypeExpr::Generic(_)));
}

#[test]
fn test_union_type_flattens() {
    let program = parse("var x as Number or Float or Null;");
    let Statement::Declaration(Declaration::Variable(declaration)) = &program.statements[0] else {
        panic!("expected variable declaration");
    };
    let Some(TypeExpr::Union(union)) = &declaration.declarator.ty else {
        panic!("expected union type");
    };
    assert_eq!(union.members.len(), 3);
}

#[test]
fn test_method_type_with_return() {
    let program = parse("var cb as Method(x as Number) as Boolean;");
    let Statement::Declaration(Declaration::Variable(declaration)) = &program.statements[0] else {
        panic!("expected variable declaration");
    };
    let Some(TypeExpr::Method(method)) = &declaration.declarator.ty else {
        panic!("expected method type");
    };
    assert_eq!(method.parameters.len(), 1);
    assert!(method.return_type.is_some());
}

#[test]
fn test_new_without_arguments() {
    let program = parse("var timer = new Timer.Timer;");
    let Statement::Declaration(Declaration::Variable(declaration)) = &program.statements[0] else {
        panic!("expected variable declaration");
    };
    let Some(Expression::New(new)) = &declaration.declarator.value else {
        panic!("expected new expression");
    };
    assert!(new.arguments.is_none());
    assert!(matches!(new.constructor.as_ref(), Expression::Member(_)));
}

#[test]
fn test_new_array_shorthand() {
    let program = parse("var buffer = new [16];");
    let Statement::Declaration(Declaration::Variable(declaration)) = &program.statements[0] else {
        panic!("expected variable declaration");
    };
    let Some(Expression::New(new)) = &declaration.declarator.value else {
        panic!("expected new expression");
    };
    assert!(matches!(new.constructor.as_ref(), Expression::Array(_)));
}

#[test]
fn test_array_literal_with_holes() {
    let program = parse("var xs = [1, , 3];");
    let Statement::Declaration(Declaration::Variable(declaration)) = &program.statements[0] else {
        panic!("expected variable declaration");
    };
    let Some(Expression::Array(array)) = &declaration.declarator.value else {
        panic!("expected array literal");
    };
    assert_eq!(array.elements.len(), 3);
    assert!(array.elements[1].is_none());
}

#[test]
fn test_dictionary_requires_a_pair() {
    let err = parse_err("var d = {};");
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn test_dictionary_with_trailing_comma() {
    let program = parse("var d = { :a => 1, :b => 2, };");
    let Statement::Declaration(Declaration::Variable(declaration)) = &program.statements[0] else {
        panic!("expected variable declaration");
    };
    let Some(Expression::Dictionary(dict)) = &declaration.declarator.value else {
        panic!("expected dictionary literal");
    };
    assert_eq!(dict.pairs.len(), 2);
}

#[test]
fn test_missing_semicolon_is_reported() {
    let err = parse_err("var x = 1");
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn test_try_requires_catch() {
    let err = parse_err("try { } finally { }");
    match err {
        ParseError::UnexpectedToken { expected, .. } => assert_eq!(expected, "'catch'"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_try_requires_finally() {
    let err = parse_err("try { } catch (e) { }");
    match err {
        ParseError::UnexpectedToken { .. } | ParseError::UnexpectedEof { .. } => {}
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_spans_are_recorded() {
    let program = parse("var x = 1;\nvar y = 2;\n");
    let second = program.statements[1].span().unwrap();
    assert_eq!(second.start, Position::new(1, 0));
    assert_eq!(second.end, Position::new(1, 10));
}
