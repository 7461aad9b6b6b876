//! Grammar loading contract tests
//!
//! The loader is a no-argument entry point returning an opaque handle to the
//! compiled grammar tables; constructing a Language from it is the single
//! validation gate. These tests pin down the contract: loading always
//! succeeds for a correctly built grammar, is deterministic and idempotent,
//! and the loaded grammar is the one the parser actually consumes.

use monkeyc::ast::AstNode;
use monkeyc::language::{
    language, Language, LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION,
};
use monkeyc::parser::Parser;
use monkeyc::testing::McSources;

#[test]
fn test_can_load_grammar() {
    let language = Language::new(language());
    assert!(language.is_ok(), "Error loading Monkeyc grammar");
}

#[test]
fn test_loader_is_deterministic() {
    let first = language();
    let second = language();
    assert!(first.same_grammar(&second));

    let first = Language::new(first).unwrap();
    let second = Language::new(second).unwrap();
    assert_eq!(first.name(), second.name());
    assert_eq!(first.abi_version(), second.abi_version());
    assert_eq!(first.node_kind_count(), second.node_kind_count());
}

#[test]
fn test_handle_carries_supported_abi_version() {
    let handle = language();
    assert!(handle.abi_version() >= MIN_COMPATIBLE_LANGUAGE_VERSION);
    assert!(handle.abi_version() <= LANGUAGE_VERSION);
}

#[test]
fn test_grammar_identity_is_stable_within_a_process() {
    let before = Language::new(language()).unwrap();
    let kinds_before: Vec<&str> = before.node_kinds().to_vec();

    // Exercise the grammar in between; the tables must not change
    let parser = Parser::new(&before);
    parser
        .parse(McSources::get_string("000-statements.mc").unwrap())
        .unwrap();

    let after = Language::new(language()).unwrap();
    assert_eq!(after.node_kinds().to_vec(), kinds_before);
}

#[test]
fn test_node_kind_lookups_round_trip() {
    let language = Language::new(language()).unwrap();
    for id in 0..language.node_kind_count() as u16 {
        let kind = language.node_kind_for_id(id).unwrap();
        assert_eq!(language.id_for_node_kind(kind), Some(id));
    }
    assert_eq!(
        language.node_kind_for_id(language.node_kind_count() as u16),
        None
    );
}

#[test]
fn test_parser_requires_the_loaded_language() {
    // The parser consumes the keyword and precedence tables of the grammar
    let language = Language::new(language()).unwrap();
    assert!(language.is_keyword("typedef"));
    assert!(language.binary_precedence("instanceof").is_some());

    let program = Parser::new(&language).parse("var x = a has :field;").unwrap();
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_parsed_nodes_use_registered_kinds() {
    let language = Language::new(language()).unwrap();
    let parser = Parser::new(&language);

    for name in McSources::names() {
        let program = parser.parse(McSources::get_string(name).unwrap()).unwrap();
        assert!(language.id_for_node_kind(program.kind()).is_some());
        for statement in &program.statements {
            assert!(
                language.id_for_node_kind(statement.kind()).is_some(),
                "{}: kind '{}' missing from grammar tables",
                name,
                statement.kind()
            );
        }
    }
}
