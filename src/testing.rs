//! Testing utilities for parser verification
//!
//! # Parser Testing Guidelines
//!
//! Testing the parser must follow strict rules to ensure reliability and
//! maintainability. This module provides two tools that must be used
//! together:
//!
//! 1. **[McSources](mc_sources::McSources)** - verified Monkey C content
//! 2. **[assert_ast](fn@assert_ast)** - comprehensive AST verification
//!
//! ## Rule 1: Draw test content from McSources
//!
//! Monkey C has enough syntactic corners (`as` casts, `=>` pairs, nullable
//! markers) that ad-hoc snippets scattered across test files regularly get
//! details wrong and then rot when the grammar evolves. The curated samples
//! under `samples/` are the only canonical sources for full-program tests;
//! short single-construct snippets are fine inline where a sample would
//! obscure the point.
//!
//! ## Rule 2: Verify tree shape with assert_ast
//!
//! Counting nodes proves nothing about the tree. The fluent [assert_ast]
//! builder descends into the structure and checks names, kinds, and
//! children in one expression:
//!
//! ```rust,ignore
//! let program = parse_source(McSources::get_string("020-classes.mc")?);
//! assert_ast(&program).statement(1, |s| {
//!     s.assert_class()
//!         .name("Account")
//!         .member_count(6);
//! });
//! ```

pub mod mc_sources;
pub mod testing_assertions;

pub use mc_sources::McSources;
pub use testing_assertions::assert_ast;

use crate::ast::Program;
use crate::language::{language, Language};
use crate::parser::Parser;

/// Parse a source string, panicking on any failure
///
/// Test support only: the grammar-load panic carries the canonical binding
/// diagnostic so a broken artifact is unmistakable in test output.
pub fn parse_source(source: &str) -> Program {
    let language = Language::new(language()).expect("Error loading Monkeyc grammar");
    Parser::new(&language)
        .parse(source)
        .unwrap_or_else(|error| panic!("parse error: {}", error))
}
