//! Lexer module for Monkey C
//!
//! This module contains the tokenization logic for Monkey C source text,
//! including token definitions and the lexer implementation.
//!
//! Trivia Handling
//!
//! Whitespace and comments are the grammar's extras: they may appear between
//! any two tokens and carry no structure. The logos lexer still produces
//! real tokens for them so that token-level output can show comments, and
//! [lex] strips them before parsing.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{lex, tokenize, tokenize_with_spans};
pub use tokens::Token;
