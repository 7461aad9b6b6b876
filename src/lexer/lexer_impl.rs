//! Implementation of the Monkey C lexer
//!
//! This module provides convenience functions for tokenizing Monkey C text.
//! The actual tokenization is handled entirely by logos.

use crate::lexer::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Tokenize for parsing: spans preserved, trivia stripped
///
/// Whitespace and comments are extras in the grammar; the parser never
/// consumes them, so they are removed here.
pub fn lex(source: &str) -> Vec<(Token, Range<usize>)> {
    tokenize_with_spans(source)
        .into_iter()
        .filter(|(token, _)| !token.is_trivia())
        .collect()
}
