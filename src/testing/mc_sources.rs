//! Verified Monkey C sample sources
//!
//! The samples under `samples/` are the canonical Monkey C content for
//! tests. They are embedded at compile time and addressed by file name, so
//! tests never copy grammar-sensitive content inline.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

use crate::ast::Program;
use crate::lexer::{tokenize, Token};

static SOURCES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "000-statements.mc",
            include_str!("../../samples/000-statements.mc"),
        ),
        (
            "010-functions.mc",
            include_str!("../../samples/010-functions.mc"),
        ),
        (
            "020-classes.mc",
            include_str!("../../samples/020-classes.mc"),
        ),
        (
            "030-modules.mc",
            include_str!("../../samples/030-modules.mc"),
        ),
        (
            "040-expressions.mc",
            include_str!("../../samples/040-expressions.mc"),
        ),
        ("060-app.mc", include_str!("../../samples/060-app.mc")),
    ])
});

/// Error type for sample lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// No sample with the given name is registered
    UnknownSample(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::UnknownSample(name) => write!(f, "unknown sample: {}", name),
        }
    }
}

impl std::error::Error for SourceError {}

/// Access to the verified Monkey C sample files
pub struct McSources;

impl McSources {
    /// Get the raw string content of a sample
    pub fn get_string(name: &str) -> Result<&'static str, SourceError> {
        SOURCES
            .get(name)
            .copied()
            .ok_or_else(|| SourceError::UnknownSample(name.to_string()))
    }

    /// Get the tokenized content of a sample
    pub fn get_tokens(name: &str) -> Result<Vec<Token>, SourceError> {
        Ok(tokenize(Self::get_string(name)?))
    }

    /// Get the parsed tree of a sample
    pub fn get_program(name: &str) -> Result<Program, SourceError> {
        Ok(super::parse_source(Self::get_string(name)?))
    }

    /// Names of all registered samples, sorted
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = SOURCES.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_samples_are_registered() {
        assert_eq!(
            McSources::names(),
            vec![
                "000-statements.mc",
                "010-functions.mc",
                "020-classes.mc",
                "030-modules.mc",
                "040-expressions.mc",
                "060-app.mc",
            ]
        );
    }

    #[test]
    fn test_unknown_sample_is_an_error() {
        assert_eq!(
            McSources::get_string("999-missing.mc"),
            Err(SourceError::UnknownSample("999-missing.mc".to_string()))
        );
    }

    #[test]
    fn test_every_sample_tokenizes() {
        for name in McSources::names() {
            let tokens = McSources::get_tokens(name).unwrap();
            assert!(!tokens.is_empty(), "{} produced no tokens", name);
        }
    }

    #[test]
    fn test_every_sample_parses() {
        for name in McSources::names() {
            let program = McSources::get_program(name).unwrap();
            assert!(
                !program.statements.is_empty(),
                "{} produced an empty program",
                name
            );
        }
    }
}
