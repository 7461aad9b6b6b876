//! Error types for the parser

use crate::ast::Span;
use std::fmt;

/// A syntax error with the source location it was detected at
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The token stream held something other than what the grammar allows here
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },
    /// The source ended before the grammar was satisfied
    UnexpectedEof { expected: String },
    /// The left side of an assignment is not an identifier, member, or index
    InvalidAssignmentTarget { span: Span },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                expected,
                found,
                span,
            } => {
                write!(
                    f,
                    "expected {}, found {} at {}",
                    expected, found, span.start
                )
            }
            ParseError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            ParseError::InvalidAssignmentTarget { span } => {
                write!(f, "invalid assignment target at {}", span.start)
            }
        }
    }
}

impl std::error::Error for ParseError {}
