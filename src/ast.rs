//! Syntax tree for Monkey C
//!
//! This module defines the node types produced by the parser, along with
//! position tracking and the S-expression serializer used for tree
//! inspection. Every node carries an optional [Span] locating it in the
//! original source.

pub mod node;
pub mod sexp;
pub mod source_location;
pub mod span;

pub use node::*;
pub use sexp::to_sexp;
pub use source_location::SourceLocation;
pub use span::{Position, Span};
