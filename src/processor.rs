//! Source processing API for Monkey C
//!
//! This module provides an extensible API for processing Monkey C sources
//! with different stages (token, ast) and formats (simple, json, sexp). It
//! is the programmatic surface behind the `monkeyc` binary: a processing
//! spec is parsed from a string such as `"token-simple"` or `"ast-sexp"`,
//! then executed over a source string.

use crate::ast::to_sexp;
use crate::language::{language, Language, LanguageError};
use crate::lexer::{tokenize_with_spans, Token};
use crate::parser::{ParseError, Parser};
use serde::Serialize;
use std::fmt;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Sexp,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-sexp"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage_str, format_str)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage_str {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format_str {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "sexp" => OutputFormat::Sexp,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Sexp) => {
                return Err(ProcessingError::InvalidFormatType(
                    "format 'sexp' only works with the ast stage".to_string(),
                ))
            }
            (ProcessingStage::Ast, OutputFormat::Simple) => {
                return Err(ProcessingError::InvalidFormatType(
                    "format 'simple' only works with the token stage".to_string(),
                ))
            }
            _ => {}
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Sexp,
            },
        ]
    }

    /// The string form accepted by [ProcessingSpec::from_string]
    pub fn to_format_string(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Sexp => "sexp",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors from parsing or executing a processing spec
#[derive(Debug)]
pub enum ProcessingError {
    /// The format string is missing the `stage-format` shape
    InvalidFormat(String),
    /// The stage part is not `token` or `ast`
    InvalidStage(String),
    /// The format part is unknown or incompatible with the stage
    InvalidFormatType(String),
    /// The grammar could not be loaded
    Language(LanguageError),
    /// The source failed to parse
    Parse(ParseError),
    /// Serialization of the output failed
    Serialize(serde_json::Error),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(s) => {
                write!(f, "invalid format string '{}', expected 'stage-format'", s)
            }
            ProcessingError::InvalidStage(s) => write!(f, "invalid stage '{}'", s),
            ProcessingError::InvalidFormatType(s) => write!(f, "invalid format '{}'", s),
            ProcessingError::Language(e) => write!(f, "language error: {}", e),
            ProcessingError::Parse(e) => write!(f, "parse error: {}", e),
            ProcessingError::Serialize(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<LanguageError> for ProcessingError {
    fn from(error: LanguageError) -> Self {
        ProcessingError::Language(error)
    }
}

impl From<ParseError> for ProcessingError {
    fn from(error: ParseError) -> Self {
        ProcessingError::Parse(error)
    }
}

impl From<serde_json::Error> for ProcessingError {
    fn from(error: serde_json::Error) -> Self {
        ProcessingError::Serialize(error)
    }
}

/// One token with its byte range and source text, for JSON output
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: Token,
    start: usize,
    end: usize,
    text: &'a str,
}

/// Executes processing specs over source strings
pub struct SourceProcessor;

impl SourceProcessor {
    pub fn new() -> Self {
        SourceProcessor
    }

    /// Execute a spec over a source string and render the result
    pub fn process(&self, source: &str, spec: ProcessingSpec) -> Result<String, ProcessingError> {
        match spec.stage {
            ProcessingStage::Token => self.process_tokens(source, spec.format),
            ProcessingStage::Ast => self.process_ast(source, spec.format),
        }
    }

    /// Parse a format string and execute it in one step
    pub fn execute_and_serialize(
        &self,
        source: &str,
        format: &str,
    ) -> Result<String, ProcessingError> {
        let spec = ProcessingSpec::from_string(format)?;
        self.process(source, spec)
    }

    fn process_tokens(&self, source: &str, format: OutputFormat) -> Result<String, ProcessingError> {
        let records: Vec<TokenRecord<'_>> = tokenize_with_spans(source)
            .into_iter()
            .map(|(token, range)| TokenRecord {
                kind: token,
                start: range.start,
                end: range.end,
                text: &source[range],
            })
            .collect();

        match format {
            OutputFormat::Simple => {
                let mut out = String::new();
                for record in &records {
                    out.push_str(&format!(
                        "{:?} {}..{} {:?}\n",
                        record.kind, record.start, record.end, record.text
                    ));
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&records)?),
            OutputFormat::Sexp => Err(ProcessingError::InvalidFormatType(
                "format 'sexp' only works with the ast stage".to_string(),
            )),
        }
    }

    fn process_ast(&self, source: &str, format: OutputFormat) -> Result<String, ProcessingError> {
        let language = Language::new(language())?;
        let program = Parser::new(&language).parse(source)?;

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&program)?),
            OutputFormat::Sexp => Ok(to_sexp(&program)),
            OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                "format 'simple' only works with the token stage".to_string(),
            )),
        }
    }
}

impl Default for SourceProcessor {
    fn default() -> Self {
        Self::new()
    }
}
