//! Grammar definition and loading contract
//!
//! This module owns the boundary between the compiled grammar artifact and
//! the code that consumes it. The [language()] loader is the single entry
//! point: it takes no arguments and returns an opaque [GrammarHandle]
//! referencing the process-wide static grammar tables. A [Language] is then
//! constructed from the handle; that constructor is the one validation gate,
//! returning `Err` for a handle whose ABI version is unsupported or whose
//! tables are degenerate.
//!
//! The handle refers to static data only: loading performs no I/O, allocates
//! no mutable state, and is deterministic. Repeated calls return handles to
//! the same tables, so a Language built from any of them describes the same
//! fixed grammar for the lifetime of the process.

pub mod grammar;

use grammar::GrammarTables;
use std::collections::HashMap;
use std::fmt;

/// ABI version written into the compiled grammar tables
pub const LANGUAGE_VERSION: u32 = 14;

/// Oldest grammar ABI version [Language::new] still accepts
pub const MIN_COMPATIBLE_LANGUAGE_VERSION: u32 = 13;

/// Obtain a handle to the compiled Monkey C grammar
///
/// No-argument loader contract: always returns a handle to the same static
/// tables, with no side effects.
pub fn language() -> GrammarHandle {
    GrammarHandle {
        tables: &grammar::MONKEYC,
    }
}

/// Opaque reference to compiled grammar tables
///
/// Produced only by [language()] (and by tests exercising the rejection
/// path). The fields are deliberately private; the only supported operations
/// are reading the ABI tag and handing the value to [Language::new].
#[derive(Debug, Clone, Copy)]
pub struct GrammarHandle {
    tables: &'static GrammarTables,
}

impl GrammarHandle {
    /// The ABI version tag carried by the referenced tables
    pub fn abi_version(&self) -> u32 {
        self.tables.abi_version
    }

    /// Whether two handles reference the same underlying tables
    pub fn same_grammar(&self, other: &GrammarHandle) -> bool {
        std::ptr::eq(self.tables, other.tables)
    }
}

/// Failure to construct a [Language] from a [GrammarHandle]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// The handle's ABI version is outside the supported range
    IncompatibleVersion { version: u32 },
    /// The handle references tables with an empty node-kind inventory
    EmptyGrammar,
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageError::IncompatibleVersion { version } => write!(
                f,
                "incompatible grammar ABI version {} (supported {}..={})",
                version, MIN_COMPATIBLE_LANGUAGE_VERSION, LANGUAGE_VERSION
            ),
            LanguageError::EmptyGrammar => write!(f, "grammar tables contain no node kinds"),
        }
    }
}

impl std::error::Error for LanguageError {}

/// A validated, usable grammar
///
/// Wraps a [GrammarHandle] after the construction checks pass and exposes
/// the lookups the parser needs: node kinds, keywords, and operator
/// precedence.
#[derive(Debug)]
pub struct Language {
    tables: &'static GrammarTables,
    kind_ids: HashMap<&'static str, u16>,
}

impl Language {
    /// Construct a Language from a grammar handle
    ///
    /// This is the single validation gate for the loading contract. A handle
    /// with an out-of-range ABI version or degenerate tables is rejected;
    /// everything after this call may trust the tables.
    pub fn new(handle: GrammarHandle) -> Result<Self, LanguageError> {
        let tables = handle.tables;

        if tables.abi_version < MIN_COMPATIBLE_LANGUAGE_VERSION
            || tables.abi_version > LANGUAGE_VERSION
        {
            return Err(LanguageError::IncompatibleVersion {
                version: tables.abi_version,
            });
        }
        if tables.node_kinds.is_empty() {
            return Err(LanguageError::EmptyGrammar);
        }

        let kind_ids = tables
            .node_kinds
            .iter()
            .enumerate()
            .map(|(id, kind)| (*kind, id as u16))
            .collect();

        Ok(Self { tables, kind_ids })
    }

    /// The grammar's name, e.g. `"monkeyc"`
    pub fn name(&self) -> &'static str {
        self.tables.name
    }

    /// The ABI version of the underlying tables
    pub fn abi_version(&self) -> u32 {
        self.tables.abi_version
    }

    /// Number of node kinds in the grammar
    pub fn node_kind_count(&self) -> usize {
        self.tables.node_kinds.len()
    }

    /// The node-kind name for a numeric id, if in range
    pub fn node_kind_for_id(&self, id: u16) -> Option<&'static str> {
        self.tables.node_kinds.get(id as usize).copied()
    }

    /// The numeric id for a node-kind name, if the grammar defines it
    pub fn id_for_node_kind(&self, kind: &str) -> Option<u16> {
        self.kind_ids.get(kind).copied()
    }

    /// All node-kind names, id order
    pub fn node_kinds(&self) -> &'static [&'static str] {
        self.tables.node_kinds
    }

    /// Whether a word is reserved in this grammar
    pub fn is_keyword(&self, word: &str) -> bool {
        self.tables.keywords.contains(&word)
    }

    /// Precedence level for a binary operator spelling, higher binds tighter
    pub fn binary_precedence(&self, operator: &str) -> Option<u8> {
        self.tables
            .binary_precedence
            .iter()
            .find(|(op, _)| *op == operator)
            .map(|(_, level)| *level)
    }
}
