//! Static grammar tables for Monkey C
//!
//! The tables below are the compiled form of the grammar: the node-kind
//! inventory, the keyword list, and the binary operator precedence ladder.
//! They are process-wide, immutable, and referenced by every [GrammarHandle]
//! the loader hands out.
//!
//! [GrammarHandle]: crate::language::GrammarHandle

/// Compiled grammar tables for one language
///
/// A [GrammarHandle](crate::language::GrammarHandle) is an opaque reference to
/// one of these. The `abi_version` tag is checked by the language constructor
/// before any other field is trusted.
#[derive(Debug)]
pub struct GrammarTables {
    pub name: &'static str,
    pub abi_version: u32,
    /// Names of every node kind the grammar can produce, id = index
    pub node_kinds: &'static [&'static str],
    /// Reserved words of the language
    pub keywords: &'static [&'static str],
    /// Binary operator spelling to precedence level, higher binds tighter
    pub binary_precedence: &'static [(&'static str, u8)],
}

/// Every node kind in the Monkey C grammar
pub const NODE_KINDS: &[&str] = &[
    "program",
    "statement",
    "declaration",
    "expression",
    "primary_expression",
    "comment",
    "import",
    "using",
    "import_statement",
    "using_statement",
    "dotted_name",
    "expression_statement",
    "type_alias_statement",
    "variable_declaration",
    "variable_declarator",
    "statement_block",
    "else_clause",
    "if_statement",
    "switch_statement",
    "switch_body",
    "switch_case",
    "switch_default",
    "for_statement",
    "while_statement",
    "do_statement",
    "try_statement",
    "catch_clause",
    "finally_clause",
    "break_statement",
    "continue_statement",
    "return_statement",
    "throw_statement",
    "empty_statement",
    "function_declaration",
    "class_declaration",
    "class_body",
    "class_heritage",
    "method_definition",
    "field_definition",
    "module_declaration",
    "modifiers",
    "annotation",
    "formal_parameters",
    "parameter",
    "typed_parameter",
    "identifier",
    "property_identifier",
    "type_identifier",
    "member_expression",
    "call_expression",
    "new_expression",
    "array_access",
    "parenthesized_expression",
    "assignment_expression",
    "augmented_assignment_expression",
    "binary_expression",
    "unary_expression",
    "update_expression",
    "ternary_expression",
    "pattern",
    "arguments",
    "string",
    "string_fragment",
    "escape_sequence",
    "number",
    "symbol",
    "this",
    "super",
    "true",
    "false",
    "null",
    "array",
    "array_unit",
    "typed_array",
    "array_class",
    "typed_identifier",
    "dictionary",
    "pair",
    "type",
    "type_null",
    "union_type",
    "member_type",
    "generic_type",
    "type_arguments",
    "array_type",
    "dimensions",
    "method_function",
    "return_type",
];

/// Reserved words of Monkey C
pub const KEYWORDS: &[&str] = &[
    "and",
    "as",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "else",
    "extends",
    "false",
    "final",
    "finally",
    "for",
    "function",
    "has",
    "if",
    "import",
    "instanceof",
    "module",
    "new",
    "null",
    "or",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typedef",
    "using",
    "var",
    "while",
    "Method",
];

/// The precedence ladder for binary operators, loosest (1) to tightest (11)
///
/// All levels associate to the left. The ternary operator sits below level 1
/// and assignment below that; both are handled structurally by the parser
/// rather than through this table.
pub const BINARY_PRECEDENCE: &[(&str, u8)] = &[
    ("or", 1),
    ("||", 1),
    ("and", 2),
    ("&&", 2),
    ("|", 3),
    ("^", 4),
    ("&", 5),
    ("has", 6),
    ("==", 7),
    ("!=", 7),
    ("<", 8),
    ("<=", 8),
    (">", 8),
    (">=", 8),
    ("instanceof", 8),
    ("<<", 9),
    (">>", 9),
    ("+", 10),
    ("-", 10),
    ("*", 11),
    ("/", 11),
    ("%", 11),
];

/// The compiled Monkey C grammar, initialized once per process
pub static MONKEYC: GrammarTables = GrammarTables {
    name: "monkeyc",
    abi_version: crate::language::LANGUAGE_VERSION,
    node_kinds: NODE_KINDS,
    keywords: KEYWORDS,
    binary_precedence: BINARY_PRECEDENCE,
};
