//! Command-line interface for monkeyc
//! This binary is used to inspect Monkey C files through the library's
//! processing stages.
//!
//! Usage:
//!   monkeyc parse `<path>` [--format `<format>`]   - Parse a file and print the tree
//!   monkeyc tokens `<path>` [--format `<format>`]  - Print the token stream
//!   monkeyc kinds                               - List the grammar's node kinds

use clap::{Arg, Command};

use monkeyc::language::{language, Language};
use monkeyc::processor::SourceProcessor;

fn main() {
    let matches = Command::new("monkeyc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Monkey C files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print its syntax tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the Monkey C file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('ast-sexp' or 'ast-json')")
                        .default_value("ast-sexp"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the Monkey C file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('token-simple' or 'token-json')")
                        .default_value("token-simple"),
                ),
        )
        .subcommand(Command::new("kinds").about("List the node kinds of the loaded grammar"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_process_command(path, format);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_process_command(path, format);
        }
        Some(("kinds", _)) => {
            handle_kinds_command();
        }
        _ => unreachable!(),
    }
}

/// Run a processing spec over the file at `path` and print the result
fn handle_process_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let processor = SourceProcessor::new();
    let output = processor
        .execute_and_serialize(&source, format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

/// List every node kind the grammar defines, one per line with its id
fn handle_kinds_command() {
    let language = Language::new(language()).unwrap_or_else(|e| {
        eprintln!("Error loading Monkeyc grammar: {}", e);
        std::process::exit(1);
    });

    println!("{} (grammar ABI v{})\n", language.name(), language.abi_version());
    for (id, kind) in language.node_kinds().iter().enumerate() {
        println!("{:>3}  {}", id, kind);
    }
}
