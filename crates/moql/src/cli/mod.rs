//! CLI functionality for the moql tool
//!
//! One command: compile a MoQL query string and print the resulting query
//! document as JSON, for inspecting what a given query string turns into
//! before wiring it to a store.

use anyhow::{Context, Result};
use colored::Colorize;
use moql_parser::Compiler;

/// Configuration for the compile command
pub struct CompileConfig {
    /// The MoQL query string
    pub query: String,
    /// Parameter keys to exclude before parsing
    pub blacklist: Vec<String>,
    /// Pretty-print the output document
    pub pretty: bool,
}

/// Compile a query string and print the query document to stdout
pub fn run(config: CompileConfig) -> Result<()> {
    let mut compiler = Compiler::new();
    if !config.blacklist.is_empty() {
        compiler = compiler.with_blacklist(config.blacklist);
    }

    let compiled = compiler
        .compile(&config.query)
        .with_context(|| format!("failed to compile `{}`", config.query))?;

    let document = compiled.to_json();
    let output = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{output}");
    Ok(())
}

/// Print an error chain to stderr in color
pub fn report_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", "error:".red().bold());
}
