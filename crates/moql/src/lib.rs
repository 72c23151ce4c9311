//! MoQL - a URL-query-string filter language compiler
//!
//! MoQL lets HTTP callers express database filters, sorting, paging,
//! free-text search, and field selection entirely inside a query string.
//! This crate compiles that mini-language into a structured query
//! specification; executing it against a store is the caller's concern.
//!
//! # Example
//!
//! ```
//! use moql::compile;
//!
//! let query = compile("score>525&score<600&sort=-created_at&limit=10")?;
//! assert_eq!(query.limit, 10);
//! println!("{}", query.to_json());
//! # Ok::<(), moql::MoqlError>(())
//! ```

// Re-export all public APIs from internal crates
pub use moql_diagnostics as diagnostics;
pub use moql_parser as parser;
pub use moql_query as query;

// Convenience re-exports
pub use moql_diagnostics::{MoqlError, Result};
pub use moql_parser::{CasterRegistry, Compiler, compile};
pub use moql_query::{MoqlQuery, MoqlValue};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
