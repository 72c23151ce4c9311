//! MoQL diagnostics and error handling
//!
//! This crate provides the error handling infrastructure for the MoQL
//! compiler, including error codes and the error taxonomy raised by the
//! parameter extractor, the casting engine, and the clause handlers.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for MoQL operations
pub type Result<T> = std::result::Result<T, MoqlError>;
