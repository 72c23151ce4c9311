//! MoQL error codes following a structured numbering system
//!
//! Error code ranges:
//! - MQL0001-MQL0099: Syntax errors (tokenization)
//! - MQL0100-MQL0199: Clause errors (filter, projection, paging, text)
//! - MQL0200-MQL0299: Cast errors (type inference, custom casters)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a syntax error (0001-0099)
    pub const fn is_syntax_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a clause error (0100-0199)
    pub const fn is_clause_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a cast error (0200-0299)
    pub const fn is_cast_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Syntax errors (0001-0099)
    map.insert(1, ErrorInfo::new("Malformed filter token"));
    map.insert(
        2,
        ErrorInfo::new("Invalid operator syntax")
            .with_help("Equality is spelled with a single '=', not '=='"),
    );

    // Clause errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("List value combined with a range operator")
            .with_help("Lists are only valid with '=' and '!='"),
    );
    map.insert(101, ErrorInfo::new("Invalid projection JSON"));
    map.insert(
        102,
        ErrorInfo::new("Mixed inclusion and exclusion projection"),
    );
    map.insert(103, ErrorInfo::new("Negative skip value"));
    map.insert(104, ErrorInfo::new("Negative limit value"));
    map.insert(105, ErrorInfo::new("Empty text search term"));
    map.insert(106, ErrorInfo::new("Conflicting filter clauses"));

    // Cast errors (0200-0299)
    map.insert(200, ErrorInfo::new("Custom caster failed"));
    map.insert(201, ErrorInfo::new("Invalid numeric value"));

    map
});

// Convenient error code constants

// Syntax errors
pub const MQL0001: ErrorCode = ErrorCode::new(1);
pub const MQL0002: ErrorCode = ErrorCode::new(2);

// Clause errors
pub const MQL0100: ErrorCode = ErrorCode::new(100);
pub const MQL0101: ErrorCode = ErrorCode::new(101);
pub const MQL0102: ErrorCode = ErrorCode::new(102);
pub const MQL0103: ErrorCode = ErrorCode::new(103);
pub const MQL0104: ErrorCode = ErrorCode::new(104);
pub const MQL0105: ErrorCode = ErrorCode::new(105);
pub const MQL0106: ErrorCode = ErrorCode::new(106);

// Cast errors
pub const MQL0200: ErrorCode = ErrorCode::new(200);
pub const MQL0201: ErrorCode = ErrorCode::new(201);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(MQL0001.to_string(), "MQL0001");
        assert_eq!(MQL0100.to_string(), "MQL0100");
        assert_eq!(MQL0200.to_string(), "MQL0200");
    }

    #[test]
    fn test_error_categories() {
        assert!(MQL0001.is_syntax_error());
        assert!(!MQL0001.is_clause_error());

        assert!(MQL0100.is_clause_error());
        assert!(MQL0105.is_clause_error());

        assert!(MQL0200.is_cast_error());
        assert!(!MQL0200.is_syntax_error());
    }

    #[test]
    fn test_error_info() {
        let info = MQL0001.info();
        assert_eq!(info.description, "Malformed filter token");

        let info = MQL0100.info();
        assert!(info.help.is_some());
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let info = ErrorCode::new(999).info();
        assert_eq!(info.description, "Unknown error");
    }
}
