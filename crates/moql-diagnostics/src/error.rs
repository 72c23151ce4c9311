//! MoQL error types
//!
//! One variant per malformed construct in the query string. Compilation
//! fails atomically: the first error raised by any handler aborts the whole
//! compilation, and no partial query is ever returned.

use crate::{ErrorCode, MQL0100, MQL0103, MQL0104, MQL0105, MQL0200, MQL0201};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main MoQL error type
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoqlError {
    /// A filter token could not be tokenized, or uses invalid operator
    /// syntax such as a doubled `==`
    #[error("{code}: {message} in `{token}`")]
    Filter {
        code: ErrorCode,
        message: String,
        token: String,
    },

    /// A list-valued raw-value combined with a range operator
    #[error("{code}: {message} on field `{field}`")]
    ListOperator {
        code: ErrorCode,
        message: String,
        field: String,
    },

    /// Malformed embedded JSON or mixed inclusion/exclusion in `fields=`
    #[error("{code}: {message}")]
    Projection { code: ErrorCode, message: String },

    /// Negative value supplied for `skip=`
    #[error("{code}: skip must not be negative, got {value}")]
    Skip { code: ErrorCode, value: i64 },

    /// Negative value supplied for `limit=`
    #[error("{code}: limit must not be negative, got {value}")]
    Limit { code: ErrorCode, value: i64 },

    /// Empty `$text=` search term
    #[error("{code}: {message}")]
    Text { code: ErrorCode, message: String },

    /// A recognized custom-cast call whose payload failed conversion
    #[error("{code}: caster `{caster}` failed on payload `{payload}`: {message}")]
    CustomCaster {
        code: ErrorCode,
        caster: String,
        payload: String,
        message: String,
    },

    /// A value that should be numeric could not be parsed at all
    #[error("{code}: {message}: `{value}`")]
    Value {
        code: ErrorCode,
        message: String,
        value: String,
    },
}

impl MoqlError {
    /// Create a filter-syntax error
    pub fn filter(code: ErrorCode, message: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Filter {
            code,
            message: message.into(),
            token: token.into(),
        }
    }

    /// Create a list-operator error
    pub fn list_operator(field: impl Into<String>) -> Self {
        Self::ListOperator {
            code: MQL0100,
            message: "list values cannot be used with range operators".into(),
            field: field.into(),
        }
    }

    /// Create a projection error
    pub fn projection(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Projection {
            code,
            message: message.into(),
        }
    }

    /// Create a skip error
    pub fn skip(value: i64) -> Self {
        Self::Skip {
            code: MQL0103,
            value,
        }
    }

    /// Create a limit error
    pub fn limit(value: i64) -> Self {
        Self::Limit {
            code: MQL0104,
            value,
        }
    }

    /// Create a text-operator error
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text {
            code: MQL0105,
            message: message.into(),
        }
    }

    /// Create a custom-caster error
    pub fn custom_caster(
        caster: impl Into<String>,
        payload: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::CustomCaster {
            code: MQL0200,
            caster: caster.into(),
            payload: payload.into(),
            message: message.into(),
        }
    }

    /// Create a generic value error
    pub fn value(message: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Value {
            code: MQL0201,
            message: message.into(),
            value: value.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Filter { code, .. } => *code,
            Self::ListOperator { code, .. } => *code,
            Self::Projection { code, .. } => *code,
            Self::Skip { code, .. } => *code,
            Self::Limit { code, .. } => *code,
            Self::Text { code, .. } => *code,
            Self::CustomCaster { code, .. } => *code,
            Self::Value { code, .. } => *code,
        }
    }
}
