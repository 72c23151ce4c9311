//! MoQL operators and the tokenized form of one query-string segment

use serde::{Deserialize, Serialize};
use std::fmt;

/// A MoQL comparison operator as spelled in the query string.
///
/// `Exists` is the absence of any operator symbol (`key`); `NotExists` is a
/// leading `!` (`!key`). For both, the tokenizer leaves the key empty and
/// the whole remainder of the token becomes the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// no operator symbol
    Exists,
    /// leading `!`
    NotExists,
}

impl Operator {
    /// The query-string spelling of this operator
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Exists => "",
            Self::NotExists => "!",
        }
    }

    /// True for the ordering operators `<`, `<=`, `>`, `>=`
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::Lt | Self::Lte | Self::Gt | Self::Gte)
    }

    /// The operator-map key this operator folds into, if any. Equality sets
    /// the field directly and has no key.
    pub const fn comparison(&self) -> Option<ComparisonOp> {
        match self {
            Self::Eq => None,
            Self::Ne => Some(ComparisonOp::Ne),
            Self::Lt => Some(ComparisonOp::Lt),
            Self::Lte => Some(ComparisonOp::Lte),
            Self::Gt => Some(ComparisonOp::Gt),
            Self::Gte => Some(ComparisonOp::Gte),
            Self::Exists | Self::NotExists => Some(ComparisonOp::Exists),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A comparison key inside a per-field operator map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Exists,
}

impl ComparisonOp {
    /// The document key for this comparison
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Ne => "$ne",
            Self::Lt => "$lt",
            Self::Lte => "$lte",
            Self::Gt => "$gt",
            Self::Gte => "$gte",
            Self::Exists => "$exists",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One tokenized query-string segment: key, operator, raw value.
///
/// Immutable once produced; the casting engine reads `value` and the filter
/// handler reads all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParameter {
    /// Everything before the operator (empty for exists checks)
    pub key: String,
    /// The detected operator
    pub operator: Operator,
    /// Everything after the operator
    pub value: String,
}

impl RawParameter {
    /// Create a new raw parameter
    pub fn new(key: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }

    /// Rejoin key, operator, and value into the original token
    pub fn reconstruct(&self) -> String {
        format!("{}{}{}", self.key, self.operator.symbol(), self.value)
    }
}
