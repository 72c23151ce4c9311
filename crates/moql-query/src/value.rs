//! MoQL value types - the typed form of raw query-string values
//!
//! This module defines the MoqlValue enum produced by the type casting
//! engine. Values never change after creation.

use chrono::{DateTime, FixedOffset};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// A typed value inferred from one raw query-string value.
///
/// Serialization follows the document store's extended JSON conventions:
/// scalars serialize as plain JSON, datetimes as `{"$date": <rfc3339>}`,
/// and regexes as `{"$regex": <pattern>, "$options": <options>}`.
#[derive(Debug, Clone, PartialEq)]
pub enum MoqlValue {
    /// Null value (`null` / `none` literals)
    Null,
    /// Boolean value (`true` / `false` literals)
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Float(f64),
    /// String value (the inference fallback)
    String(String),
    /// Date or date-time; offset-less input is taken at UTC
    DateTime(DateTime<FixedOffset>),
    /// Ordered list of values (comma-separated raw input)
    List(Vec<MoqlValue>),
    /// Regex literal of the form `/pattern/options`
    Regex {
        /// The pattern between the slashes, passed through verbatim
        pattern: String,
        /// Trailing option flags, e.g. `i`
        options: String,
    },
}

impl MoqlValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Try to get as Boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as Integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as String
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as DateTime
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get as List
    pub fn as_list(&self) -> Option<&[MoqlValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for MoqlValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::DateTime(dt) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$date", &dt.to_rfc3339())?;
                map.end()
            }
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Regex { pattern, options } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("$regex", pattern)?;
                map.serialize_entry("$options", options)?;
                map.end()
            }
        }
    }
}

impl fmt::Display for MoqlValue {
    /// Renders the MoQL literal spelling of the value. Plain scalars
    /// round-trip through the casting engine; regex and list forms do not
    /// claim to.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => {
                if v.fract() == 0.0 {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
            Self::String(s) => write!(f, "{s}"),
            Self::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Regex { pattern, options } => write!(f, "/{pattern}/{options}"),
        }
    }
}

impl From<bool> for MoqlValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for MoqlValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for MoqlValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for MoqlValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for MoqlValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
