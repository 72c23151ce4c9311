//! Filter specification: field name to equality value or operator map
//!
//! Repeated comparison clauses on one field collapse into a single operator
//! map, which is how `score>525&score<600` becomes one two-bound range.

use crate::{ComparisonOp, MoqlValue};
use indexmap::IndexMap;
use moql_diagnostics::{MQL0106, MoqlError, Result};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// The parsed variant held by one filter field
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Equality: the field matches this value directly
    Value(MoqlValue),
    /// Range/negation/existence: comparison key to value
    Operators(IndexMap<ComparisonOp, MoqlValue>),
    /// Full-text search fragment, serialized `{"$search": term}`
    TextSearch(String),
}

impl Serialize for FilterValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Operators(ops) => {
                let mut map = serializer.serialize_map(Some(ops.len()))?;
                for (op, value) in ops {
                    map.serialize_entry(op.key(), value)?;
                }
                map.end()
            }
            Self::TextSearch(term) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$search", term)?;
                map.end()
            }
        }
    }
}

/// Mapping from field name to filter clause, insertion-ordered
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterSpec {
    fields: IndexMap<String, FilterValue>,
}

impl FilterSpec {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no clause has been added
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of filtered fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Get the clause for a field
    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.fields.get(field)
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.fields.iter()
    }

    /// Set an equality clause. A repeated equality on the same field
    /// replaces the previous value; an equality on a field that already
    /// carries comparison clauses is ambiguous and rejected.
    pub fn set_value(&mut self, field: impl Into<String>, value: MoqlValue) -> Result<()> {
        let field = field.into();
        if matches!(self.fields.get(&field), Some(FilterValue::Operators(_))) {
            return Err(MoqlError::filter(
                MQL0106,
                "equality clause conflicts with existing range clause",
                field,
            ));
        }
        self.fields.insert(field, FilterValue::Value(value));
        Ok(())
    }

    /// Fold a comparison clause into the field's operator map, creating the
    /// map on first use. Rejects fields already bound by an equality clause.
    pub fn set_comparison(
        &mut self,
        field: impl Into<String>,
        op: ComparisonOp,
        value: MoqlValue,
    ) -> Result<()> {
        let field = field.into();
        match self.fields.get_mut(&field) {
            Some(FilterValue::Operators(ops)) => {
                ops.insert(op, value);
                Ok(())
            }
            Some(_) => Err(MoqlError::filter(
                MQL0106,
                "range clause conflicts with existing equality clause",
                field,
            )),
            None => {
                let mut ops = IndexMap::new();
                ops.insert(op, value);
                self.fields.insert(field, FilterValue::Operators(ops));
                Ok(())
            }
        }
    }

    /// Set the full-text search fragment under the `$text` field
    pub fn set_text_search(&mut self, term: impl Into<String>) {
        self.fields
            .insert("$text".to_string(), FilterValue::TextSearch(term.into()));
    }
}
