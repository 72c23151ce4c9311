//! Projection specification: field inclusion/exclusion and embedded
//! sub-document projections

use indexmap::IndexMap;
use serde::Serialize;
use serde::ser::Serializer;

/// The projection applied to one field
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionValue {
    /// Include the field (`1`)
    Include,
    /// Exclude the field (`0`)
    Exclude,
    /// An embedded JSON projection, passed through verbatim
    /// (element-match-style sub-document projections)
    Document(serde_json::Value),
}

impl Serialize for ProjectionValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Include => serializer.serialize_i32(1),
            Self::Exclude => serializer.serialize_i32(0),
            Self::Document(value) => value.serialize(serializer),
        }
    }
}

/// Mapping from field name (dotted paths allowed) to projection value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectionSpec {
    fields: IndexMap<String, ProjectionValue>,
}

impl ProjectionSpec {
    /// Create an empty projection
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has been projected
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of projected fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Include a field
    pub fn include(&mut self, field: impl Into<String>) {
        self.fields.insert(field.into(), ProjectionValue::Include);
    }

    /// Exclude a field
    pub fn exclude(&mut self, field: impl Into<String>) {
        self.fields.insert(field.into(), ProjectionValue::Exclude);
    }

    /// Attach an embedded projection document to a field
    pub fn document(&mut self, field: impl Into<String>, value: serde_json::Value) {
        self.fields
            .insert(field.into(), ProjectionValue::Document(value));
    }

    /// Get the projection for a field
    pub fn get(&self, field: &str) -> Option<&ProjectionValue> {
        self.fields.get(field)
    }

    /// True when at least one plain field is included. JSON-valued fields
    /// do not count toward the inclusion/exclusion exclusivity check.
    pub fn has_inclusions(&self) -> bool {
        self.fields
            .values()
            .any(|v| matches!(v, ProjectionValue::Include))
    }

    /// True when at least one plain field is excluded
    pub fn has_exclusions(&self) -> bool {
        self.fields
            .values()
            .any(|v| matches!(v, ProjectionValue::Exclude))
    }
}
