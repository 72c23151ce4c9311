//! Sort specification: ordered (field, direction) pairs

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Sort direction with the store's sentinel codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order, code `1`
    Ascending,
    /// Descending order, code `-1`
    Descending,
}

impl SortDirection {
    /// The direction code used by the store's sort contract
    pub const fn code(&self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// Ordered sequence of sort keys; insertion order is significant.
///
/// Serializes as a list of `[field, code]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    entries: Vec<(String, SortDirection)>,
}

impl SortSpec {
    /// Create an empty sort
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sort key
    pub fn push(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.entries.push((field.into(), direction));
    }

    /// True when no sort key has been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of sort keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The (field, direction) pairs in order of appearance
    pub fn entries(&self) -> &[(String, SortDirection)] {
        &self.entries
    }
}

impl Serialize for SortSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (field, direction) in &self.entries {
            seq.serialize_element(&(field, direction.code()))?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direction_codes() {
        assert_eq!(SortDirection::Ascending.code(), 1);
        assert_eq!(SortDirection::Descending.code(), -1);
    }

    #[test]
    fn test_order_preserved() {
        let mut spec = SortSpec::new();
        spec.push("_id", SortDirection::Ascending);
        spec.push("created_at", SortDirection::Descending);
        spec.push("price", SortDirection::Ascending);

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!([["_id", 1], ["created_at", -1], ["price", 1]])
        );
    }
}
