//! Full-text search handler for the reserved `$text` key

use moql_diagnostics::{MoqlError, Result};
use moql_query::FilterSpec;

/// Merge a `$text=` token into the filter as `{"$text": {"$search": term}}`.
///
/// An empty search term would match everything, so it fails instead.
pub fn apply_text_search(filter: &mut FilterSpec, raw: &str) -> Result<()> {
    if raw.is_empty() {
        return Err(MoqlError::text("empty full-text search term"));
    }
    filter.set_text_search(raw);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_search_fragment() {
        let mut filter = FilterSpec::new();
        apply_text_search(&mut filter, "this is a full text search").unwrap();
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"$text": {"$search": "this is a full text search"}})
        );
    }

    #[test]
    fn test_empty_term_is_rejected() {
        let mut filter = FilterSpec::new();
        let err = apply_text_search(&mut filter, "").unwrap_err();
        assert!(matches!(err, MoqlError::Text { .. }));
    }
}
