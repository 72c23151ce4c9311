//! The aggregate result of one MoQL compilation

use crate::{FilterSpec, ProjectionSpec, SortSpec};
use serde::Serialize;

/// The compiled query specification.
///
/// Serializes as a record with exactly five named fields: `filter`, `sort`
/// (null when absent), `skip`, `limit`, and `projection` (null when absent).
/// Built once per compilation and read-only afterward; the downstream store
/// layer is solely responsible for executing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MoqlQuery {
    /// Filter predicate
    pub filter: FilterSpec,
    /// Sort order, if any
    pub sort: Option<SortSpec>,
    /// Number of documents to skip
    pub skip: u64,
    /// Maximum number of documents to return (0 means no limit)
    pub limit: u64,
    /// Field projection, if any
    pub projection: Option<ProjectionSpec>,
}

impl MoqlQuery {
    /// Create the all-defaults query: empty filter, no sort, skip 0,
    /// limit 0, no projection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the query document as JSON
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_query_document() {
        assert_eq!(
            MoqlQuery::new().to_json(),
            json!({
                "filter": {},
                "sort": null,
                "skip": 0,
                "limit": 0,
                "projection": null,
            })
        );
    }

    #[test]
    fn test_populated_query_document() {
        let mut query = MoqlQuery::new();
        query.skip = 5;
        query.limit = 100;
        let mut projection = ProjectionSpec::new();
        projection.include("_id");
        query.projection = Some(projection);

        assert_eq!(
            query.to_json(),
            json!({
                "filter": {},
                "sort": null,
                "skip": 5,
                "limit": 100,
                "projection": {"_id": 1},
            })
        );
    }
}
