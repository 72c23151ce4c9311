//! Projection handler for the reserved `fields` key

use moql_diagnostics::{MQL0101, MQL0102, MoqlError, Result};
use moql_query::ProjectionSpec;

/// Parse the value of a `fields=` token into a projection.
///
/// The value is split on top-level commas only: a depth counter tracks
/// braces and brackets so commas inside an embedded JSON object never split
/// the list. Bare names include, `-`-prefixed names exclude, and `{...}`
/// tokens merge their parsed JSON object into the projection verbatim
/// (element-match-style sub-document projections).
///
/// Plain inclusion and exclusion fields cannot mix; JSON-valued fields are
/// exempt from that check.
pub fn parse_projection(raw: &str) -> Result<Option<ProjectionSpec>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut spec = ProjectionSpec::new();
    for field in split_top_level(raw) {
        if field.is_empty() {
            continue;
        }
        if field.starts_with(['{', '[']) {
            let value: serde_json::Value = serde_json::from_str(&field).map_err(|e| {
                MoqlError::projection(MQL0101, format!("invalid JSON in projection field: {e}"))
            })?;
            let serde_json::Value::Object(entries) = value else {
                return Err(MoqlError::projection(
                    MQL0101,
                    "JSON projection field must be an object",
                ));
            };
            for (name, nested) in entries {
                spec.document(name, nested);
            }
        } else if let Some(name) = field.strip_prefix('-') {
            spec.exclude(name);
        } else {
            spec.include(field);
        }
    }
    if spec.has_inclusions() && spec.has_exclusions() {
        return Err(MoqlError::projection(
            MQL0102,
            "projection cannot mix inclusion and exclusion fields",
        ));
    }
    if spec.is_empty() {
        return Ok(None);
    }
    Ok(Some(spec))
}

/// Split on commas at nesting depth zero
fn split_top_level(raw: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for ch in raw.chars() {
        match ch {
            '{' | '[' => {
                depth += 1;
                current.push(ch);
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => parts.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn projection_json(raw: &str) -> serde_json::Value {
        serde_json::to_value(parse_projection(raw).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_value_means_no_projection() {
        assert!(parse_projection("").unwrap().is_none());
    }

    #[test]
    fn test_inclusions() {
        assert_eq!(
            projection_json("_id,score,status"),
            json!({"_id": 1, "score": 1, "status": 1})
        );
    }

    #[test]
    fn test_exclusions() {
        assert_eq!(
            projection_json("-_id,-score"),
            json!({"_id": 0, "score": 0})
        );
    }

    #[test]
    fn test_dotted_paths() {
        assert_eq!(projection_json("settings.group"), json!({"settings.group": 1}));
    }

    #[test]
    fn test_embedded_json_survives_commas() {
        assert_eq!(
            projection_json(
                r#"{"vulnerabilities": {"$elemMatch":{"score": {"$gt": 5}}}},last_seen,due_date"#
            ),
            json!({
                "vulnerabilities": {"$elemMatch": {"score": {"$gt": 5}}},
                "last_seen": 1,
                "due_date": 1,
            })
        );
    }

    #[test]
    fn test_invalid_json_is_a_projection_error() {
        let err = parse_projection(r#"{'single': 'quotes'},created"#).unwrap_err();
        assert!(matches!(err, MoqlError::Projection { .. }));
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        assert!(parse_projection("[1,2]").is_err());
    }

    #[test]
    fn test_mixed_inclusion_exclusion_is_rejected() {
        let err = parse_projection("_id,-score").unwrap_err();
        assert!(matches!(err, MoqlError::Projection { .. }));
    }

    #[test]
    fn test_split_top_level_tracks_depth() {
        assert_eq!(
            split_top_level(r#"{"a":{"b":[1,2]}},c"#),
            vec![r#"{"a":{"b":[1,2]}}"#.to_string(), "c".to_string()]
        );
    }
}
