//! Type casting engine: raw string values to typed values
//!
//! `default_cast` infers a type from the raw string; `custom_cast`
//! recognizes a `name(payload)` call syntax and dispatches to a registered
//! caster. The registry is constructed once, before first use, and shared
//! read-only across concurrent compilations.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use moql_diagnostics::{MoqlError, Result};
use moql_query::MoqlValue;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

static CAST_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\((.*)\)$").unwrap());
static REGEX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(.*)/([a-z]*)$").unwrap());
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+$").unwrap());
static FLOAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+\.\d+$").unwrap());

/// A named casting function. Failures carry a message only; `custom_cast`
/// wraps them into a custom-caster error with the caster name and payload.
pub type CasterFn = Arc<dyn Fn(&str) -> std::result::Result<MoqlValue, String> + Send + Sync>;

/// Immutable mapping from caster name to casting function.
///
/// Seeded with the default casters (`list`, `object_id`, `object_id_ts`,
/// `ts`, `str`) and extensible through [`CasterRegistry::register`] at
/// construction time. Shared read-only afterward; no registration happens
/// after a compiler starts using the registry.
#[derive(Clone)]
pub struct CasterRegistry {
    casters: HashMap<String, CasterFn>,
}

impl CasterRegistry {
    /// Create a registry with no casters at all
    pub fn empty() -> Self {
        Self {
            casters: HashMap::new(),
        }
    }

    /// Create a registry seeded with the default casters
    pub fn with_defaults() -> Self {
        Self::empty()
            .register("list", |payload| {
                Ok(MoqlValue::List(
                    payload.split(',').map(MoqlValue::from).collect(),
                ))
            })
            .register("object_id", |payload| {
                parse_object_id(payload).map(|id| MoqlValue::String(id.to_string()))
            })
            .register("object_id_ts", |payload| {
                let id = parse_object_id(payload)?;
                object_id_timestamp(id).map(MoqlValue::DateTime)
            })
            .register("ts", |payload| {
                let seconds: i64 = payload
                    .parse()
                    .map_err(|_| format!("`{payload}` is not a valid epoch timestamp"))?;
                DateTime::from_timestamp(seconds, 0)
                    .map(|dt| MoqlValue::DateTime(dt.fixed_offset()))
                    .ok_or_else(|| format!("epoch timestamp {seconds} is out of range"))
            })
            .register("str", |payload| Ok(MoqlValue::from(payload)))
    }

    /// Add a caster under a name, replacing any existing one
    pub fn register<F>(mut self, name: impl Into<String>, caster: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<MoqlValue, String> + Send + Sync + 'static,
    {
        self.casters.insert(name.into(), Arc::new(caster));
        self
    }

    /// Look up a caster by name
    pub fn get(&self, name: &str) -> Option<&CasterFn> {
        self.casters.get(name)
    }

    /// Check whether a caster is registered
    pub fn contains(&self, name: &str) -> bool {
        self.casters.contains_key(name)
    }

    /// Number of registered casters
    pub fn len(&self) -> usize {
        self.casters.len()
    }

    /// True when no caster is registered
    pub fn is_empty(&self) -> bool {
        self.casters.is_empty()
    }
}

impl Default for CasterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn parse_object_id(payload: &str) -> std::result::Result<&str, String> {
    if payload.len() == 24 && payload.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(payload)
    } else {
        Err(format!("`{payload}` is not a 24-character hex object id"))
    }
}

/// The creation timestamp embedded in the leading 8 hex characters of an
/// object id (big-endian epoch seconds).
fn object_id_timestamp(id: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
    let seconds = u32::from_str_radix(&id[..8], 16)
        .map_err(|_| format!("`{id}` has no decodable timestamp"))?;
    DateTime::from_timestamp(i64::from(seconds), 0)
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| format!("object id timestamp {seconds} is out of range"))
}

/// Dispatch a `name(payload)` call to a registered caster.
///
/// Returns `Ok(None)` when the value does not use the call syntax or the
/// name has no registered caster, so the caller falls back to
/// [`default_cast`]. A failure inside the caster is a custom-caster error.
pub fn custom_cast(raw: &str, casters: &CasterRegistry) -> Result<Option<MoqlValue>> {
    let Some(caps) = CAST_CALL.captures(raw) else {
        return Ok(None);
    };
    let name = &caps[1];
    let payload = &caps[2];
    match casters.get(name) {
        None => Ok(None),
        Some(caster) => caster(payload)
            .map(Some)
            .map_err(|message| MoqlError::custom_caster(name, payload, message)),
    }
}

/// Infer a typed value from a raw string, first match wins:
/// boolean, null, regex literal, integer, float, date/time, list, string.
pub fn default_cast(raw: &str) -> MoqlValue {
    match raw {
        "true" => return MoqlValue::Boolean(true),
        "false" => return MoqlValue::Boolean(false),
        "null" | "none" => return MoqlValue::Null,
        _ => {}
    }
    if let Some(caps) = REGEX_LITERAL.captures(raw) {
        return MoqlValue::Regex {
            pattern: caps[1].to_string(),
            options: caps[2].to_string(),
        };
    }
    if INTEGER.is_match(raw) {
        if let Ok(value) = raw.parse::<i64>() {
            return MoqlValue::Integer(value);
        }
    }
    if FLOAT.is_match(raw) {
        if let Ok(value) = raw.parse::<f64>() {
            return MoqlValue::Float(value);
        }
    }
    if let Some(dt) = parse_datetime(raw) {
        return MoqlValue::DateTime(dt);
    }
    if raw.contains(',') {
        // Deliberately shallow: list elements stay plain strings, since
        // list context is used for membership filters
        return MoqlValue::List(raw.split(',').map(MoqlValue::from).collect());
    }
    MoqlValue::from(raw)
}

/// The fixed set of accepted date/time formats: date-only,
/// space-separated date-time, ISO-8601 `T` date-time (each with optional
/// fraction), then full ISO-8601 with offset. Offset-less input is taken
/// at UTC.
fn parse_datetime(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc().fixed_offset());
        }
    }
    DateTime::parse_from_rfc3339(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_cast_booleans_case_sensitive() {
        assert_eq!(default_cast("true"), MoqlValue::Boolean(true));
        assert_eq!(default_cast("false"), MoqlValue::Boolean(false));
        assert_eq!(default_cast("True"), MoqlValue::from("True"));
    }

    #[test]
    fn test_cast_null_literals() {
        assert_eq!(default_cast("null"), MoqlValue::Null);
        assert_eq!(default_cast("none"), MoqlValue::Null);
    }

    #[test]
    fn test_cast_regex_literal() {
        assert_eq!(
            default_cast(r"/@ibm\.com$/i"),
            MoqlValue::Regex {
                pattern: r"@ibm\.com$".to_string(),
                options: "i".to_string(),
            }
        );
    }

    #[rstest]
    #[case("10", MoqlValue::Integer(10))]
    #[case("-42", MoqlValue::Integer(-42))]
    #[case("10.45", MoqlValue::Float(10.45))]
    #[case("value", MoqlValue::from("value"))]
    fn test_cast_scalars(#[case] raw: &str, #[case] expected: MoqlValue) {
        assert_eq!(default_cast(raw), expected);
    }

    #[test]
    fn test_cast_date_only() {
        let dt = default_cast("2023-01-10");
        assert_eq!(
            dt.as_datetime().unwrap().to_rfc3339(),
            "2023-01-10T00:00:00+00:00"
        );
    }

    #[test]
    fn test_cast_space_separated_datetime() {
        let dt = default_cast("2023-01-10 23:30:20");
        assert_eq!(
            dt.as_datetime().unwrap().to_rfc3339(),
            "2023-01-10T23:30:20+00:00"
        );
    }

    #[test]
    fn test_cast_iso_datetime_with_offset() {
        let dt = default_cast("2016-01-01T00:00:00.000000+00:00");
        assert_eq!(
            dt.as_datetime().unwrap().to_rfc3339(),
            "2016-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_cast_list_is_shallow() {
        assert_eq!(
            default_cast("crc,usd"),
            MoqlValue::List(vec![MoqlValue::from("crc"), MoqlValue::from("usd")])
        );
        // Elements are not re-inferred, even when they look numeric
        assert_eq!(
            default_cast("1,2"),
            MoqlValue::List(vec![MoqlValue::from("1"), MoqlValue::from("2")])
        );
    }

    #[test]
    fn test_scalar_round_trip_through_display() {
        for raw in ["10", "-42", "10.45", "true", "false", "null"] {
            let value = default_cast(raw);
            assert_eq!(default_cast(&value.to_string()), value, "raw: {raw}");
        }
    }

    #[test]
    fn test_custom_cast_dispatches() {
        let casters = CasterRegistry::empty().register("str", |p| Ok(MoqlValue::from(p)));
        let value = custom_cast("str(1.44)", &casters).unwrap();
        assert_eq!(value, Some(MoqlValue::from("1.44")));
    }

    #[test]
    fn test_custom_cast_no_call_syntax() {
        let casters = CasterRegistry::with_defaults();
        assert_eq!(custom_cast("1.44", &casters).unwrap(), None);
    }

    #[test]
    fn test_custom_cast_unregistered_name() {
        let casters = CasterRegistry::empty();
        assert_eq!(custom_cast("str(1.44)", &casters).unwrap(), None);
    }

    #[test]
    fn test_custom_cast_failure_carries_context() {
        let casters = CasterRegistry::with_defaults();
        let err = custom_cast("ts(xyz)", &casters).unwrap_err();
        match err {
            MoqlError::CustomCaster {
                caster, payload, ..
            } => {
                assert_eq!(caster, "ts");
                assert_eq!(payload, "xyz");
            }
            other => panic!("expected CustomCaster error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_object_id_caster() {
        let casters = CasterRegistry::with_defaults();
        let id = "507f1f77bcf86cd799439011";
        assert_eq!(
            custom_cast(&format!("object_id({id})"), &casters).unwrap(),
            Some(MoqlValue::from(id))
        );
        assert!(custom_cast("object_id(nope)", &casters).is_err());
    }

    #[test]
    fn test_default_object_id_ts_caster() {
        let casters = CasterRegistry::with_defaults();
        // 0x507f1f77 = 1350508407 = 2012-10-17T21:13:27Z
        let value = custom_cast("object_id_ts(507f1f77bcf86cd799439011)", &casters)
            .unwrap()
            .unwrap();
        assert_eq!(
            value.as_datetime().unwrap().to_rfc3339(),
            "2012-10-17T21:13:27+00:00"
        );
    }

    #[test]
    fn test_default_ts_caster() {
        let casters = CasterRegistry::with_defaults();
        let value = custom_cast("ts(1350508407)", &casters).unwrap().unwrap();
        assert_eq!(
            value.as_datetime().unwrap().to_rfc3339(),
            "2012-10-17T21:13:27+00:00"
        );
    }

    #[test]
    fn test_default_list_caster() {
        let casters = CasterRegistry::with_defaults();
        assert_eq!(
            custom_cast("list(a,b)", &casters).unwrap(),
            Some(MoqlValue::List(vec![
                MoqlValue::from("a"),
                MoqlValue::from("b")
            ]))
        );
    }
}
