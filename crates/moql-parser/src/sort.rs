//! Sort handler for the reserved `sort` key

use moql_query::{SortDirection, SortSpec};

/// Parse the value of a `sort=` token.
///
/// Comma-separated field names, bare or `+`-prefixed for ascending,
/// `-`-prefixed for descending; output order matches input order. Empty
/// value means no sort. There is no dedicated error kind here: empty field
/// tokens are skipped, anything else is taken verbatim as a field name.
pub fn parse_sort(raw: &str) -> Option<SortSpec> {
    if raw.is_empty() {
        return None;
    }
    let mut spec = SortSpec::new();
    for field in raw.split(',') {
        if field.is_empty() {
            continue;
        }
        if let Some(name) = field.strip_prefix('-') {
            spec.push(name, SortDirection::Descending);
        } else if let Some(name) = field.strip_prefix('+') {
            spec.push(name, SortDirection::Ascending);
        } else {
            spec.push(field, SortDirection::Ascending);
        }
    }
    if spec.is_empty() { None } else { Some(spec) }
}
