//! Skip and limit handlers for the reserved `skip` and `limit` keys

use moql_diagnostics::{MoqlError, Result};

/// Parse the value of a `skip=` token. Empty means 0; a negative integer
/// raises the skip error; anything non-numeric is a generic value error.
pub fn parse_skip(raw: &str) -> Result<u64> {
    match parse_count(raw)? {
        n if n < 0 => Err(MoqlError::skip(n)),
        n => Ok(n as u64),
    }
}

/// Parse the value of a `limit=` token. Same shape as [`parse_skip`] with a
/// distinct error kind for the negative case.
pub fn parse_limit(raw: &str) -> Result<u64> {
    match parse_count(raw)? {
        n if n < 0 => Err(MoqlError::limit(n)),
        n => Ok(n as u64),
    }
}

fn parse_count(raw: &str) -> Result<i64> {
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse()
        .map_err(|_| MoqlError::value("expected an integer", raw))
}
