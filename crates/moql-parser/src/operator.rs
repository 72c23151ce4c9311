//! Operator tokenization: one token to (key, operator, raw value)

use moql_diagnostics::{MQL0001, MQL0002, MoqlError, Result};
use moql_query::{Operator, RawParameter};

/// Detect which operator applies to a token.
///
/// Multi-character operators are tested before their single-character
/// prefixes (`!=` before `!`, `<=` before `<`). A doubled `==` is not valid
/// equality and raises a filter-syntax error. A token with no operator
/// symbol at all is an exists check; a leading `!` is a not-exists check.
pub fn find_operator(token: &str) -> Result<Operator> {
    if token.contains("==") {
        return Err(MoqlError::filter(
            MQL0002,
            "equality is spelled '=', not '=='",
            token,
        ));
    }
    if token.contains("!=") {
        Ok(Operator::Ne)
    } else if token.contains("<=") {
        Ok(Operator::Lte)
    } else if token.contains(">=") {
        Ok(Operator::Gte)
    } else if token.contains('<') {
        Ok(Operator::Lt)
    } else if token.contains('>') {
        Ok(Operator::Gt)
    } else if token.contains('=') {
        Ok(Operator::Eq)
    } else if token.starts_with('!') {
        Ok(Operator::NotExists)
    } else {
        Ok(Operator::Exists)
    }
}

/// Split a token into its key, operator, and raw value.
///
/// For exists and not-exists checks the key is empty and the remainder of
/// the token is the value. Rejoining key, operator spelling, and value
/// always reconstructs the original token.
pub fn tokenize(token: &str) -> Result<RawParameter> {
    let operator = find_operator(token)?;
    match operator {
        Operator::Exists => Ok(RawParameter::new("", operator, token)),
        Operator::NotExists => Ok(RawParameter::new("", operator, &token[1..])),
        _ => {
            let (key, value) = token.split_once(operator.symbol()).ok_or_else(|| {
                MoqlError::filter(MQL0001, "could not split token at operator", token)
            })?;
            Ok(RawParameter::new(key, operator, value))
        }
    }
}
