//! Filter/range handler: folds non-reserved tokens into the filter spec

use crate::cast::{CasterRegistry, custom_cast, default_cast};
use crate::operator::tokenize;
use moql_diagnostics::{MoqlError, Result};
use moql_query::{ComparisonOp, FilterSpec, MoqlValue, Operator, RawParameter};

/// Tokenize one non-reserved token, cast its value, and fold the result
/// into the filter.
///
/// Equality sets the field directly; exists/not-exists set `$exists` on the
/// field named by the value; comparison operators accumulate into the
/// per-field operator map, so repeated clauses on one field collapse into a
/// single range. List values combined with a range operator are rejected,
/// since ranges over multi-valued sets are not well-defined.
pub fn apply_filter(filter: &mut FilterSpec, token: &str, casters: &CasterRegistry) -> Result<()> {
    let param = tokenize(token)?;
    match param.operator {
        Operator::Exists => {
            filter.set_comparison(&param.value, ComparisonOp::Exists, MoqlValue::Boolean(true))
        }
        Operator::NotExists => {
            filter.set_comparison(&param.value, ComparisonOp::Exists, MoqlValue::Boolean(false))
        }
        Operator::Eq => {
            let value = cast_value(&param, casters)?;
            filter.set_value(&param.key, value)
        }
        Operator::Ne => {
            // Lists are fine under negation: `tags!=a,b` excludes the set
            let value = cast_value(&param, casters)?;
            filter.set_comparison(&param.key, ComparisonOp::Ne, value)
        }
        Operator::Lt => fold_range(filter, &param, ComparisonOp::Lt, casters),
        Operator::Lte => fold_range(filter, &param, ComparisonOp::Lte, casters),
        Operator::Gt => fold_range(filter, &param, ComparisonOp::Gt, casters),
        Operator::Gte => fold_range(filter, &param, ComparisonOp::Gte, casters),
    }
}

fn fold_range(
    filter: &mut FilterSpec,
    param: &RawParameter,
    op: ComparisonOp,
    casters: &CasterRegistry,
) -> Result<()> {
    let value = cast_value(param, casters)?;
    if value.is_list() {
        return Err(MoqlError::list_operator(&param.key));
    }
    filter.set_comparison(&param.key, op, value)
}

/// Custom-cast call syntax takes precedence; otherwise infer the type
fn cast_value(param: &RawParameter, casters: &CasterRegistry) -> Result<MoqlValue> {
    match custom_cast(&param.value, casters)? {
        Some(value) => Ok(value),
        None => Ok(default_cast(&param.value)),
    }
}
