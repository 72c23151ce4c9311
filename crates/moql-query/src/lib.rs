//! MoQL query specification data model
//!
//! This crate defines the output of a MoQL compilation: typed values, the
//! filter/sort/projection specifications, and the aggregate [`MoqlQuery`].
//! All values are built once during a single compilation pass and are
//! read-only afterward.

mod filter;
mod operator;
mod projection;
mod query;
mod sort;
mod value;

pub use filter::*;
pub use operator::*;
pub use projection::*;
pub use query::*;
pub use sort::*;
pub use value::*;
