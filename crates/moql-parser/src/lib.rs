//! MoQL query-string compiler
//!
//! Compiles the MoQL mini-language (`score>525&sort=-created_at&limit=10`)
//! into a [`moql_query::MoqlQuery`]. The compiler is a pure, synchronous,
//! single-pass function over the input string: parameters are extracted and
//! blacklisted, each token is routed to the clause handler owning its
//! reserved key (`fields`, `sort`, `skip`, `limit`, `$text`) or to the
//! general filter handler, and values are typed by the casting engine.

mod cast;
mod compile;
mod extract;
mod filter;
mod operator;
mod paging;
mod projection;
mod sort;
mod text;

pub use cast::{CasterFn, CasterRegistry, custom_cast, default_cast};
pub use compile::{Compiler, compile};
pub use extract::{extract_parameters, remove_blacklisted};
pub use filter::apply_filter;
pub use operator::{find_operator, tokenize};
pub use paging::{parse_limit, parse_skip};
pub use projection::parse_projection;
pub use sort::parse_sort;
pub use text::apply_text_search;
