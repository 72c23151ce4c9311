//! The MoQL orchestrator: routes tokens to clause handlers and assembles
//! the compiled query

use crate::cast::CasterRegistry;
use crate::extract::{extract_parameters, remove_blacklisted};
use crate::filter::apply_filter;
use crate::paging::{parse_limit, parse_skip};
use crate::projection::parse_projection;
use crate::sort::parse_sort;
use crate::text::apply_text_search;
use moql_diagnostics::Result;
use moql_query::MoqlQuery;
use std::collections::HashSet;

/// The MoQL compiler.
///
/// Holds the optional blacklist and the caster registry; both are fixed at
/// construction. Compilation itself is pure and synchronous, so one
/// compiler can serve many concurrent callers.
///
/// ```
/// use moql_parser::Compiler;
///
/// let compiler = Compiler::new().with_blacklist(["api_key"]);
/// let query = compiler.compile("score>525&sort=-created_at&limit=10")?;
/// assert_eq!(query.limit, 10);
/// # Ok::<(), moql_diagnostics::MoqlError>(())
/// ```
#[derive(Clone, Default)]
pub struct Compiler {
    blacklist: Option<HashSet<String>>,
    casters: CasterRegistry,
}

impl Compiler {
    /// Create a compiler with no blacklist and the default casters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parameter keys to exclude before any parsing begins
    pub fn with_blacklist<I, S>(mut self, blacklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blacklist = Some(blacklist.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the caster registry
    pub fn with_casters(mut self, casters: CasterRegistry) -> Self {
        self.casters = casters;
        self
    }

    /// The post-extraction, pre-cast token list, for callers that need to
    /// audit what was parsed before any type inference occurred
    pub fn raw_parameters(&self, query: &str) -> Vec<String> {
        remove_blacklisted(extract_parameters(query), self.blacklist.as_ref())
    }

    /// Compile a MoQL query string.
    ///
    /// Each surviving token is routed by its reserved key (`fields`,
    /// `sort`, `skip`, `limit`, `$text`) or treated as a filter token. An
    /// empty input compiles to the all-defaults query. Compilation fails
    /// atomically on the first malformed construct.
    pub fn compile(&self, query: &str) -> Result<MoqlQuery> {
        let mut compiled = MoqlQuery::new();
        for token in self.raw_parameters(query) {
            if let Some(raw) = token.strip_prefix("fields=") {
                compiled.projection = parse_projection(raw)?;
            } else if let Some(raw) = token.strip_prefix("sort=") {
                compiled.sort = parse_sort(raw);
            } else if let Some(raw) = token.strip_prefix("skip=") {
                compiled.skip = parse_skip(raw)?;
            } else if let Some(raw) = token.strip_prefix("limit=") {
                compiled.limit = parse_limit(raw)?;
            } else if let Some(raw) = token.strip_prefix("$text=") {
                apply_text_search(&mut compiled.filter, raw)?;
            } else {
                apply_filter(&mut compiled.filter, &token, &self.casters)?;
            }
        }
        Ok(compiled)
    }
}

/// Compile with the default compiler: no blacklist, default casters
pub fn compile(query: &str) -> Result<MoqlQuery> {
    Compiler::new().compile(query)
}
