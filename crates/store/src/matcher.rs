//! Filter evaluation against identifiers
//!
//! Two query modes exist. [`CompiledFilter`] matches one pattern per
//! hierarchical segment plus one for the username, and requires the
//! identifier to have exactly as many segments as the filter expects.
//! [`PathPattern`] matches a single pattern against the whole rendered path.
//!
//! In both modes a pattern matches when the value *contains* a match,
//! i.e. patterns are not anchored. A value that is absent never matches.

use passdex_core::{Error, Filter, Identifier, Result};
use regex::Regex;

/// Anything that can decide whether an identifier belongs to a result set
pub trait IdentifierMatcher {
    fn matches(&self, identifier: &Identifier) -> bool;

    /// Human-readable form of the query, used in errors and logs
    fn query(&self) -> String;
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::invalid_filter(pattern, e))
}

fn pattern_matches(regex: &Regex, value: Option<&str>) -> bool {
    value.is_some_and(|v| regex.is_match(v))
}

/// A structured [`Filter`] with every pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    filter: Filter,
    segments: Vec<Regex>,
    username: Regex,
}

impl CompiledFilter {
    /// Compile every pattern; the first malformed one fails the whole filter
    pub fn compile(filter: &Filter) -> Result<Self> {
        let segments = filter
            .segment_patterns()
            .iter()
            .map(|p| compile(p))
            .collect::<Result<Vec<_>>>()?;
        let username = compile(filter.username_pattern())?;

        Ok(Self {
            filter: filter.clone(),
            segments,
            username,
        })
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

impl IdentifierMatcher for CompiledFilter {
    fn matches(&self, identifier: &Identifier) -> bool {
        if identifier.depth() != self.segments.len() {
            return false;
        }

        self.segments
            .iter()
            .enumerate()
            .all(|(i, regex)| pattern_matches(regex, identifier.segment(i)))
            && pattern_matches(&self.username, Some(identifier.username()))
    }

    fn query(&self) -> String {
        self.filter.to_string()
    }
}

/// One pattern matched against the full rendered path, e.g. `work/alice`
#[derive(Debug, Clone)]
pub struct PathPattern {
    pattern: String,
    regex: Regex,
}

impl PathPattern {
    pub fn compile(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: pattern.to_string(),
            regex: compile(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl IdentifierMatcher for PathPattern {
    fn matches(&self, identifier: &Identifier) -> bool {
        self.regex.is_match(&identifier.rendered())
    }

    fn query(&self) -> String {
        self.pattern.clone()
    }
}
