//! Structured per-segment filters

use crate::constants::IDENTIFIER_SEPARATOR;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A structured query: one pattern per hierarchical level, then one for the username.
///
/// A filter with `k` patterns only ever matches identifiers with exactly `k - 1`
/// segments. Patterns are regular-expression fragments matched as substrings.
/// Compiling them is left to the matcher; this type only carries the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Filter {
    patterns: Vec<String>,
}

impl Filter {
    /// Create a filter; at least the username pattern is required
    pub fn new<S>(patterns: impl IntoIterator<Item = S>) -> Result<Self>
    where
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        if patterns.is_empty() {
            return Err(Error::invalid_filter_shape(
                "",
                "a filter needs at least a username pattern",
            ));
        }
        Ok(Self { patterns })
    }

    /// All patterns, the username pattern last
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Patterns for the hierarchical segments
    pub fn segment_patterns(&self) -> &[String] {
        &self.patterns[..self.arity()]
    }

    pub fn username_pattern(&self) -> &str {
        &self.patterns[self.arity()]
    }

    /// Number of hierarchical segments a matching identifier must have
    pub fn arity(&self) -> usize {
        self.patterns.len() - 1
    }
}

impl TryFrom<Vec<String>> for Filter {
    type Error = Error;

    fn try_from(patterns: Vec<String>) -> Result<Self> {
        Self::new(patterns)
    }
}

impl From<Filter> for Vec<String> {
    fn from(filter: Filter) -> Self {
        filter.patterns
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.patterns.join(&IDENTIFIER_SEPARATOR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_excludes_username_pattern() {
        let filter = Filter::new(["work", "alic.*"]).unwrap();
        assert_eq!(filter.arity(), 1);
        assert_eq!(filter.segment_patterns(), ["work"]);
        assert_eq!(filter.username_pattern(), "alic.*");
    }

    #[test]
    fn test_single_pattern_matches_root_level() {
        let filter = Filter::new(["alice"]).unwrap();
        assert_eq!(filter.arity(), 0);
        assert!(filter.segment_patterns().is_empty());
    }

    #[test]
    fn test_empty_filter_is_invalid() {
        let err = Filter::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidFilter { source: None, .. }));
    }

    #[test]
    fn test_serde_as_plain_list() {
        let filter = Filter::new(["email", "bob"]).unwrap();
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"["email","bob"]"#);
        assert!(serde_json::from_str::<Filter>("[]").is_err());
    }
}
