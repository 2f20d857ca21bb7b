//! In-memory index of every credential in the store

use crate::matcher::IdentifierMatcher;
use crate::parser::IdentifierParser;
use crate::walker::StoreWalker;
use passdex_core::{Identifier, MatchSet, Result};
use std::path::Path;

/// All identifiers found in one walk of the store.
///
/// An index is a snapshot. It is never updated in place; callers build a
/// fresh one for each query so that external changes to the store are seen.
#[derive(Debug, Clone, Default)]
pub struct Index {
    identifiers: Vec<Identifier>,
}

impl Index {
    /// Walk `root` and parse every file, silently skipping non-credentials
    pub fn build(root: impl AsRef<Path>, suffix: &str) -> Result<Self> {
        let root = root.as_ref();
        let walker = StoreWalker::new(root);
        let parser = IdentifierParser::new(root, suffix);

        let files = walker.walk()?;
        let total = files.len();
        let identifiers: Vec<Identifier> =
            files.iter().filter_map(|path| parser.parse(path)).collect();

        tracing::debug!(
            files = total,
            credentials = identifiers.len(),
            "built store index"
        );

        Ok(Self { identifiers })
    }

    pub fn from_identifiers(identifiers: impl IntoIterator<Item = Identifier>) -> Self {
        Self {
            identifiers: identifiers.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.identifiers.iter()
    }

    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.identifiers.contains(identifier)
    }

    /// Every identifier, as a match set
    pub fn all(&self) -> MatchSet {
        self.identifiers.iter().cloned().collect()
    }

    /// The identifiers accepted by `matcher`
    pub fn select<M>(&self, matcher: &M) -> MatchSet
    where
        M: IdentifierMatcher + ?Sized,
    {
        let matches: MatchSet = self
            .identifiers
            .iter()
            .filter(|identifier| matcher.matches(identifier))
            .cloned()
            .collect();

        tracing::debug!(
            query = %matcher.query(),
            matched = matches.len(),
            candidates = self.identifiers.len(),
            "selected identifiers"
        );

        matches
    }
}
