//! Query results

use super::identifier::Identifier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The identifiers satisfying a query.
///
/// This is a set: equality ignores the order in which matches were found.
/// Iteration happens to be sorted by identifier, but callers should not
/// rely on any particular order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchSet(BTreeSet<Identifier>);

impl MatchSet {
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Add an identifier, returning false if it was already present
    pub fn insert(&mut self, identifier: Identifier) -> bool {
        self.0.insert(identifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.0.contains(identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.0.iter()
    }

    /// Rendered store-relative paths of every match
    #[must_use]
    pub fn rendered(&self) -> Vec<String> {
        self.0.iter().map(Identifier::rendered).collect()
    }

    /// The sole match, or `None` when the set is empty or ambiguous
    #[must_use]
    pub fn into_single(self) -> Option<Identifier> {
        if self.0.len() == 1 {
            self.0.into_iter().next()
        } else {
            None
        }
    }
}

impl FromIterator<Identifier> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Identifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MatchSet {
    type Item = Identifier;
    type IntoIter = std::collections::btree_set::IntoIter<Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Identifier;
    type IntoIter = std::collections::btree_set::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
