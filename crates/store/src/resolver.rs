//! Resolution of a query to exactly one credential and its secret

use crate::index::Index;
use crate::matcher::{CompiledFilter, IdentifierMatcher};
use crate::reveal::SecretRevealer;
use passdex_core::{Credential, Error, Filter, Identifier, MatchSet, Result};

/// Resolves a query to a single credential, then asks the revealer for its secret.
///
/// The resolver never guesses: zero matches is `NotFound`, more than one is
/// `AmbiguousQuery`, and in both cases the revealer is not called.
pub struct Resolver {
    revealer: Box<dyn SecretRevealer>,
    require_segments: bool,
}

impl Resolver {
    pub fn new(revealer: Box<dyn SecretRevealer>) -> Self {
        Self {
            revealer,
            require_segments: false,
        }
    }

    /// Reject credentials stored directly under the root with `MalformedIdentifier`
    #[must_use]
    pub fn with_require_segments(mut self, require_segments: bool) -> Self {
        self.require_segments = require_segments;
        self
    }

    /// Resolve a structured filter against `index`
    pub fn resolve(&self, index: &Index, filter: &Filter) -> Result<Credential> {
        let compiled = CompiledFilter::compile(filter)?;
        self.resolve_with(index, &compiled)
    }

    /// Resolve any matcher against `index`
    pub fn resolve_with<M>(&self, index: &Index, matcher: &M) -> Result<Credential>
    where
        M: IdentifierMatcher + ?Sized,
    {
        let matches = index.select(matcher);
        let identifier = self.single(matcher.query(), matches)?;
        let secret = self.revealer.reveal(&identifier)?;
        Ok(Credential::new(identifier, secret))
    }

    fn single(&self, query: String, matches: MatchSet) -> Result<Identifier> {
        match matches.len() {
            0 => Err(Error::not_found(query)),
            1 => {
                let identifier = matches
                    .into_single()
                    .ok_or_else(|| Error::not_found(query))?;
                if self.require_segments && identifier.segments().is_empty() {
                    return Err(Error::malformed_identifier(
                        identifier.rendered(),
                        "credential is not inside any folder",
                    ));
                }
                Ok(identifier)
            }
            _ => Err(Error::ambiguous(query, matches.rendered())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passdex_core::Secret;
    use std::sync::{Arc, Mutex};

    /// Records every reveal request and answers from a fixed value
    struct RecordingRevealer {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl SecretRevealer for RecordingRevealer {
        fn reveal(&self, identifier: &Identifier) -> Result<Secret> {
            let path = identifier.rendered();
            self.calls.lock().unwrap().push(path.clone());
            Ok(Secret::new(format!("secret-for-{path}")))
        }
    }

    fn resolver() -> (Resolver, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let revealer = RecordingRevealer {
            calls: Arc::clone(&calls),
        };
        (Resolver::new(Box::new(revealer)), calls)
    }

    fn index(paths: &[&str]) -> Index {
        Index::from_identifiers(paths.iter().map(|p| Identifier::from_rendered(p).unwrap()))
    }

    #[test]
    fn test_unique_match_is_revealed() {
        let (resolver, calls) = resolver();
        let idx = index(&["email/alice", "email/bob", "work/alice"]);

        let credential = resolver
            .resolve(&idx, &Filter::new(["email", "alice"]).unwrap())
            .unwrap();

        assert_eq!(credential.identifier.rendered(), "email/alice");
        assert_eq!(credential.secret.expose(), "secret-for-email/alice");
        assert_eq!(*calls.lock().unwrap(), vec!["email/alice".to_string()]);
    }

    #[test]
    fn test_ambiguous_match_reveals_nothing() {
        let (resolver, calls) = resolver();
        let idx = index(&["work/alice", "work/alicia"]);

        let err = resolver
            .resolve(&idx, &Filter::new(["work", "alic"]).unwrap())
            .unwrap_err();

        match err {
            Error::AmbiguousQuery { mut candidates, .. } => {
                candidates.sort();
                assert_eq!(candidates, vec!["work/alice", "work/alicia"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_no_match_reveals_nothing() {
        let (resolver, calls) = resolver();
        let idx = index(&["email/alice"]);

        let err = resolver
            .resolve(&idx, &Filter::new(["work", "alice"]).unwrap())
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_filter_reveals_nothing() {
        let (resolver, calls) = resolver();
        let idx = index(&["email/alice"]);

        let err = resolver
            .resolve(&idx, &Filter::new(["email", "(alice"]).unwrap())
            .unwrap_err();

        assert!(matches!(err, Error::InvalidFilter { .. }));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_root_level_credential_permitted_by_default() {
        let (resolver, _) = resolver();
        let idx = index(&["alice"]);
        let credential = resolver
            .resolve(&idx, &Filter::new(["alice"]).unwrap())
            .unwrap();
        assert_eq!(credential.identifier.rendered(), "alice");
    }

    #[test]
    fn test_root_level_credential_rejected_when_segments_required() {
        let (resolver, calls) = resolver();
        let resolver = resolver.with_require_segments(true);
        let idx = index(&["alice"]);

        let err = resolver
            .resolve(&idx, &Filter::new(["alice"]).unwrap())
            .unwrap_err();

        assert!(matches!(err, Error::MalformedIdentifier { .. }));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_revealer_failure_propagates() {
        struct FailingRevealer;

        impl SecretRevealer for FailingRevealer {
            fn reveal(&self, identifier: &Identifier) -> Result<Secret> {
                Err(Error::secret_retrieval(
                    identifier.rendered(),
                    "pass",
                    "gpg: decryption failed: No secret key",
                    Some(2),
                ))
            }
        }

        let resolver = Resolver::new(Box::new(FailingRevealer));
        let err = resolver
            .resolve(&index(&["email/alice"]), &Filter::new(["email", "alice"]).unwrap())
            .unwrap_err();

        assert!(err.to_string().contains("No secret key"));
    }
}
