//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a store-unavailable error for the given root
    #[must_use]
    pub fn store_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::StoreUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-filter error from a regex compilation failure
    #[must_use]
    pub fn invalid_filter(pattern: impl Into<String>, source: regex::Error) -> Self {
        Error::InvalidFilter {
            pattern: pattern.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create an invalid-filter error that is not tied to a regex failure
    #[must_use]
    pub fn invalid_filter_shape(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidFilter {
            pattern: pattern.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a not-found error
    #[must_use]
    pub fn not_found(query: impl Into<String>) -> Self {
        Error::NotFound {
            query: query.into(),
        }
    }

    /// Create an ambiguous-query error listing the rendered candidates
    #[must_use]
    pub fn ambiguous(query: impl Into<String>, candidates: Vec<String>) -> Self {
        Error::AmbiguousQuery {
            query: query.into(),
            candidates,
        }
    }

    /// Create a malformed-identifier error
    #[must_use]
    pub fn malformed_identifier(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedIdentifier {
            identifier: identifier.into(),
            message: message.into(),
        }
    }

    /// Create a secret-retrieval error
    #[must_use]
    pub fn secret_retrieval(
        identifier: impl Into<String>,
        command: impl Into<String>,
        message: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Error::SecretRetrievalFailed {
            identifier: identifier.into(),
            command: command.into(),
            message: message.into(),
            exit_code,
        }
    }

    /// Create a path-resolution error
    #[must_use]
    pub fn path_resolution(message: impl Into<String>) -> Self {
        Error::PathResolution {
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// True when the query matched nothing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// True when the query matched more than one credential
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Error::AmbiguousQuery { .. })
    }
}
