//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for passdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for passdex operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store root is missing or cannot be read
    #[error("password store '{}' is unavailable: {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A filter element is not a well-formed regular expression
    #[error("invalid filter pattern '{pattern}': {message}")]
    InvalidFilter {
        pattern: String,
        message: String,
        #[source]
        source: Option<regex::Error>,
    },

    /// No identifier satisfied the query
    #[error("no credentials match '{query}'")]
    NotFound { query: String },

    /// More than one identifier satisfied the query
    #[error("ambiguous query '{query}': {} credentials match", .candidates.len())]
    AmbiguousQuery {
        query: String,
        candidates: Vec<String>,
    },

    /// A matched identifier lacks structure required by the store policy
    #[error("malformed identifier '{identifier}': {message}")]
    MalformedIdentifier { identifier: String, message: String },

    /// The external secret-revealing collaborator failed
    #[error("{}", format_retrieval_error(.identifier, .command, .message, .exit_code))]
    SecretRetrievalFailed {
        identifier: String,
        command: String,
        message: String,
        exit_code: Option<i32>,
    },

    /// The store root location could not be determined
    #[error("cannot determine password store location: {message}")]
    PathResolution { message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

fn format_retrieval_error(
    identifier: &str,
    command: &str,
    message: &str,
    exit_code: &Option<i32>,
) -> String {
    match exit_code {
        Some(code) => format!(
            "failed to retrieve secret for '{identifier}': '{command}' exited with code {code}: {message}"
        ),
        None => format!("failed to retrieve secret for '{identifier}' via '{command}': {message}"),
    }
}
