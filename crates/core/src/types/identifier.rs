//! Structured credential identifiers

use crate::constants::IDENTIFIER_SEPARATOR;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// The location of one credential: the folders leading to it and the account name.
///
/// `segments` holds the hierarchical components between the store root and the
/// credential file, in root-to-leaf order. `username` is the file name with the
/// encrypted-file suffix removed. Both are validated on construction: no segment
/// is empty or contains the separator, and the username is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawIdentifier")]
pub struct Identifier {
    segments: Vec<String>,
    username: String,
}

#[derive(Deserialize)]
struct RawIdentifier {
    #[serde(default)]
    segments: Vec<String>,
    username: String,
}

impl TryFrom<RawIdentifier> for Identifier {
    type Error = Error;

    fn try_from(raw: RawIdentifier) -> Result<Self> {
        Self::new(raw.segments, raw.username)
    }
}

impl Identifier {
    /// Create a new Identifier with validation
    pub fn new<S>(segments: impl IntoIterator<Item = S>, username: impl Into<String>) -> Result<Self>
    where
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let username = username.into();

        let describe = || render(&segments, &username);

        if username.is_empty() {
            return Err(Error::malformed_identifier(describe(), "username is empty"));
        }
        if username.contains(IDENTIFIER_SEPARATOR) {
            return Err(Error::malformed_identifier(
                describe(),
                format!("username contains '{IDENTIFIER_SEPARATOR}'"),
            ));
        }
        for segment in &segments {
            if segment.is_empty() {
                return Err(Error::malformed_identifier(describe(), "empty path segment"));
            }
            if segment.contains(IDENTIFIER_SEPARATOR) {
                return Err(Error::malformed_identifier(
                    describe(),
                    format!("segment '{segment}' contains '{IDENTIFIER_SEPARATOR}'"),
                ));
            }
        }

        Ok(Self { segments, username })
    }

    /// Parse a store-relative path such as `personal/bank/alice`
    pub fn from_rendered(rendered: &str) -> Result<Self> {
        let mut parts: Vec<&str> = rendered.split(IDENTIFIER_SEPARATOR).collect();
        // split always yields at least one element
        let username = parts.pop().unwrap_or_default();
        Self::new(parts, username)
    }

    /// The hierarchical segments, root to leaf
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Number of hierarchical segments
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The segment at `index`, or `None` past the end
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// The hierarchical part only, joined by the separator
    pub fn path(&self) -> String {
        self.segments.join(&IDENTIFIER_SEPARATOR.to_string())
    }

    /// The store-relative path handed to the secret-revealing collaborator
    pub fn rendered(&self) -> String {
        render(&self.segments, &self.username)
    }
}

fn render(segments: &[String], username: &str) -> String {
    let mut out = String::new();
    for segment in segments.iter().filter(|s| !s.is_empty()) {
        out.push_str(segment);
        out.push(IDENTIFIER_SEPARATOR);
    }
    out.push_str(username);
    out
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered())
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_rendered(s)
    }
}
