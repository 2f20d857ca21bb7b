//! Conversion of credential file paths into identifiers

use passdex_core::Identifier;
use std::path::{Component, Path, PathBuf};

/// Turns `<root>/<segment>/.../<username>.<suffix>` into an [`Identifier`].
///
/// Anything that does not have that shape (the root itself, files without
/// the suffix, a bare `.gpg`, paths outside the root, non-UTF-8 names) is
/// simply not a credential and yields `None`.
#[derive(Debug, Clone)]
pub struct IdentifierParser {
    root: PathBuf,
    /// Suffix including the leading dot, e.g. `.gpg`
    suffix: String,
}

impl IdentifierParser {
    /// `suffix` may be given with or without its leading dot
    pub fn new(root: impl Into<PathBuf>, suffix: &str) -> Self {
        Self {
            root: root.into(),
            suffix: format!(".{}", suffix.trim_start_matches('.')),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn parse(&self, file_path: &Path) -> Option<Identifier> {
        let relative = file_path.strip_prefix(&self.root).ok()?;

        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => match name.to_str() {
                    Some(name) => parts.push(name),
                    None => {
                        tracing::warn!(
                            path = %file_path.display(),
                            "skipping credential path that is not valid UTF-8"
                        );
                        return None;
                    }
                },
                Component::CurDir => {}
                _ => return None,
            }
        }

        let file_name = parts.pop()?;
        let username = file_name.strip_suffix(self.suffix.as_str())?;

        match Identifier::new(parts, username) {
            Ok(identifier) => Some(identifier),
            Err(e) => {
                tracing::debug!(path = %file_path.display(), error = %e, "not a credential");
                None
            }
        }
    }
}
