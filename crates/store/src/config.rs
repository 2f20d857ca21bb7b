//! Store configuration
//!
//! `StoreConfig` is the single source of truth for where the store lives and
//! how secrets are revealed. It is immutable once handed to a
//! [`PasswordStore`](crate::PasswordStore) and cheap to clone.

use passdex_core::{
    Error, Result, DEFAULT_ENCRYPTED_SUFFIX, DEFAULT_REVEAL_COMMAND, IDENTIFIER_SEPARATOR,
    PASSDEX_REVEAL_CMD_VAR,
};
use passdex_utils::StorePaths;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Absolute path of the store root
    pub root: PathBuf,

    /// Encrypted-file suffix, without the leading dot
    pub suffix: String,

    /// Program that reveals one secret given its store-relative path
    pub reveal_command: String,

    /// Arguments passed to the program before the path
    pub reveal_args: Vec<String>,

    /// Whether credentials directly under the root are refused on resolution
    pub require_segments: bool,
}

impl StoreConfig {
    /// Configuration for `root` with default suffix and revealer
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: DEFAULT_ENCRYPTED_SUFFIX.to_string(),
            reveal_command: DEFAULT_REVEAL_COMMAND.to_string(),
            reveal_args: Vec::new(),
            require_segments: false,
        }
    }

    /// Resolve the root from `PASSWORD_STORE_DIR` or the home directory,
    /// and the reveal command from `PASSDEX_REVEAL_CMD` if set
    pub fn from_env() -> Result<Self> {
        Self::locate(None)
    }

    /// Like [`from_env`](Self::from_env), with an explicitly configured root taking precedence
    pub fn locate(configured_root: Option<&str>) -> Result<Self> {
        let root = match configured_root {
            Some(raw) => StorePaths::expand(raw)?,
            None => StorePaths::store_root()?,
        };
        let mut config = Self::new(root);
        if let Some(cmd) = env::var(PASSDEX_REVEAL_CMD_VAR)
            .ok()
            .filter(|c| !c.trim().is_empty())
        {
            config.reveal_command = cmd;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl AsRef<str>) -> Self {
        self.suffix = suffix.as_ref().trim_start_matches('.').to_string();
        self
    }

    #[must_use]
    pub fn with_reveal_command(mut self, command: impl Into<String>) -> Self {
        self.reveal_command = command.into();
        self
    }

    #[must_use]
    pub fn with_reveal_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.reveal_args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_require_segments(mut self, require_segments: bool) -> Self {
        self.require_segments = require_segments;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::path_resolution("store root is empty"));
        }
        if self.suffix.is_empty() {
            return Err(Error::configuration("encrypted-file suffix is empty"));
        }
        if self.suffix.contains(IDENTIFIER_SEPARATOR) {
            return Err(Error::configuration(format!(
                "encrypted-file suffix '{}' contains '{IDENTIFIER_SEPARATOR}'",
                self.suffix
            )));
        }
        if self.reveal_command.trim().is_empty() {
            return Err(Error::configuration("reveal command is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::new("/store");
        assert_eq!(config.suffix, "gpg");
        assert_eq!(config.reveal_command, "pass");
        assert!(config.reveal_args.is_empty());
        assert!(!config.require_segments);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_suffix_dot_is_normalised() {
        let config = StoreConfig::new("/store").with_suffix(".age");
        assert_eq!(config.suffix, "age");
    }

    #[test]
    fn test_locate_prefers_configured_root() {
        let config = StoreConfig::locate(Some("/srv/store")).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/store"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(StoreConfig::new("").validate().is_err());
        assert!(StoreConfig::new("/s").with_suffix(".").validate().is_err());
        assert!(StoreConfig::new("/s").with_suffix("a/b").validate().is_err());
        assert!(StoreConfig::new("/s")
            .with_reveal_command("  ")
            .validate()
            .is_err());
    }
}
