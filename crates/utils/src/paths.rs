//! Location of the password store on disk

use passdex_core::{Error, Result, DEFAULT_STORE_DIR_NAME, PASSWORD_STORE_DIR_VAR};
use std::env;
use std::path::{Path, PathBuf};

/// Resolution of the store root directory
pub struct StorePaths;

impl StorePaths {
    /// Get `$PASSWORD_STORE_DIR` or `~/.password-store`
    pub fn store_root() -> Result<PathBuf> {
        Self::resolve(env::var(PASSWORD_STORE_DIR_VAR).ok().as_deref())
    }

    /// Resolve an optional user-supplied location, falling back to the home directory
    pub fn resolve(configured: Option<&str>) -> Result<PathBuf> {
        match configured.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Self::expand(raw),
            None => Self::default_root(),
        }
    }

    /// `<home>/.password-store`
    pub fn default_root() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_STORE_DIR_NAME))
            .ok_or_else(|| Error::path_resolution("home directory is not set"))
    }

    /// Expand `~` and environment variables, then make the result absolute
    pub fn expand(raw: &str) -> Result<PathBuf> {
        let expanded = shellexpand::full(raw)
            .map_err(|e| Error::path_resolution(format!("cannot expand '{raw}': {e}")))?;
        Self::absolute(Path::new(expanded.as_ref()))
    }

    fn absolute(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let cwd = env::current_dir().map_err(|e| {
            Error::path_resolution(format!("cannot determine current directory: {e}"))
        })?;
        Ok(cwd.join(path))
    }
}
