//! Extension traits for error handling

use super::types::{Error, Result};
use std::path::Path;

/// Extension trait turning I/O failures under the store root into `StoreUnavailable`
pub trait IoResultExt<T> {
    /// Attribute the failure to `path`
    fn store_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn store_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| Error::store_unavailable(path, source))
    }
}
