//! Shared utilities for passdex
//!
//! Store-root resolution lives here so that the indexing engine itself
//! never reads ambient process state: callers resolve a root once and
//! pass it in explicitly.

pub mod paths;
pub mod tracing;

pub use paths::*;
