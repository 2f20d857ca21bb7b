//! Core domain types, errors, and constants for `passdex`.
//!
//! ## Key Components
//!
//! - **`errors`**: The `Error` enum and `Result` alias covering every way a
//!   store query can fail.
//! - **`types`**: `Identifier`, `Filter`, `MatchSet`, `Secret` and `Credential`,
//!   with their invariants enforced at construction.
//! - **`constants`**: Store layout defaults and environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, IoResultExt, Result},
    types::*,
};
