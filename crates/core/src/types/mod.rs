//! Core domain types for `passdex`.
//!
//! - **`identifier`**: The parsed location of one credential in the store
//! - **`filter`**: Structured per-segment queries
//! - **`match_set`**: The set of identifiers satisfying a query
//! - **`security`**: Secret values and resolved credentials

pub mod filter;
pub mod identifier;
pub mod match_set;
pub mod security;

pub use filter::*;
pub use identifier::*;
pub use match_set::*;
pub use security::*;
