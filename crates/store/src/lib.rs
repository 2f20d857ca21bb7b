//! Indexing and query engine for a hierarchical, file-backed password store.
//!
//! Every credential is an encrypted file at
//! `<root>/<segment>/.../<segment>/<username>.<suffix>`. The pieces compose as:
//!
//! root → [`StoreWalker`] → file paths → [`IdentifierParser`] → [`Index`]
//! → [`IdentifierMatcher`] → [`MatchSet`](passdex_core::MatchSet) → [`Resolver`] → secret.
//!
//! [`PasswordStore`] is the entry point most callers want. It rebuilds the
//! index on every query, so results always reflect what is on disk.

pub mod config;
pub mod index;
pub mod matcher;
pub mod parser;
pub mod resolver;
pub mod reveal;
pub mod store;
pub mod walker;

pub use config::StoreConfig;
pub use index::Index;
pub use matcher::{CompiledFilter, IdentifierMatcher, PathPattern};
pub use parser::IdentifierParser;
pub use resolver::Resolver;
pub use reveal::{CommandRevealer, SecretRevealer};
pub use store::PasswordStore;
pub use walker::StoreWalker;
