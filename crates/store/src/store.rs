//! Query surface over a password store

use crate::config::StoreConfig;
use crate::index::Index;
use crate::matcher::{CompiledFilter, PathPattern};
use crate::resolver::Resolver;
use crate::reveal::{CommandRevealer, SecretRevealer};
use passdex_core::{Credential, Filter, MatchSet, Result};
use passdex_utils::tracing::query_span;

/// Entry point for listing, matching and resolving credentials.
///
/// There is no cache: each call walks the store again, so a credential
/// added or removed by another process is visible on the next query.
/// Patterns are compiled before the walk, so an invalid filter fails the
/// same way whatever the state of the store.
pub struct PasswordStore {
    config: StoreConfig,
    resolver: Resolver,
}

impl PasswordStore {
    /// Create a store that reveals secrets with the configured command
    pub fn new(config: StoreConfig) -> Result<Self> {
        let revealer = CommandRevealer::new(config.reveal_command.clone())
            .with_args(config.reveal_args.clone());
        Self::with_revealer(config, Box::new(revealer))
    }

    /// Create a store with a custom revealer
    pub fn with_revealer(config: StoreConfig, revealer: Box<dyn SecretRevealer>) -> Result<Self> {
        config.validate()?;
        let resolver = Resolver::new(revealer).with_require_segments(config.require_segments);
        Ok(Self { config, resolver })
    }

    /// Create a store from `PASSWORD_STORE_DIR` / the home directory
    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// A fresh index of the whole store
    pub fn index(&self) -> Result<Index> {
        Index::build(&self.config.root, &self.config.suffix)
    }

    /// Every credential whose rendered path contains a match for `pattern`
    pub fn list(&self, pattern: &str) -> Result<MatchSet> {
        let _span = query_span("list", pattern).entered();
        let matcher = PathPattern::compile(pattern)?;
        Ok(self.index()?.select(&matcher))
    }

    /// Like [`list`](Self::list), but requires exactly one match and reveals its secret
    pub fn get(&self, pattern: &str) -> Result<Credential> {
        let _span = query_span("get", pattern).entered();
        let matcher = PathPattern::compile(pattern)?;
        self.resolver.resolve_with(&self.index()?, &matcher)
    }

    /// Every credential matching a structured per-segment filter
    pub fn matches(&self, filter: &Filter) -> Result<MatchSet> {
        let _span = query_span("match", &filter.to_string()).entered();
        let matcher = CompiledFilter::compile(filter)?;
        Ok(self.index()?.select(&matcher))
    }

    /// Like [`matches`](Self::matches), but requires exactly one match and reveals its secret
    pub fn resolve(&self, filter: &Filter) -> Result<Credential> {
        let _span = query_span("resolve", &filter.to_string()).entered();
        let matcher = CompiledFilter::compile(filter)?;
        self.resolver.resolve_with(&self.index()?, &matcher)
    }
}
