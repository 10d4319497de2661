//! Client configuration
//!
//! Values come from `NOSTR_COUNT_*` environment variables, falling back to
//! defaults that match the public client.

use std::env;
use std::path::{Path, PathBuf};

use crate::types::DEFAULT_FETCH_LIMIT;

/// Relays the client connects to when none are configured
pub const DEFAULT_RELAYS: &[&str] = &[
    "wss://relay.azzamo.net",
    "wss://relay.damus.io",
    "wss://nostr.oxtr.dev",
    "wss://nos.lol",
    "wss://relay.snort.social",
];

/// Configuration for fetching and listing counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Maximum records requested per query
    pub fetch_limit: usize,
    /// Relay URLs handed to the transport layer
    pub relays: Vec<String>,
    /// JSON-lines cache of raw records
    pub records_file: PathBuf,
    /// Only list counters by this author
    pub author: Option<String>,
    /// Only list counters marked public
    pub public_only: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            fetch_limit: DEFAULT_FETCH_LIMIT,
            relays: DEFAULT_RELAYS.iter().map(|r| r.to_string()).collect(),
            records_file: PathBuf::from("records.jsonl"),
            author: None,
            public_only: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(|key| env::var(key).ok()).resolve_paths(&current_dir)
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(limit) = lookup("NOSTR_COUNT_FETCH_LIMIT") {
            match limit.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.fetch_limit = limit,
                _ => tracing::warn!(value = %limit, "Ignoring invalid NOSTR_COUNT_FETCH_LIMIT"),
            }
        }

        if let Some(relays) = lookup("NOSTR_COUNT_RELAYS") {
            let relays: Vec<String> = relays
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect();
            if !relays.is_empty() {
                config.relays = relays;
            }
        }

        if let Some(path) = lookup("NOSTR_COUNT_RECORDS_FILE") {
            config.records_file = PathBuf::from(path);
        }

        config.author = lookup("NOSTR_COUNT_AUTHOR").filter(|a| !a.trim().is_empty());

        if let Some(flag) = lookup("NOSTR_COUNT_PUBLIC_ONLY") {
            config.public_only = matches!(flag.trim(), "1" | "true" | "yes");
        }

        config
    }

    /// Make a relative records path absolute against `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.records_file.is_relative() {
            self.records_file = base.join(&self.records_file);
        }
        self
    }

    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = limit;
        self
    }

    pub fn with_records_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.records_file = path.as_ref().to_path_buf();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_public_only(mut self, public_only: bool) -> Self {
        self.public_only = public_only;
        self
    }
}
