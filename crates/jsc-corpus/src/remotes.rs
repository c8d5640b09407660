//! # Remote Schema Store
//!
//! In-memory lookup from URI to schema text, built once per corpus and
//! consulted by validator adapters to satisfy cross-file `$ref`s.
//!
//! ## No I/O at resolution time
//!
//! Resolution happens inside the timed run phase for implementations that
//! resolve refs lazily during validation, so every lookup must be a pure
//! map access. All content — the corpus `remotes/` files and any draft
//! meta-schema documents — is materialized before the store is built.
//!
//! Resolution order: exact (normalized) match in the preloaded remotes map,
//! then the meta-schema bank (canonical draft URIs and their declared
//! vocabulary dependencies), then [`ResolveError::UnknownSchema`].

use std::collections::HashMap;

use thiserror::Error;

use crate::draft::Draft;

/// Base URI under which the corpus `remotes/` files are addressable.
pub const REMOTES_BASE_URI: &str = "http://localhost:1234/";

/// Errors raised when resolving a `$ref` URI.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// Only `http`/`https` URIs are resolvable.
    #[error("unsupported scheme in: {0}")]
    UnsupportedScheme(String),

    /// No content registered for the URI; remote loading is disabled.
    #[error("loading of remote content disabled: {0}")]
    UnknownSchema(String),
}

/// Materialized meta-schema content, keyed by normalized URI.
///
/// Fetching canonical specification documents is the caller's concern; the
/// bank only admits URIs that some known [`Draft`] declares, so arbitrary
/// content cannot masquerade as a meta-schema. An empty bank is valid:
/// meta-schema URIs then resolve to [`ResolveError::UnknownSchema`].
#[derive(Debug, Clone, Default)]
pub struct MetaSchemaBank {
    content: HashMap<String, String>,
}

impl MetaSchemaBank {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register content for a declared meta-schema URI.
    ///
    /// Returns `false` (and stores nothing) if no known draft declares the
    /// URI as its canonical schema or one of its dependencies.
    pub fn insert(&mut self, uri: &str, content: impl Into<String>) -> bool {
        let normalized = normalize(uri);
        let declared = Draft::ALL.iter().any(|d| {
            normalize(d.uri()) == normalized
                || d.meta_schema_uris().iter().any(|u| normalize(u) == normalized)
        });
        if declared {
            self.content.insert(normalized.to_string(), content.into());
        }
        declared
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn get(&self, normalized_uri: &str) -> Option<&str> {
        self.content.get(normalized_uri).map(String::as_str)
    }
}

/// Read-only URI → schema-text store shared across all preparations.
#[derive(Debug, Default)]
pub struct RemoteSchemaStore {
    remotes: HashMap<String, String>,
    meta: MetaSchemaBank,
}

impl RemoteSchemaStore {
    /// Build a store from preloaded remote content and a meta-schema bank.
    ///
    /// Remote keys are normalized on the way in so lookups and insertions
    /// agree on fragment handling.
    pub fn new(remotes: HashMap<String, String>, meta: MetaSchemaBank) -> Self {
        let remotes = remotes
            .into_iter()
            .map(|(uri, content)| (normalize(&uri).to_string(), content))
            .collect();
        Self { remotes, meta }
    }

    /// Resolve a `$ref` URI to schema text. Pure map lookup; never touches
    /// the network or disk.
    pub fn load(&self, uri: &str) -> Result<&str, ResolveError> {
        if !(uri.starts_with("http://") || uri.starts_with("https://")) {
            return Err(ResolveError::UnsupportedScheme(uri.to_string()));
        }
        let normalized = normalize(uri);

        if let Some(content) = self.remotes.get(normalized) {
            return Ok(content);
        }
        if let Some(content) = self.meta.get(normalized) {
            return Ok(content);
        }
        Err(ResolveError::UnknownSchema(uri.to_string()))
    }

    /// Number of preloaded remote schemas.
    pub fn remote_count(&self) -> usize {
        self.remotes.len()
    }

    /// Iterate the preloaded remotes as (normalized URI, content) pairs.
    pub fn remotes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.remotes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Strip any fragment; scheme, authority, path and query are preserved.
fn normalize(uri: &str) -> &str {
    match uri.find('#') {
        Some(idx) => &uri[..idx],
        None => uri,
    }
}
