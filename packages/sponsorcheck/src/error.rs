//! Typed errors for the sponsor-check engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Very little in this
//! engine can actually fail: missing page elements are modeled as `None` or
//! empty results, never as errors. The one real failure surface is loading
//! and validating a sponsor registry snapshot.

use thiserror::Error;

/// Errors raised while loading or validating a sponsor registry snapshot.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two entries share the same canonical key
    #[error("duplicate canonical key: {key}")]
    DuplicateKey { key: String },

    /// An entry has a blank canonical key
    #[error("entry {index} has an empty canonical key")]
    EmptyKey { index: usize },

    /// An entry carries no display-name variants
    #[error("entry {key:?} has no variants")]
    NoVariants { key: String },

    /// Snapshot JSON could not be parsed
    #[error("registry JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias for registry-loading results.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
