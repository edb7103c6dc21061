//! Errors raised while loading or validating a catalog.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Everything that can go wrong when a catalog is read from disk.
///
/// Searching never fails; only loading does.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON catalog did not parse.
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML catalog did not parse.
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// Catalog file extension is neither `.json` nor `.toml`.
    #[error("unsupported catalog format for {0} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    /// Two resources share the same id.
    #[error("duplicate resource id `{0}`")]
    DuplicateId(String),

    /// A resource has an empty or whitespace-only id.
    #[error("resource at position {0} has an empty id")]
    EmptyId(usize),
}
