//! Errors raised while loading options.

use std::path::PathBuf;

use thiserror::Error;

/// Failure loading [`crate::LockOptions`] overrides.
#[derive(Debug, Error)]
pub enum OptionsLoadError {
    /// The options file could not be read.
    #[error("failed to read lock options from {path}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A `.toml` file did not parse.
    #[error("invalid lock options {path}: {source}")]
    Toml {
        /// File that failed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// JSON input did not parse.
    #[error("invalid lock options json: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither TOML nor JSON matched the contents.
    #[error(
        "failed to parse lock options {origin}: toml error: {toml}; json error: {json}"
    )]
    Unrecognized {
        /// Where the contents came from.
        origin: String,
        /// TOML parser message.
        toml: String,
        /// JSON parser message.
        json: String,
    },
}
