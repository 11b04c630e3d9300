//! Error types for payload transport

use thiserror::Error;

/// Result type alias for extras access
pub type ExtrasResult<T> = Result<T, ExtrasError>;

/// Error type for reading and writing tagged payloads
#[derive(Error, Debug)]
pub enum ExtrasError {
    /// No payload was stored under the requested tag
    #[error("no entry tagged {tag:?}")]
    MissingEntry { tag: String },

    /// A payload was present but could not be decoded to the requested type
    #[error("entry tagged {tag:?} could not be decoded: {source}")]
    Decode {
        tag: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for transport
    #[error("value could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),

    /// A subview component was asked for its payload before any
    /// arguments were attached
    #[error("component has no arguments attached")]
    MissingArgs,
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
