//! Error types for artifact synthesis

use thiserror::Error;

/// Result type alias for generation
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for synthesis failures.
///
/// Malformed targets (duplicate field names, bad identifiers) are rejected
/// by the introspection layer before generation runs; the only failures
/// surfaced here are ones that need the resolved field model to detect.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A declared default does not parse as an expression for its field
    #[error("field `{field}` has an invalid default literal `{literal}`: {source}")]
    InvalidDefault {
        field: String,
        literal: String,
        #[source]
        source: syn::Error,
    },
}
