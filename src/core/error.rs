//! Custom error types for the application.
//!
//! - [`ReferenceError`] - Loading and validating image reference collections

use thiserror::Error;

/// Errors raised while building a collection of image references.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// The manifest is not a valid JSON array of references.
    #[error("invalid reference manifest: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two references share the same id.
    #[error("duplicate reference id '{0}'")]
    DuplicateId(String),
}
