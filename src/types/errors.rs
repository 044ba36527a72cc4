//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the translator.
#[derive(Error, Debug)]
pub enum Error {
    /// A matched termination report did not decompose into the expected
    /// section layout. Downgraded to the not-handled signal at the
    /// translator boundary; never escapes to the host.
    #[error("malformed termination report: {0}")]
    MalformedReport(String),

    /// Serialization/deserialization errors (config loading).
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors
impl Error {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedReport(msg.into())
    }

    /// Section-count mismatch between recognized field slots and the
    /// positional argument list of a legacy-form report.
    pub fn slot_mismatch(expected: usize, found: usize) -> Self {
        Self::MalformedReport(format!(
            "{expected} field slots paired with {found} arguments"
        ))
    }
}
