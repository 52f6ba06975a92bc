//! Error types for RUT parsing and validation.

use thiserror::Error;

/// Reasons an identifier can be rejected.
///
/// Only the typed entry points ([`crate::Rut::parse`], [`crate::validate`])
/// surface these. The predicate and formatter never fail, and the schema
/// adapter collapses every variant into one fixed message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RutError {
    /// Nothing usable remained after normalization.
    #[error("RUT cannot be empty")]
    Empty,

    /// The normalized value is not `<digits>-<digit|K>`.
    #[error("invalid RUT format: '{normalized}'")]
    Malformed { normalized: String },

    /// The declared check character does not match the body.
    #[error("invalid RUT check digit: expected '{expected}', got '{actual}'")]
    CheckDigitMismatch { expected: char, actual: char },
}

impl RutError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, RutError::Empty)
    }

    /// Returns true if the shape was fine but the checksum failed.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, RutError::CheckDigitMismatch { .. })
    }
}
