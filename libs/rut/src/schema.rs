//! Declarative validation rule for forms and request bodies.
//!
//! Malformed shape and checksum mismatch both fail with the same
//! user-facing message.
//!
//! ```
//! use validator::Validate;
//!
//! #[derive(Validate)]
//! struct Enrollment {
//!     #[validate(custom(function = "attend_rut::validate_rut"))]
//!     student_rut: String,
//! }
//!
//! let form = Enrollment { student_rut: "12.345.678-5".into() };
//! assert!(form.validate().is_ok());
//! ```

use std::borrow::Cow;

use validator::ValidationError;

use crate::normalize::normalize;
use crate::validate::is_valid;

/// Message attached to every rejected identifier.
pub const INVALID_RUT_MESSAGE: &str = "invalid identifier";

/// Error code attached to every rejected identifier.
pub const INVALID_RUT_CODE: &str = "rut";

fn invalid_rut() -> ValidationError {
    let mut err = ValidationError::new(INVALID_RUT_CODE);
    err.message = Some(Cow::Borrowed(INVALID_RUT_MESSAGE));
    err
}

/// Trims and normalizes `value`, returning the normalized form to store.
pub fn sanitize_rut(value: &str) -> Result<String, ValidationError> {
    let normalized = normalize(value.trim());
    if is_valid(&normalized) {
        Ok(normalized)
    } else {
        Err(invalid_rut())
    }
}

/// Custom validator for `#[validate(custom(function = "..."))]`.
pub fn validate_rut(value: &str) -> Result<(), ValidationError> {
    sanitize_rut(value).map(|_| ())
}

/// Serde helpers for `String` fields that hold a RUT.
///
/// Use with `#[serde(with = "attend_rut::serde_rut")]`. Deserialization
/// applies [`sanitize_rut`] and stores the normalized form; serialization
/// writes the field unchanged.
pub mod serde_rut {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{sanitize_rut, INVALID_RUT_MESSAGE};

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        sanitize_rut(&raw).map_err(|_| serde::de::Error::custom(INVALID_RUT_MESSAGE))
    }
}
