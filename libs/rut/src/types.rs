//! The typed, checksum-valid identifier.

use std::cmp::Ordering;

use crate::check_digit::check_digit_for;
use crate::error::RutError;
use crate::format::format_parts;
use crate::normalize::CHECK_SEPARATOR;
use crate::schema::INVALID_RUT_MESSAGE;

/// A validated RUT, held in normalized form (`12345678-5`).
///
/// Construct it with [`Rut::parse`] (or `str::parse`) from any raw input, or
/// with [`Rut::from_body`] from a numeric body. `Display` renders the
/// formatted form; serde writes the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    normalized: String,
}

impl Rut {
    /// Parses and validates a raw identifier.
    pub fn parse(s: &str) -> Result<Self, RutError> {
        crate::validate::validate(s)
    }

    /// Builds an identifier from a numeric body, computing its check character.
    pub fn from_body(body: u64) -> Result<Self, RutError> {
        if body == 0 {
            return Err(RutError::Empty);
        }
        Ok(Self {
            normalized: format!("{body}{CHECK_SEPARATOR}{}", check_digit_for(body)),
        })
    }

    /// Wraps an already normalized and checked value.
    pub(crate) fn from_normalized(normalized: String) -> Self {
        Self { normalized }
    }

    /// Returns the normalized form, suitable for storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Returns the digit body without leading zeros.
    #[must_use]
    pub fn body(&self) -> &str {
        // Normalized values always end in "-<check>".
        &self.normalized[..self.normalized.len() - 2]
    }

    /// Returns the uppercase check character.
    #[must_use]
    pub fn check_char(&self) -> char {
        self.normalized
            .chars()
            .next_back()
            .unwrap_or_default()
    }

    /// Returns the body as a number, if it fits in a `u64`.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.body().parse().ok()
    }

    /// Returns the display form with thousands separators.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_parts(self.body(), self.check_char())
    }

    /// Consumes the identifier, returning the normalized string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.normalized
    }
}

impl Ord for Rut {
    /// Orders numerically by body. Bodies carry no leading zeros, so a
    /// shorter body is always the smaller number.
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.body(), other.body());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.check_char().cmp(&other.check_char()))
    }
}

impl PartialOrd for Rut {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Rut {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl From<Rut> for String {
    fn from(rut: Rut) -> Self {
        rut.normalized
    }
}

impl TryFrom<&str> for Rut {
    type Error = RutError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl serde::Serialize for Rut {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

impl<'de> serde::Deserialize<'de> for Rut {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(s.trim()).map_err(|_| serde::de::Error::custom(INVALID_RUT_MESSAGE))
    }
}

// =============================================================================
// Tests
// =============================================================================
