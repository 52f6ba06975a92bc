//! Checksum validation over normalized identifiers.

use crate::check_digit::compute_check_digit;
use crate::error::RutError;
use crate::normalize::{normalize, split_normalized};
use crate::types::Rut;

/// Returns true if the input normalizes to a well-shaped identifier whose
/// check character matches its body.
///
/// Never fails: empty, malformed, and mismatched input all yield `false`.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    let normalized = normalize(input);
    match split_normalized(&normalized) {
        Some((body, declared)) => compute_check_digit(body) == declared,
        None => false,
    }
}

/// Validates the input and returns the typed identifier, or the reason it was
/// rejected.
pub fn validate(input: &str) -> Result<Rut, RutError> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return Err(RutError::Empty);
    }

    let Some((body, declared)) = split_normalized(&normalized) else {
        return Err(RutError::Malformed { normalized });
    };

    let expected = compute_check_digit(body);
    if expected != declared {
        return Err(RutError::CheckDigitMismatch {
            expected,
            actual: declared,
        });
    }

    Ok(Rut::from_normalized(normalized))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("12345678-5")]
    #[case("12.345.678-5")]
    #[case("123456785")]
    #[case("0012345678-5")]
    #[case("12.345.670-K")]
    #[case("12.345.670-k")]
    #[case("1.000.005-K")]
    #[case("21.063.494-0")]
    #[case("1.234.567-4")]
    #[case("6-K")]
    fn test_valid(#[case] input: &str) {
        assert!(is_valid(input), "{input} should be valid");
        assert!(validate(input).is_ok());
    }

    #[rstest]
    #[case("12345678-0")]
    #[case("21063497-K")]
    #[case("123-4")]
    #[case("7593183-K")]
    #[case("")]
    #[case("abc")]
    #[case("-")]
    #[case("K")]
    #[case("1k2-3")]
    fn test_invalid(#[case] input: &str) {
        assert!(!is_valid(input), "{input} should be invalid");
        assert!(validate(input).is_err());
    }

    #[test]
    fn test_check_letter_case_insensitive() {
        assert_eq!(is_valid("12345670-k"), is_valid("12345670-K"));
        assert_eq!(is_valid("7593183-k"), is_valid("7593183-K"));
    }

    #[test]
    fn test_validate_reports_empty() {
        let err = validate("  .-  ").unwrap_err();
        assert!(err.is_empty());
    }

    #[test]
    fn test_validate_reports_malformed() {
        let err = validate("1k2-3").unwrap_err();
        assert_eq!(
            err,
            RutError::Malformed {
                normalized: "1K2-3".to_string()
            }
        );
    }

    #[test]
    fn test_validate_reports_mismatch() {
        let err = validate("12.345.678-0").unwrap_err();
        assert!(err.is_checksum_error());
        assert_eq!(
            err,
            RutError::CheckDigitMismatch {
                expected: '5',
                actual: '0'
            }
        );
    }

    #[test]
    fn test_validate_returns_normalized() {
        let rut = validate("12.345.670-k").unwrap();
        assert_eq!(rut.as_str(), "12345670-K");
    }
}
