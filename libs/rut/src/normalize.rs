//! Normalization of raw identifier text into `<body>-<check>`.

/// Separator between body and check character in both canonical forms.
pub(crate) const CHECK_SEPARATOR: char = '-';

/// Normalizes a raw identifier.
///
/// Keeps only ASCII digits and `K`/`k`, uppercases, takes the last character
/// as the check character and strips leading zeros from the rest. Returns an
/// empty string when no body remains, which callers treat as "no identifier".
#[must_use]
pub fn normalize(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, 'k' | 'K'))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let Some(check) = cleaned.chars().last() else {
        return String::new();
    };

    // Every kept character is ASCII, so byte slicing is safe.
    let body = cleaned[..cleaned.len() - 1].trim_start_matches('0');
    if body.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(body.len() + 2);
    out.push_str(body);
    out.push(CHECK_SEPARATOR);
    out.push(check);
    out
}

/// Normalizes an optional identifier; `None` is treated as empty input.
#[must_use]
pub fn normalize_opt(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}

/// Splits a normalized identifier into its digit body and check character.
///
/// Returns `None` unless the value is one or more ASCII digits, a hyphen, and
/// exactly one digit or `K` (either case). The check character is returned
/// uppercased.
pub(crate) fn split_normalized(normalized: &str) -> Option<(&str, char)> {
    let (body, check) = normalized.split_once(CHECK_SEPARATOR)?;

    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut chars = check.chars();
    let check = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || matches!(c, 'k' | 'K') => c.to_ascii_uppercase(),
        _ => return None,
    };

    Some((body, check))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("12.345.678-5", "12345678-5")]
    #[case("12345678-5", "12345678-5")]
    #[case("123456785", "12345678-5")]
    #[case("  12 345 678 5  ", "12345678-5")]
    #[case("0012345678-5", "12345678-5")]
    #[case("12.345.670-k", "12345670-K")]
    #[case("1-9", "1-9")]
    #[case("RUT: 6-K", "6-K")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("abc")]
    #[case("5")]
    #[case("K")]
    #[case("0-5")]
    #[case("000.000-0")]
    #[case("not-a-rut")]
    fn test_normalize_to_empty(#[case] input: &str) {
        assert_eq!(normalize(input), "");
    }

    #[test]
    fn test_normalize_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not ASCII digits and must be dropped.
        assert_eq!(normalize("١٢٣12345678-5"), "12345678-5");
    }

    #[test]
    fn test_normalize_keeps_k_inside_body() {
        assert_eq!(normalize("1k2-3"), "1K2-3");
    }

    #[test]
    fn test_normalize_opt_none_is_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("1.234.567-4")), "1234567-4");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["12.345.678-5", "0001-9", "1k2-3", "", "abc"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_split_normalized() {
        assert_eq!(split_normalized("12345678-5"), Some(("12345678", '5')));
        assert_eq!(split_normalized("12345670-k"), Some(("12345670", 'K')));
        assert_eq!(split_normalized(""), None);
        assert_eq!(split_normalized("-5"), None);
        assert_eq!(split_normalized("1K2-3"), None);
        assert_eq!(split_normalized("123-"), None);
        assert_eq!(split_normalized("123-45"), None);
        assert_eq!(split_normalized("123-X"), None);
    }
}
