//! Display formatting with thousands separators.

use crate::normalize::{normalize, split_normalized, CHECK_SEPARATOR};

const GROUP_SEPARATOR: char = '.';
const GROUP_SIZE: usize = 3;

/// Formats an identifier for display, e.g. `12.345.678-5`.
///
/// Input that does not normalize to `<digits>-<digit|K>` is returned in its
/// normalized form without grouping. The checksum is not verified here.
#[must_use]
pub fn format(input: &str) -> String {
    let normalized = normalize(input);
    match split_normalized(&normalized) {
        Some((body, check)) => format_parts(body, check),
        None => normalized,
    }
}

/// Groups `body` in threes from the right and appends the check character.
pub(crate) fn format_parts(body: &str, check: char) -> String {
    let mut out = String::with_capacity(body.len() + body.len() / GROUP_SIZE + 2);
    for (i, digit) in body.chars().enumerate() {
        if i > 0 && (body.len() - i) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    out.push(CHECK_SEPARATOR);
    out.push(check.to_ascii_uppercase());
    out
}
