//! Modulo-11 check character computation.
//!
//! The body is read right to left, each digit weighted by a multiplier that
//! cycles through 2, 3, 4, 5, 6, 7 and back to 2. The check character is
//! `11 - (sum mod 11)`, with 11 mapped to `0` and 10 mapped to `K`.

const MODULUS: u32 = 11;
const FIRST_MULTIPLIER: u32 = 2;
const LAST_MULTIPLIER: u32 = 7;

/// Weighted-sum accumulator, kept reduced modulo 11 so long bodies cannot
/// overflow.
struct Checksum {
    sum: u32,
    multiplier: u32,
}

impl Checksum {
    fn new() -> Self {
        Self {
            sum: 0,
            multiplier: FIRST_MULTIPLIER,
        }
    }

    /// Feeds the next digit, moving right to left through the body.
    fn push(&mut self, digit: u32) {
        self.sum = (self.sum + digit * self.multiplier) % MODULUS;
        self.multiplier = if self.multiplier == LAST_MULTIPLIER {
            FIRST_MULTIPLIER
        } else {
            self.multiplier + 1
        };
    }

    fn finish(self) -> char {
        match MODULUS - self.sum {
            11 => '0',
            10 => 'K',
            // 1..=9
            remainder => char::from(b'0' + remainder as u8),
        }
    }
}

/// Computes the check character for a body of ASCII digits.
///
/// The body must contain only ASCII digits; callers are expected to pass the
/// body of a normalized identifier. Anything else is a programming error and
/// trips a debug assertion (release builds skip the offending characters).
#[must_use]
pub fn compute_check_digit(body: &str) -> char {
    debug_assert!(
        body.bytes().all(|b| b.is_ascii_digit()),
        "check digit body must be ASCII digits, got {body:?}"
    );

    let mut checksum = Checksum::new();
    for digit in body.bytes().rev().filter(u8::is_ascii_digit) {
        checksum.push(u32::from(digit - b'0'));
    }
    checksum.finish()
}

/// Computes the check character for a numeric body.
#[must_use]
pub fn check_digit_for(mut body: u64) -> char {
    let mut checksum = Checksum::new();
    loop {
        // Truncation is fine: the value is always below 10.
        checksum.push((body % 10) as u32);
        body /= 10;
        if body == 0 {
            break;
        }
    }
    checksum.finish()
}
