//! # attend-rut
//!
//! RUT normalization, validation, and formatting for the attend platform.
//!
//! ## Design Principles
//!
//! - Every operation is a pure function of a single input string
//! - Invalid input degrades to a well-defined value (`""`, `false`, or the
//!   input passed through) instead of an error
//! - The normalized form is the storage form; the formatted form is for display
//! - The typed [`Rut`] only ever holds a checksum-valid identifier
//!
//! ## Identifier Format
//!
//! A RUT is a numeric body followed by a check character (`0`-`9` or `K`)
//! computed with a modulo-11 weighted checksum.
//!
//! | Form       | Example        |
//! |------------|----------------|
//! | raw        | `12.345.678-5` |
//! | normalized | `12345678-5`   |
//! | formatted  | `12.345.678-5` |
//!
//! ```
//! use attend_rut::{format, is_valid, normalize};
//!
//! assert_eq!(normalize(" 012.345.678-5 "), "12345678-5");
//! assert_eq!(format("123456785"), "12.345.678-5");
//! assert!(is_valid("12.345.678-5"));
//! assert!(!is_valid("12.345.678-0"));
//! ```

mod check_digit;
mod error;
mod format;
mod normalize;
mod schema;
mod types;
mod validate;

pub use check_digit::{check_digit_for, compute_check_digit};
pub use error::RutError;
pub use format::format;
pub use normalize::{normalize, normalize_opt};
pub use schema::{sanitize_rut, serde_rut, validate_rut, INVALID_RUT_CODE, INVALID_RUT_MESSAGE};
pub use types::Rut;
pub use validate::{is_valid, validate};
