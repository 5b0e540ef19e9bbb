use crate::converter::{numeral::Numeral, radix::Radix};

/// Returns `true` if `numeral` is a legal numeral in `radix`.
///
/// A legal numeral consists of an optional leading `-` or `+`, digits from the
/// first `radix` symbols of `0-9A-Z` (letters in either case), and at most one
/// decimal point written as `.` or `,`. The empty string is legal; rejecting
/// empty input is up to the caller.
///
/// # Example
/// ```
/// use radixa::converter::{radix::Radix, validator::is_valid};
///
/// let hex = Radix::new(16).unwrap();
/// assert!(is_valid("FF", hex));
/// assert!(is_valid("ff.8", hex));
/// assert!(!is_valid("G", hex));
/// assert!(!is_valid("1.2.3", Radix::DECIMAL));
/// assert!(is_valid("", hex));
/// ```
pub fn is_valid(numeral: &str, radix: Radix) -> bool {
    Numeral::lex(numeral, radix).is_some()
}
