#[cfg(feature = "serde")]
use serde::Serialize;

use crate::converter::radix::ALPHABET;

/// A digit symbol paired with its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Digit {
    /// The uppercase symbol, `0`-`9` or `A`-`Z`.
    pub symbol: char,
    /// The value of the symbol, `0..=35`.
    pub value:  u32,
}

impl Digit {
    /// Creates a digit from its symbol, or `None` if the symbol is not in
    /// `0`-`9`/`A`-`Z`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        value_of(symbol).map(|value| Self { symbol, value })
    }
}

/// Returns the value of a digit symbol.
///
/// Defined for `'0'..='9'` and uppercase `'A'..='Z'`; every other character
/// yields `None`.
///
/// # Example
/// ```
/// use radixa::converter::digit::value_of;
///
/// assert_eq!(value_of('7'), Some(7));
/// assert_eq!(value_of('A'), Some(10));
/// assert_eq!(value_of('Z'), Some(35));
/// assert_eq!(value_of('a'), None);
/// assert_eq!(value_of('.'), None);
/// ```
pub const fn value_of(symbol: char) -> Option<u32> {
    match symbol {
        '0'..='9' => Some(symbol as u32 - '0' as u32),
        'A'..='Z' => Some(symbol as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Returns the symbol of a digit value.
///
/// Values below 10 map to decimal digits, values `10..=35` to uppercase
/// letters, and anything larger to `None`.
///
/// # Example
/// ```
/// use radixa::converter::digit::char_of;
///
/// assert_eq!(char_of(9), Some('9'));
/// assert_eq!(char_of(15), Some('F'));
/// assert_eq!(char_of(36), None);
/// ```
pub fn char_of(value: u32) -> Option<char> {
    let index = usize::try_from(value).ok()?;
    ALPHABET.as_bytes().get(index).copied().map(char::from)
}
