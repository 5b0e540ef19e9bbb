use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{ConversionError, RadixRole};

/// All digit symbols in ascending order of value.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The base of a positional numeral system, always within `2..=36`.
///
/// A `Radix` can only be obtained through the checked constructors, so every
/// function taking one can rely on the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported radix.
    pub const MIN: u32 = 2;
    /// Largest supported radix.
    pub const MAX: u32 = 36;
    /// Base 10.
    pub const DECIMAL: Self = Self(10);

    /// Creates a radix if `value` lies within `2..=36`.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::radix::Radix;
    ///
    /// assert_eq!(Radix::new(16).map(Radix::get), Some(16));
    /// assert!(Radix::new(1).is_none());
    /// assert!(Radix::new(37).is_none());
    /// ```
    pub const fn new(value: u32) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Checks an integer radix supplied by a caller.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidRadix` naming `role` if `value` lies
    /// outside `2..=36`.
    pub fn checked(value: i64, role: RadixRole) -> Result<Self, ConversionError> {
        u32::try_from(value).ok()
                            .and_then(Self::new)
                            .ok_or_else(|| ConversionError::InvalidRadix { role,
                                                                           value: value.to_string() })
    }

    /// Parses a radix typed by a user, e.g. a custom base field.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidRadix` naming `role` if the input is
    /// empty, not an integer, or outside `2..=36`.
    ///
    /// # Example
    /// ```
    /// use radixa::{
    ///     converter::radix::Radix,
    ///     error::{ConversionError, RadixRole},
    /// };
    ///
    /// assert_eq!(Radix::parse(" 8 ", RadixRole::Source).unwrap().get(), 8);
    ///
    /// let err = Radix::parse("hex", RadixRole::Target).unwrap_err();
    /// assert!(matches!(err, ConversionError::InvalidRadix { role: RadixRole::Target, .. }));
    /// ```
    pub fn parse(input: &str, role: RadixRole) -> Result<Self, ConversionError> {
        input.trim()
             .parse::<i64>()
             .map_err(|_| ConversionError::InvalidRadix { role,
                                                          value: input.to_string() })
             .and_then(|value| Self::checked(value, role))
    }

    /// Returns the radix as a plain integer.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the radix as an `f64` for the conversion arithmetic.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Returns `true` for base 10.
    pub const fn is_decimal(self) -> bool {
        self.0 == 10
    }

    /// Returns `true` if a digit of the given value exists in this radix.
    pub const fn admits(self, digit_value: u32) -> bool {
        digit_value < self.0
    }

    /// Returns the valid digit symbols of this radix, a prefix of
    /// [`ALPHABET`].
    ///
    /// # Example
    /// ```
    /// use radixa::converter::radix::Radix;
    ///
    /// let hex = Radix::new(16).unwrap();
    /// assert_eq!(hex.alphabet(), "0123456789ABCDEF");
    /// ```
    pub fn alphabet(self) -> &'static str {
        ALPHABET.get(..self.0 as usize).unwrap_or(ALPHABET)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
