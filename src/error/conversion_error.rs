#[cfg(feature = "serde")]
use serde::Serialize;

/// Which of the two radices of a conversion an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RadixRole {
    /// The radix the numeral is written in.
    Source,
    /// The radix the numeral is converted into.
    Target,
}

impl std::fmt::Display for RadixRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "Source"),
            Self::Target => write!(f, "Target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
/// Represents all errors that can occur while converting a numeral.
pub enum ConversionError {
    /// The numeral was empty after trimming.
    EmptyInput,
    /// A radix was missing, non-numeric, or outside `2..=36`.
    InvalidRadix {
        /// Whether the source or the target radix was rejected.
        role:  RadixRole,
        /// The rejected input, as the user supplied it.
        value: String,
    },
    /// The numeral contains a character outside the radix alphabet, more
    /// than one separator, a misplaced sign, or no digit at all.
    InvalidNumeralForRadix {
        /// The rejected numeral.
        numeral: String,
        /// The radix it was checked against.
        radix:   u32,
    },
    /// The arithmetic could not produce a result, e.g. the numeral overflows
    /// the range of an `f64`.
    ConversionFailed {
        /// Details about the failure.
        details: String,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter a number to convert"),
            Self::InvalidRadix { role, .. } => {
                write!(f, "{role} base must be between 2 and 36")
            },
            Self::InvalidNumeralForRadix { numeral, radix } => {
                write!(f, "\"{numeral}\" is not a valid number in base {radix}")
            },
            Self::ConversionFailed { details } => {
                write!(f, "Error during conversion: {details}")
            },
        }
    }
}

impl std::error::Error for ConversionError {}
