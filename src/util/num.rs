use crate::error::ConversionError;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Number of decimals used when a fractional quantity is shown in a trace.
pub const FIXED_DECIMALS: usize = 10;

/// Safely converts an `f64` to `u32` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// The conversion arithmetic produces remainders and integer parts as `f64`;
/// this is how they become digit values again.
///
/// ## Errors
/// Returns `ConversionError::ConversionFailed` for non-finite, negative,
/// out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use radixa::{error::ConversionError, util::num::f64_to_u32_checked};
///
/// assert_eq!(f64_to_u32_checked(35.0).unwrap(), 35);
///
/// let err = f64_to_u32_checked(1.5).unwrap_err();
/// assert!(matches!(err, ConversionError::ConversionFailed { .. }));
///
/// assert!(f64_to_u32_checked(-1.0).is_err());
/// assert!(f64_to_u32_checked(f64::NAN).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u32_checked(value: f64) -> Result<u32, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::ConversionFailed { details:
                                                           format!("Cannot convert non-finite value {value} to a digit") });
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(ConversionError::ConversionFailed { details:
                                                           format!("Value {value} is out of range for a digit") });
    }
    if value.fract() != 0.0 {
        return Err(ConversionError::ConversionFailed { details:
                                                           format!("Value {value} is fractional and cannot be used as a digit") });
    }
    Ok(value as u32)
}

/// Formats a number in its shortest round-tripping decimal form.
///
/// Whole numbers print without a trailing `.0`, and negative zero prints as
/// `0`.
///
/// ## Example
/// ```
/// use radixa::util::num::format_number;
///
/// assert_eq!(format_number(255.0), "255");
/// assert_eq!(format_number(0.625), "0.625");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(-2.5), "-2.5");
/// ```
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Formats a number with exactly [`FIXED_DECIMALS`] digits after the point.
///
/// ## Example
/// ```
/// use radixa::util::num::format_fixed;
///
/// assert_eq!(format_fixed(0.5), "0.5000000000");
/// assert_eq!(format_fixed(1.0 / 3.0), "0.3333333333");
/// ```
pub fn format_fixed(value: f64) -> String {
    format!("{value:.prec$}", prec = FIXED_DECIMALS)
}

/// Returns `true` when `value` is an integer that an `f64` represents
/// exactly, i.e. its magnitude does not exceed [`MAX_SAFE_U64_INT`].
///
/// ## Example
/// ```
/// use radixa::util::num::{MAX_SAFE_U64_INT, is_safe_integer};
///
/// assert!(is_safe_integer(42.0));
/// assert!(!is_safe_integer(0.5));
/// assert!(!is_safe_integer(2.0 * MAX_SAFE_U64_INT as f64));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn is_safe_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_U64_INT as f64
}
