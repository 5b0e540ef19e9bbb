use tracing::{trace, warn};

use crate::{
    converter::{
        digit::char_of,
        radix::Radix,
        step::{
            ConversionStep, DirectStep, DivisionRecord, MultiplicationRecord, RepeatedDivisionStep,
        },
    },
    error::ConversionError,
    util::num::{f64_to_u32_checked, format_number, is_safe_integer},
};

/// Maximum number of fractional digits produced.
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Fractions at or below this are treated as floating point noise.
pub const FRACTION_EPSILON: f64 = 1e-7;

const DESCRIPTION: &str = "Integer part: divide repeatedly and collect remainders (bottom to \
                           top). Fractional part: multiply repeatedly and collect integer parts \
                           (top to bottom).";

/// Converts a decimal value to a numeral in `radix`.
///
/// The integer part is divided by the radix until the quotient reaches zero;
/// the remainders, read last to first, are the integer digits. The fractional
/// part is multiplied by the radix and the integer part of each product taken
/// as the next digit, for at most [`MAX_FRACTION_DIGITS`] rounds and only
/// while the remaining fraction exceeds [`FRACTION_EPSILON`].
///
/// Zero converts to `"0"` with a trace that records no rounds. There is no
/// shortcut for base 10; [`crate::convert`] bypasses this function in that
/// case.
///
/// # Errors
/// Returns `ConversionError::ConversionFailed` if `value` is infinite or NaN.
///
/// # Example
/// ```
/// use radixa::converter::{from_decimal::from_decimal, radix::Radix};
///
/// let binary = Radix::new(2).unwrap();
///
/// let (numeral, _) = from_decimal(10.0, binary).unwrap();
/// assert_eq!(numeral, "1010");
///
/// let (numeral, _) = from_decimal(-2.75, binary).unwrap();
/// assert_eq!(numeral, "-10.11");
///
/// // 0.1 never terminates in binary, so the expansion stops after ten digits.
/// let (numeral, _) = from_decimal(0.1, binary).unwrap();
/// assert_eq!(numeral, "0.0001100110");
/// ```
pub fn from_decimal(value: f64, radix: Radix) -> Result<(String, ConversionStep), ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::ConversionFailed { details: format!("Cannot convert non-finite value {value}") });
    }

    if value == 0.0 {
        let step = DirectStep::new(format!("Step 2: Convert from decimal to base {radix}"),
                                   "The decimal value is 0.",
                                   "0");
        return Ok(("0".to_string(), ConversionStep::Direct(step)));
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    let integer = magnitude.floor();
    let fraction = magnitude - integer;

    if !is_safe_integer(integer) {
        warn!("Integer part {integer} exceeds the exactly representable range; low digits are approximate");
    }

    let (integer_digits, divisions) = divide(integer, radix)?;
    let (fraction_digits, multiplications) = multiply(fraction, radix)?;

    let mut numeral = String::with_capacity(integer_digits.len() + fraction_digits.len() + 2);
    if negative {
        numeral.push('-');
    }
    numeral.push_str(&integer_digits);
    if !fraction_digits.is_empty() {
        numeral.push('.');
        numeral.push_str(&fraction_digits);
    }

    trace!("Converted {value} to {numeral} in base {radix} using {} divisions and {} multiplications",
           divisions.len(),
           multiplications.len());

    let step = RepeatedDivisionStep { title: format!("Step 2: Convert from decimal ({}) to base {radix}",
                                                     format_number(value)),
                                      description: DESCRIPTION.to_string(),
                                      decimal: value,
                                      radix,
                                      divisions,
                                      multiplications,
                                      numeral: numeral.clone() };

    Ok((numeral, ConversionStep::RepeatedDivision(step)))
}

/// Converts a non-negative whole number by repeated division.
///
/// Returns the digits most significant first together with the division
/// records in the order performed.
fn divide(integer: f64, radix: Radix) -> Result<(String, Vec<DivisionRecord>), ConversionError> {
    if integer == 0.0 {
        return Ok(("0".to_string(), Vec::new()));
    }

    let base = radix.as_f64();
    let mut quotient = integer;
    let mut divisions = Vec::new();

    while quotient > 0.0 {
        let remainder = f64_to_u32_checked(quotient % base)?;
        let next = (quotient / base).floor();
        let digit = digit_symbol(remainder)?;

        divisions.push(DivisionRecord { dividend: quotient,
                                        divisor: radix.get(),
                                        quotient: next,
                                        remainder,
                                        digit });
        quotient = next;
    }

    let digits = divisions.iter().rev().map(|record| record.digit).collect();
    Ok((digits, divisions))
}

/// Converts a fraction in `[0, 1)` by repeated multiplication.
///
/// Returns the digits in the order produced together with the multiplication
/// records.
fn multiply(fraction: f64,
            radix: Radix)
            -> Result<(String, Vec<MultiplicationRecord>), ConversionError> {
    let base = radix.as_f64();
    let mut remaining = fraction;
    let mut digits = String::new();
    let mut multiplications = Vec::new();

    while remaining > FRACTION_EPSILON && multiplications.len() < MAX_FRACTION_DIGITS {
        let product = remaining * base;
        let whole = product.floor();
        let integer_part = f64_to_u32_checked(whole)?;
        let digit = digit_symbol(integer_part)?;
        let next = product - whole;

        multiplications.push(MultiplicationRecord { multiplicand: remaining,
                                                    multiplier: radix.get(),
                                                    product,
                                                    integer_part,
                                                    digit,
                                                    remaining_fraction: next });
        digits.push(digit);
        remaining = next;
    }

    Ok((digits, multiplications))
}

fn digit_symbol(value: u32) -> Result<char, ConversionError> {
    char_of(value).ok_or_else(|| ConversionError::ConversionFailed { details: format!("No digit symbol for value {value}") })
}
