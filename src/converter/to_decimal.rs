use tracing::trace;

use crate::{
    converter::{
        digit::Digit,
        numeral::Numeral,
        radix::Radix,
        step::{ConversionStep, DigitExpansionStep, DigitRecord},
    },
    error::ConversionError,
};

const DESCRIPTION: &str = "We multiply each digit by the base raised to its position. Integer \
                           positions are positive (right to left from 0), fractional positions \
                           are negative.";

/// The integer part used when a numeral starts at its decimal point.
const ZERO: Digit = Digit { symbol: '0',
                            value:  0, };

/// Converts a numeral written in `radix` to a decimal `f64`.
///
/// Each integer digit contributes `value * radix^(len - 1 - i)` and each
/// fractional digit `value * radix^-(j + 1)`; the contributions are summed in
/// input order. A leading `-` negates the sum. The returned step records
/// every contribution and the positional formula.
///
/// There is no shortcut for base 10; [`crate::convert`] bypasses this
/// function in that case.
///
/// # Errors
/// - `ConversionError::InvalidNumeralForRadix` if `numeral` is not valid in
///   `radix`.
/// - `ConversionError::ConversionFailed` if a position does not fit an `i32`
///   exponent.
///
/// # Example
/// ```
/// use radixa::converter::{radix::Radix, to_decimal::to_decimal};
///
/// let hex = Radix::new(16).unwrap();
/// let (value, step) = to_decimal("FF.8", hex).unwrap();
///
/// assert_eq!(value, 255.5);
/// assert_eq!(step.formula(), Some("(F × 16^1) + (F × 16^0) + (8 × 16^-1)"));
/// ```
pub fn to_decimal(numeral: &str, radix: Radix) -> Result<(f64, ConversionStep), ConversionError> {
    let parsed =
        Numeral::lex(numeral, radix).ok_or_else(|| ConversionError::InvalidNumeralForRadix {
                                                    numeral: numeral.to_string(),
                                                    radix:   radix.get(),
                                                })?;

    expand(&parsed, radix)
}

/// Expands an already checked numeral into its decimal value and trace.
///
/// # Errors
/// Returns `ConversionError::ConversionFailed` if a position does not fit an
/// `i32` exponent.
pub(crate) fn expand(parsed: &Numeral,
                     radix: Radix)
                     -> Result<(f64, ConversionStep), ConversionError> {
    let integer: &[Digit] = if parsed.integer.is_empty() { &[ZERO] } else { &parsed.integer };
    let base = radix.as_f64();

    let mut value = 0.0;
    let mut digits = Vec::with_capacity(integer.len() + parsed.fraction.len());
    let mut terms = Vec::with_capacity(digits.capacity());

    let length = integer.len();
    for (index, digit) in integer.iter().enumerate() {
        let exponent = exponent_from_position(length - 1 - index)?;
        let record = contribution_of(*digit, base, exponent);
        value += record.contribution;
        terms.push(term(&record, radix));
        digits.push(record);
    }

    for (index, digit) in parsed.fraction.iter().enumerate() {
        let exponent = -exponent_from_position(index + 1)?;
        let record = contribution_of(*digit, base, exponent);
        value += record.contribution;
        terms.push(term(&record, radix));
        digits.push(record);
    }

    let mut formula = terms.join(" + ");
    if parsed.negative {
        value = -value;
        formula = format!("-({formula})");
    }

    trace!("Expanded {} digits of {} in base {radix} to {value}",
           digits.len(),
           parsed.canonical());

    let step = DigitExpansionStep { title: format!("Step 1: Convert from base {radix} to decimal"),
                                    description: DESCRIPTION.to_string(),
                                    radix,
                                    formula,
                                    digits,
                                    value };

    Ok((value, ConversionStep::DigitExpansion(step)))
}

/// Computes the positional contribution of a digit.
///
/// A zero digit contributes exactly zero, even where `radix^exponent`
/// overflows to infinity.
fn contribution_of(digit: Digit, base: f64, exponent: i32) -> DigitRecord {
    let contribution = if digit.value == 0 {
        0.0
    } else {
        f64::from(digit.value) * base.powi(exponent)
    };

    DigitRecord { digit: digit.symbol,
                  value: digit.value,
                  exponent,
                  contribution }
}

/// Renders one formula term, `(digit × radix^exponent)`.
fn term(record: &DigitRecord, radix: Radix) -> String {
    format!("({} × {}^{})", record.digit, radix, record.exponent)
}

fn exponent_from_position(position: usize) -> Result<i32, ConversionError> {
    i32::try_from(position).map_err(|_| ConversionError::ConversionFailed { details:
                                                                                 "Numeral has too many digits".to_string() })
}
