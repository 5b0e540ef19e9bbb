use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    converter::{
        from_decimal::from_decimal,
        numeral::Numeral,
        radix::Radix,
        step::{ConversionStep, DirectStep},
        to_decimal::expand,
    },
    error::{ConversionError, RadixRole},
    util::num::format_number,
};

/// The outcome of a conversion: the numeral in the target radix and the
/// steps that justify it, in the order they happened.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConversionResult {
    final_value: String,
    steps:       Vec<ConversionStep>,
}

impl ConversionResult {
    /// The converted numeral.
    pub fn final_value(&self) -> &str {
        &self.final_value
    }

    /// The step trace, radix to decimal first.
    pub fn steps(&self) -> &[ConversionStep] {
        &self.steps
    }

    /// Consumes the result, returning the numeral and the trace.
    ///
    /// # Example
    /// ```
    /// use radixa::convert;
    ///
    /// let (numeral, steps) = convert("7", 10, 2).unwrap().into_parts();
    /// assert_eq!(numeral, "111");
    /// assert_eq!(steps.len(), 2);
    /// ```
    pub fn into_parts(self) -> (String, Vec<ConversionStep>) {
        (self.final_value, self.steps)
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            if index > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Converts `numeral` from `source` radix to `target` radix.
///
/// Surrounding whitespace is ignored and letters may be in either case.
///
/// # Errors
/// - `ConversionError::EmptyInput` if the numeral is empty after trimming.
/// - `ConversionError::InvalidRadix` if either radix lies outside `2..=36`.
/// - `ConversionError::InvalidNumeralForRadix` if the numeral is not legal in
///   the source radix or has no digits.
/// - `ConversionError::ConversionFailed` if the value overflows an `f64`.
///
/// # Examples
/// ```
/// use radixa::{convert, error::ConversionError};
///
/// let result = convert("FF", 16, 10).unwrap();
/// assert_eq!(result.final_value(), "255");
/// assert_eq!(result.steps().len(), 2);
///
/// let result = convert("255", 10, 16).unwrap();
/// assert_eq!(result.final_value(), "FF");
///
/// let err = convert("10", 1, 10).unwrap_err();
/// assert!(matches!(err, ConversionError::InvalidRadix { .. }));
/// ```
pub fn convert(numeral: &str,
               source: i64,
               target: i64)
               -> Result<ConversionResult, ConversionError> {
    let numeral = normalize(numeral)?;
    let source = Radix::checked(source, RadixRole::Source)?;
    let target = Radix::checked(target, RadixRole::Target)?;

    convert_normalized(&numeral, source, target)
}

/// Converts `numeral` with both radices given as text, as typed into a form.
///
/// # Errors
/// Same as [`convert`]; a radix that is empty or not an integer yields
/// `ConversionError::InvalidRadix`.
///
/// # Example
/// ```
/// use radixa::convert_str;
///
/// let result = convert_str("1010", "2", " 10 ").unwrap();
/// assert_eq!(result.final_value(), "10");
///
/// assert!(convert_str("1010", "", "10").is_err());
/// ```
pub fn convert_str(numeral: &str,
                   source: &str,
                   target: &str)
                   -> Result<ConversionResult, ConversionError> {
    let numeral = normalize(numeral)?;
    let source = Radix::parse(source, RadixRole::Source)?;
    let target = Radix::parse(target, RadixRole::Target)?;

    convert_normalized(&numeral, source, target)
}

/// Converts `numeral` between two already checked radices.
///
/// # Errors
/// Same as [`convert`], except that radices cannot be invalid.
///
/// # Example
/// ```
/// use radixa::{Radix, convert_between};
///
/// let octal = Radix::new(8).unwrap();
/// let result = convert_between("777", octal, Radix::DECIMAL).unwrap();
/// assert_eq!(result.final_value(), "511");
/// ```
pub fn convert_between(numeral: &str,
                       source: Radix,
                       target: Radix)
                       -> Result<ConversionResult, ConversionError> {
    let numeral = normalize(numeral)?;
    convert_normalized(&numeral, source, target)
}

/// Trims and uppercases the numeral, rejecting empty input.
///
/// Only ASCII letters are folded, the same ones the numeral lexer accepts.
fn normalize(numeral: &str) -> Result<String, ConversionError> {
    let numeral = numeral.trim().to_ascii_uppercase();
    if numeral.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    Ok(numeral)
}

fn convert_normalized(numeral: &str,
                      source: Radix,
                      target: Radix)
                      -> Result<ConversionResult, ConversionError> {
    debug!("Converting {numeral} from base {source} to base {target}");

    let parsed = Numeral::lex(numeral, source).filter(Numeral::has_digits)
                                              .ok_or_else(|| {
                                                  ConversionError::InvalidNumeralForRadix {
                                                      numeral: numeral.to_string(),
                                                      radix:   source.get(),
                                                  }
                                              })?;

    let mut steps = Vec::with_capacity(2);

    let decimal = if source.is_decimal() {
        let decimal = parse_decimal(&parsed)?;
        steps.push(ConversionStep::Direct(DirectStep::new("Input is already in decimal",
                                                          format!("The number {numeral} is already in base 10 (decimal)."),
                                                          format_number(decimal))));
        decimal
    } else {
        let (decimal, step) = expand(&parsed, source)?;
        steps.push(step);
        decimal
    };

    if !decimal.is_finite() {
        return Err(ConversionError::ConversionFailed { details: format!("{numeral} in base {source} exceeds the range of a 64-bit float") });
    }
    debug!("Decimal intermediate is {decimal}");

    let final_value = if target.is_decimal() {
        let text = format_number(decimal);
        steps.push(ConversionStep::Direct(DirectStep::new("Target base is decimal",
                                                          format!("The decimal value is {text}."),
                                                          text.clone())));
        text
    } else {
        let (numeral, step) = from_decimal(decimal, target)?;
        steps.push(step);
        numeral
    };

    for step in &steps {
        trace!("{}: {}", step.title(), step.result());
    }
    debug!("Converted {numeral} from base {source} to {final_value} in base {target}");

    Ok(ConversionResult { final_value, steps })
}

/// Reads a base 10 numeral as an `f64`, the comma already being a point.
fn parse_decimal(numeral: &Numeral) -> Result<f64, ConversionError> {
    let text = numeral.canonical();
    text.parse::<f64>()
        .map_err(|e| ConversionError::ConversionFailed { details: format!("Cannot read {text} as a decimal number: {e}") })
}
