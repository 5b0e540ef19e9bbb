use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    converter::radix::Radix,
    util::num::{format_fixed, format_number},
};

/// One stage of a conversion, as shown to the user.
///
/// A conversion yields at most two steps: one for reaching the decimal
/// intermediate and one for leaving it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde",
           derive(Serialize),
           serde(tag = "kind", rename_all = "snake_case"))]
pub enum ConversionStep {
    /// Radix to decimal: every digit multiplied by its positional weight.
    DigitExpansion(DigitExpansionStep),
    /// Decimal to radix: repeated division for the integer part and repeated
    /// multiplication for the fractional part.
    RepeatedDivision(RepeatedDivisionStep),
    /// A stage that needed no arithmetic, e.g. a numeral already in base 10.
    Direct(DirectStep),
}

impl ConversionStep {
    /// The heading of the step.
    pub fn title(&self) -> &str {
        match self {
            Self::DigitExpansion(step) => &step.title,
            Self::RepeatedDivision(step) => &step.title,
            Self::Direct(step) => &step.title,
        }
    }

    /// A prose explanation of what the step does.
    pub fn description(&self) -> &str {
        match self {
            Self::DigitExpansion(step) => &step.description,
            Self::RepeatedDivision(step) => &step.description,
            Self::Direct(step) => &step.description,
        }
    }

    /// The positional formula, only present for digit expansions.
    pub fn formula(&self) -> Option<&str> {
        match self {
            Self::DigitExpansion(step) => Some(&step.formula),
            Self::RepeatedDivision(_) | Self::Direct(_) => None,
        }
    }

    /// The value this step arrives at, rendered as text.
    pub fn result(&self) -> String {
        match self {
            Self::DigitExpansion(step) => format_number(step.value),
            Self::RepeatedDivision(step) => step.numeral.clone(),
            Self::Direct(step) => step.result.clone(),
        }
    }
}

impl fmt::Display for ConversionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        write!(f, "{}", self.description())?;

        match self {
            Self::DigitExpansion(step) => {
                write!(f, "\n{}", step.formula)?;
                for record in &step.digits {
                    write!(f, "\n  {}", record.calculation(step.radix))?;
                }
                write!(f, "\nSum = {}", format_number(step.value))
            },
            Self::RepeatedDivision(step) => {
                if !step.divisions.is_empty() {
                    write!(f, "\nInteger part conversion:")?;
                    for record in &step.divisions {
                        write!(f, "\n  {record}")?;
                    }
                }
                if !step.multiplications.is_empty() {
                    write!(f, "\nFractional part conversion:")?;
                    for record in &step.multiplications {
                        write!(f, "\n  {record}")?;
                    }
                }
                write!(f, "\nResult = {}", step.numeral)
            },
            Self::Direct(step) => write!(f, "\n{}", step.result),
        }
    }
}

/// The trace of a radix to decimal conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DigitExpansionStep {
    pub(crate) title:       String,
    pub(crate) description: String,
    pub(crate) radix:       Radix,
    pub(crate) formula:     String,
    pub(crate) digits:      Vec<DigitRecord>,
    pub(crate) value:       f64,
}

impl DigitExpansionStep {
    /// The radix the numeral was written in.
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    /// One record per digit, in input order.
    pub fn digits(&self) -> &[DigitRecord] {
        &self.digits
    }

    /// The sum of all contributions.
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// The positional contribution of a single digit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DigitRecord {
    /// The digit symbol as written.
    pub digit:        char,
    /// The value of the symbol.
    pub value:        u32,
    /// The power of the radix this position carries; negative after the
    /// decimal point.
    pub exponent:     i32,
    /// `value * radix^exponent`.
    pub contribution: f64,
}

impl DigitRecord {
    /// Renders the record as `value × radix^exponent = contribution`.
    ///
    /// Fractional positions show the contribution with ten decimals.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::{radix::Radix, step::DigitRecord};
    ///
    /// let hex = Radix::new(16).unwrap();
    /// let record = DigitRecord { digit:        'F',
    ///                            value:        15,
    ///                            exponent:     1,
    ///                            contribution: 240.0, };
    /// assert_eq!(record.calculation(hex), "15 × 16^1 = 240");
    ///
    /// let record = DigitRecord { digit:        '8',
    ///                            value:        8,
    ///                            exponent:     -1,
    ///                            contribution: 0.5, };
    /// assert_eq!(record.calculation(hex), "8 × 16^-1 = 0.5000000000");
    /// ```
    pub fn calculation(&self, radix: Radix) -> String {
        let contribution = if self.exponent < 0 {
            format_fixed(self.contribution)
        } else {
            format_number(self.contribution)
        };
        format!("{} × {}^{} = {}", self.value, radix, self.exponent, contribution)
    }
}

/// The trace of a decimal to radix conversion.
///
/// # Example
/// ```
/// use radixa::{ConversionStep, convert};
///
/// let result = convert("2.5", 10, 2).unwrap();
/// let ConversionStep::RepeatedDivision(step) = &result.steps()[1] else {
///     panic!("expected a repeated division step");
/// };
///
/// assert_eq!(step.decimal(), 2.5);
/// assert_eq!(step.radix().get(), 2);
/// assert_eq!(step.numeral(), "10.1");
/// assert_eq!(step.divisions().len(), 2);
/// assert_eq!(step.multiplications().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RepeatedDivisionStep {
    pub(crate) title:           String,
    pub(crate) description:     String,
    pub(crate) decimal:         f64,
    pub(crate) radix:           Radix,
    pub(crate) divisions:       Vec<DivisionRecord>,
    pub(crate) multiplications: Vec<MultiplicationRecord>,
    pub(crate) numeral:         String,
}

impl RepeatedDivisionStep {
    /// The decimal value that was converted.
    pub const fn decimal(&self) -> f64 {
        self.decimal
    }

    /// The target radix.
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    /// Division records in the order performed. Read bottom to top, their
    /// digits spell the integer part.
    pub fn divisions(&self) -> &[DivisionRecord] {
        &self.divisions
    }

    /// Multiplication records in the order performed. Read top to bottom,
    /// their digits spell the fractional part.
    pub fn multiplications(&self) -> &[MultiplicationRecord] {
        &self.multiplications
    }

    /// The resulting numeral.
    pub fn numeral(&self) -> &str {
        &self.numeral
    }
}

/// One round of the repeated division.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DivisionRecord {
    /// The running quotient before this round.
    pub dividend:  f64,
    /// The target radix.
    pub divisor:   u32,
    /// `floor(dividend / divisor)`.
    pub quotient:  f64,
    /// `dividend mod divisor`.
    pub remainder: u32,
    /// The symbol of the remainder.
    pub digit:     char,
}

impl fmt::Display for DivisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{} ÷ {} = {} remainder {} (digit: {})",
               format_number(self.dividend),
               self.divisor,
               format_number(self.quotient),
               self.remainder,
               self.digit)
    }
}

/// One round of the repeated multiplication.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MultiplicationRecord {
    /// The fraction before this round.
    pub multiplicand:       f64,
    /// The target radix.
    pub multiplier:         u32,
    /// `multiplicand * multiplier`.
    pub product:            f64,
    /// `floor(product)`, the value of the produced digit.
    pub integer_part:       u32,
    /// The symbol of the integer part.
    pub digit:              char,
    /// `product - integer_part`, the fraction carried into the next round.
    pub remaining_fraction: f64,
}

impl fmt::Display for MultiplicationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{} × {} = {} → integer part: {} (digit: {})",
               format_fixed(self.multiplicand),
               self.multiplier,
               format_fixed(self.product),
               self.integer_part,
               self.digit)
    }
}

/// A stage that passes a value through without arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DirectStep {
    pub(crate) title:       String,
    pub(crate) description: String,
    pub(crate) result:      String,
}

impl DirectStep {
    pub(crate) fn new(title: impl Into<String>,
                      description: impl Into<String>,
                      result: impl Into<String>)
                      -> Self {
        Self { title:       title.into(),
               description: description.into(),
               result:      result.into(), }
    }
}
