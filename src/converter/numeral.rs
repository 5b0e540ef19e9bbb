use logos::Logos;

use crate::converter::{digit::Digit, lexer::Token, radix::Radix};

/// A numeral split into its sign, integer digits, and fractional digits.
///
/// Produced by [`Numeral::lex`], which also enforces every rule of a legal
/// numeral, so holding a `Numeral` means the text was valid for its radix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Numeral {
    /// `true` if the numeral started with `-`.
    pub negative: bool,
    /// Digits before the decimal point, most significant first.
    pub integer:  Vec<Digit>,
    /// Digits after the decimal point, most significant first.
    pub fraction: Vec<Digit>,
}

impl Numeral {
    /// Tokenizes and checks `text` against `radix`.
    ///
    /// Returns `None` if the text contains a character that is neither a digit
    /// of the radix, a decimal point, nor a leading sign, or if it contains
    /// more than one decimal point.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::{numeral::Numeral, radix::Radix};
    ///
    /// let hex = Radix::new(16).unwrap();
    /// let numeral = Numeral::lex("-1f,8", hex).unwrap();
    ///
    /// assert!(numeral.negative);
    /// assert_eq!(numeral.integer.len(), 2);
    /// assert_eq!(numeral.fraction[0].value, 8);
    ///
    /// assert!(Numeral::lex("1-2", hex).is_none());
    /// ```
    pub fn lex(text: &str, radix: Radix) -> Option<Self> {
        let mut numeral = Self::default();
        let mut in_fraction = false;

        for (index, token) in Token::lexer(text).enumerate() {
            match token.ok()? {
                Token::Digit(symbol) => {
                    let digit = Digit::from_symbol(symbol)?;
                    if !radix.admits(digit.value) {
                        return None;
                    }
                    if in_fraction {
                        numeral.fraction.push(digit);
                    } else {
                        numeral.integer.push(digit);
                    }
                },
                Token::Separator if !in_fraction => in_fraction = true,
                Token::Minus if index == 0 => numeral.negative = true,
                Token::Plus if index == 0 => {},
                _ => return None,
            }
        }

        Some(numeral)
    }

    /// Returns `true` if the numeral has at least one digit.
    pub fn has_digits(&self) -> bool {
        !self.integer.is_empty() || !self.fraction.is_empty()
    }

    /// Total number of digits on both sides of the decimal point.
    pub fn digit_count(&self) -> usize {
        self.integer.len() + self.fraction.len()
    }

    /// Renders the numeral with a `.` decimal point, a `0` in front of a bare
    /// fraction, and no trailing point.
    ///
    /// # Example
    /// ```
    /// use radixa::converter::{numeral::Numeral, radix::Radix};
    ///
    /// let numeral = Numeral::lex("-,5", Radix::DECIMAL).unwrap();
    /// assert_eq!(numeral.canonical(), "-0.5");
    ///
    /// let numeral = Numeral::lex("+12.", Radix::DECIMAL).unwrap();
    /// assert_eq!(numeral.canonical(), "12");
    /// ```
    pub fn canonical(&self) -> String {
        let mut text = String::with_capacity(self.digit_count() + 3);

        if self.negative {
            text.push('-');
        }
        if self.integer.is_empty() {
            text.push('0');
        }
        text.extend(self.integer.iter().map(|digit| digit.symbol));
        if !self.fraction.is_empty() {
            text.push('.');
            text.extend(self.fraction.iter().map(|digit| digit.symbol));
        }

        text
    }
}
