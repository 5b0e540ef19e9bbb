/// The core module orchestrates a complete conversion.
///
/// It gates the input through the validator, runs the radix to decimal and
/// decimal to radix stages (bypassing either one when its radix is 10), and
/// collects the resulting trace into a `ConversionResult`.
///
/// # Responsibilities
/// - Trims and normalizes the numeral, rejects empty input.
/// - Checks both radices and the numeral before any arithmetic happens.
/// - Surfaces numeric overflow as an error instead of a partial result.
pub mod core;
/// Bidirectional mapping between digit values and digit symbols.
pub mod digit;
/// Decimal to radix conversion by repeated division and multiplication.
///
/// The integer part is converted by dividing by the radix and collecting the
/// remainders, the fractional part by multiplying by the radix and collecting
/// the integer parts, with a fixed cap on the number of fractional digits.
pub mod from_decimal;
/// The lexer module tokenizes numerals.
///
/// The lexer reads the raw numeral text and produces a stream of digit,
/// separator, and sign tokens. Any character that is none of those is a
/// lexical error, which makes the numeral invalid.
pub mod lexer;
/// The split form of a numeral: sign, integer digits, fractional digits.
pub mod numeral;
/// The radix newtype and its digit alphabet.
pub mod radix;
/// The step trace data model and its plain text rendering.
///
/// Each stage of a conversion produces exactly one `ConversionStep`. Steps are
/// a tagged enum so a consumer matches on the kind of stage instead of probing
/// for optional fields.
pub mod step;
/// Radix to decimal conversion by positional expansion.
///
/// Every digit is multiplied by the radix raised to its position and the
/// contributions are summed. Integer positions count up from zero at the
/// rightmost integer digit, fractional positions count down from minus one.
pub mod to_decimal;
/// Checks whether a string is a legal numeral for a given radix.
pub mod validator;
