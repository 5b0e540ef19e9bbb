use logos::Logos;

/// Represents a lexical token of a numeral.
///
/// Every character of a numeral is its own token. Letters are folded to
/// uppercase so the validator is case-insensitive.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A digit symbol such as `7`, `F` or `z`, stored uppercase.
    #[regex(r"[0-9A-Za-z]", parse_digit)]
    Digit(char),
    /// The decimal point, written `.` or `,`.
    #[token(".")]
    #[token(",")]
    Separator,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
}

/// Reads the single character of a digit token, folded to uppercase.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(char)`: The uppercase digit symbol.
/// - `None`: If the slice is empty.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next().map(|c| c.to_ascii_uppercase())
}
