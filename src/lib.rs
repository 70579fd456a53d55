//! Twentyfour - A checker for 24 Game answers
//!
//! Given four digits from 1 to 9, a player writes an infix expression using
//! each digit exactly once with `+ - * /` and parentheses. This library
//! validates such an expression against the dealt digits and evaluates it.

pub mod corpus;
pub mod expression;
pub mod game;
pub mod utils;

// Re-export the main public API
pub use corpus::{CorpusError, DigitCorpus};
pub use expression::{Operator, ParseError, evaluate};
pub use game::{DigitGenerator, GameError, RandomDigits, Round, Verdict};
pub use utils::{UtilsError, parse_digits};

/// Evaluate an expression against the given digits
///
/// This is a convenience function that builds a fresh corpus from `digits`
/// and evaluates `expression` against it.
///
/// # Arguments
///
/// * `digits` - The digits the expression must use, each in `1..=9`
/// * `expression` - Infix expression text
///
/// # Errors
///
/// This function will return an error if:
/// * A digit is outside `1..=9`
/// * The expression breaks any rule of the game (see [`ParseError`])
///
/// # Examples
///
/// ```
/// use twentyfour::evaluate_digits;
///
/// let value = evaluate_digits(&[8, 8, 7, 4], "(7 - (8 / 8)) * 4");
/// assert_eq!(value, Ok(24.0));
///
/// assert!(evaluate_digits(&[1, 2, 3, 4], "1 + 2 + 3").is_err());
/// ```
pub fn evaluate_digits(digits: &[u8], expression: &str) -> Result<f64, GameError> {
    let mut corpus = DigitCorpus::new(digits)?;
    Ok(evaluate(&mut corpus, expression)?)
}
