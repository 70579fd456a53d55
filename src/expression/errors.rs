use thiserror::Error;

/// Reasons an expression is rejected. Positions are character offsets into
/// the original input, whitespace included.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Digit {digit} at position {position} is not available")]
    DigitNotAvailable { digit: u8, position: usize },
    #[error("Multi-digit number at position {position}")]
    MultiDigitNumber { position: usize },
    #[error("Missing operator before position {position}")]
    MissingOperator { position: usize },
    #[error("Operator at position {position} is missing an operand")]
    MissingOperand { position: usize },
    #[error("Unmatched parenthesis at position {position}")]
    UnmatchedParenthesis { position: usize },
    #[error("Digits left unused: {remaining:?}")]
    UnusedDigits { remaining: Vec<u8> },
    #[error("Invalid token '{token}' at position {position}")]
    InvalidToken { token: char, position: usize },
}
