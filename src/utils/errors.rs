use thiserror::Error;

/// Errors that can occur while reading a digit list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit list cannot be empty")]
    EmptyDigitString,
    #[error("Digit list must contain only digits 1-9: {0}")]
    InvalidDigitString(String),
    #[error("Expected {expected} digits, found {found}")]
    WrongDigitCount { expected: usize, found: usize },
}
