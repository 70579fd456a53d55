use thiserror::Error;

/// Errors that can occur while building a digit corpus
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorpusError {
    #[error("Digit must be between 1 and 9, got {0}")]
    DigitOutOfRange(u8),
}
