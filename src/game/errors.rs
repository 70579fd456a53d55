use thiserror::Error;

use crate::corpus::CorpusError;
use crate::expression::ParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Corpus error: {0}")]
    CorpusError(#[from] CorpusError),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}
