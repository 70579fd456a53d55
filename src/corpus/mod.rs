//! Digit corpus: the multiset of digits a round lets the player spend

mod core;
mod errors;

pub use core::DigitCorpus;
pub use errors::CorpusError;
