pub mod constants;
mod core;
mod errors;
mod generator;

pub use core::{Round, Verdict};
pub use errors::GameError;
pub use generator::{DigitGenerator, RandomDigits};
