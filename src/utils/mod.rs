//! Parsing of user-supplied digit lists

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::parse_digits;
