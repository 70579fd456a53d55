//! Expression module: tokenizer, operators and the two-stack evaluator

mod errors;
mod eval;
mod operator;
mod token;

pub use errors::ParseError;
pub use eval::evaluate;
pub use operator::Operator;
pub use token::{Spanned, Token, tokenize};

#[cfg(test)]
mod tests;
