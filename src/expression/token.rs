use log::debug;

use crate::expression::operator::Operator;

/// A single non-whitespace character of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Digit(u8),
    Operator(Operator),
    Open,
    Close,
    Invalid(char),
}

impl Token {
    fn from_char(c: char) -> Self {
        match c {
            '1'..='9' => Token::Digit(c as u8 - b'0'),
            '(' => Token::Open,
            ')' => Token::Close,
            _ => Operator::from_symbol(c).map_or(Token::Invalid(c), Token::Operator),
        }
    }

    /// The character this token was read from
    pub fn as_char(self) -> char {
        match self {
            Token::Digit(d) => char::from(b'0' + d),
            Token::Operator(op) => op.symbol(),
            Token::Open => '(',
            Token::Close => ')',
            Token::Invalid(c) => c,
        }
    }
}

/// A token together with its character offset in the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Splits input into one token per non-whitespace character.
///
/// Never fails: unknown characters become [`Token::Invalid`] so the evaluator
/// reports them in scan order alongside every other failure.
pub fn tokenize(expression: &str) -> Vec<Spanned> {
    let tokens: Vec<Spanned> = expression
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, c)| Spanned {
            token: Token::from_char(c),
            position,
        })
        .collect();

    debug!("Tokenized '{}' into {} tokens", expression, tokens.len());
    tokens
}

/// Index of the `)` closing the `(` at `open`, found by tracking depth
pub fn matching_close(tokens: &[Spanned], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, spanned) in tokens.iter().enumerate().skip(open) {
        match spanned.token {
            Token::Open => depth += 1,
            Token::Close => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}
