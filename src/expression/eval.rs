use log::debug;

use crate::corpus::DigitCorpus;
use crate::expression::errors::ParseError;
use crate::expression::operator::Operator;
use crate::expression::token::{Spanned, Token, matching_close, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// The whole expression: every digit of the corpus must be spent
    TopLevel,
    /// A bracket group: digits may remain for the enclosing expression
    Nested,
}

/// Value and operator stacks for one bracket level
#[derive(Debug, Default)]
struct Frame {
    values: Vec<f64>,
    operators: Vec<Operator>,
}

impl Frame {
    /// True when the last thing pushed was a value, so the next token must be
    /// an operator.
    fn expects_operator(&self) -> bool {
        self.values.len() > self.operators.len()
    }

    fn push_operator(&mut self, incoming: Operator) {
        while self
            .operators
            .last()
            .is_some_and(|top| top.precedence() >= incoming.precedence())
        {
            if !self.reduce() {
                break;
            }
        }
        self.operators.push(incoming);
    }

    /// Pops one operator and its two operands and pushes the result.
    fn reduce(&mut self) -> bool {
        let (Some(op), Some(right), Some(left)) =
            (self.operators.pop(), self.values.pop(), self.values.pop())
        else {
            return false;
        };

        let result = op.apply(left, right);
        debug!("Reduced {} {} {} = {}", left, op, right, result);
        self.values.push(result);
        true
    }

    fn drain(mut self) -> Option<f64> {
        while !self.operators.is_empty() {
            if !self.reduce() {
                return None;
            }
        }

        match self.values.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }
}

/// Evaluates `expression`, consuming one corpus digit per digit token.
///
/// The expression must use every digit of the corpus exactly once. On
/// failure the corpus may be partially consumed and should be discarded.
///
/// # Errors
///
/// Returns the first rule violation found scanning left to right; see
/// [`ParseError`] for the possible kinds.
pub fn evaluate(corpus: &mut DigitCorpus, expression: &str) -> Result<f64, ParseError> {
    debug!(
        "Evaluating '{}' against corpus {:?}",
        expression,
        corpus.remaining()
    );

    let tokens = tokenize(expression);
    let result = evaluate_tokens(corpus, &tokens, Scope::TopLevel);

    match &result {
        Ok(value) => debug!("Expression evaluated to: {}", value),
        Err(e) => debug!("Expression rejected: {}", e),
    }

    result
}

fn evaluate_tokens(
    corpus: &mut DigitCorpus,
    tokens: &[Spanned],
    scope: Scope,
) -> Result<f64, ParseError> {
    let Some(last) = tokens.last() else {
        return Err(ParseError::EmptyExpression);
    };

    let mut frame = Frame::default();
    let mut index = 0;

    while let Some(&Spanned { token, position }) = tokens.get(index) {
        match token {
            Token::Digit(digit) => {
                if !corpus.contains(digit) {
                    return Err(ParseError::DigitNotAvailable { digit, position });
                }
                if let Some(next) = tokens.get(index + 1)
                    && matches!(next.token, Token::Digit(_))
                    && next.position == position + 1
                {
                    return Err(ParseError::MultiDigitNumber { position });
                }
                if frame.expects_operator() {
                    return Err(ParseError::MissingOperator { position });
                }

                frame.values.push(f64::from(digit));
                corpus.remove(digit);
            }
            Token::Open => {
                if frame.expects_operator() {
                    return Err(ParseError::MissingOperator { position });
                }
                let close = matching_close(tokens, index)
                    .ok_or(ParseError::UnmatchedParenthesis { position })?;

                let inner = tokens.get(index + 1..close).unwrap_or_default();
                debug!("Descending into bracket group at {}", position);
                let value = evaluate_tokens(corpus, inner, Scope::Nested)?;

                frame.values.push(value);
                index = close;
            }
            Token::Operator(op) => {
                if !frame.expects_operator() {
                    return Err(ParseError::MissingOperand { position });
                }
                frame.push_operator(op);
            }
            Token::Close | Token::Invalid(_) => {
                return Err(ParseError::InvalidToken {
                    token: token.as_char(),
                    position,
                });
            }
        }
        index += 1;
    }

    if scope == Scope::TopLevel && !corpus.is_empty() {
        return Err(ParseError::UnusedDigits {
            remaining: corpus.remaining().to_vec(),
        });
    }

    frame.drain().ok_or(ParseError::MissingOperand {
        position: last.position,
    })
}
