use log::{debug, info};

use crate::corpus::DigitCorpus;
use crate::expression::{ParseError, evaluate};
use crate::game::constants::{DIGIT_COUNT, TARGET, TOLERANCE};
use crate::game::errors::GameError;
use crate::game::generator::DigitGenerator;

/// Outcome of checking one player answer
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Correct,
    /// A valid expression that does not reach the target
    Incorrect(f64),
    Invalid(ParseError),
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Line shown to the player. Every parse failure maps to the same text.
    pub fn message(&self) -> String {
        match self {
            Verdict::Correct => format!("yes, this is indeed {}", TARGET),
            Verdict::Incorrect(value) => format!("no, this is {}", value),
            Verdict::Invalid(_) => "sorry, this is not a valid expression".to_string(),
        }
    }
}

/// One round of the game: the four dealt digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    digits: [u8; DIGIT_COUNT],
    corpus: DigitCorpus,
}

impl Round {
    /// # Errors
    ///
    /// Returns an error if any digit lies outside `1..=9`.
    pub fn new(digits: [u8; DIGIT_COUNT]) -> Result<Self, GameError> {
        let corpus = DigitCorpus::new(&digits)?;
        Ok(Self { digits, corpus })
    }

    pub fn generate<G: DigitGenerator>(generator: &mut G) -> Result<Self, GameError> {
        Self::new(generator.digits())
    }

    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.digits
    }

    /// Prompt line, e.g. `solve: 8 4 7 4`
    pub fn prompt(&self) -> String {
        let digits: Vec<String> = self.digits.iter().map(ToString::to_string).collect();
        format!("solve: {}", digits.join(" "))
    }

    /// Evaluates `answer` against a fresh corpus of this round's digits.
    pub fn check(&self, answer: &str) -> Verdict {
        let shown = answer.trim();
        info!("Checking answer '{}' for digits {:?}", shown, self.digits);

        let mut corpus = self.corpus.clone();
        match evaluate(&mut corpus, answer) {
            Ok(value) if (value - TARGET).abs() < TOLERANCE => {
                debug!("Answer reaches target");
                Verdict::Correct
            }
            Ok(value) => {
                debug!("Answer evaluates to {}, not {}", value, TARGET);
                Verdict::Incorrect(value)
            }
            Err(e) => {
                // The kind stays out of user-visible log levels.
                debug!("Invalid answer '{}': {}", shown, e);
                Verdict::Invalid(e)
            }
        }
    }
}
