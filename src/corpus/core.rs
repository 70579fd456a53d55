use log::{debug, warn};

use crate::corpus::errors::CorpusError;

/// Multiset of the digits still available to an expression.
///
/// Duplicates are independent units: a corpus built from `[4, 4]` allows the
/// digit 4 to be used exactly twice. The evaluator borrows the corpus mutably
/// for the whole parse, so consumption made inside a bracket group is visible
/// to the rest of the expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitCorpus {
    digits: Vec<u8>,
}

impl DigitCorpus {
    /// # Errors
    ///
    /// Returns an error if any digit lies outside `1..=9`.
    pub fn new(digits: &[u8]) -> Result<Self, CorpusError> {
        if let Some(&bad) = digits.iter().find(|d| !(1..=9).contains(*d)) {
            warn!("Rejecting corpus {:?}: digit {} out of range", digits, bad);
            return Err(CorpusError::DigitOutOfRange(bad));
        }

        debug!("Created corpus {:?}", digits);
        Ok(Self {
            digits: digits.to_vec(),
        })
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    /// Removes one occurrence of `digit`, returning whether one was present.
    pub fn remove(&mut self, digit: u8) -> bool {
        match self.digits.iter().position(|&d| d == digit) {
            Some(index) => {
                self.digits.remove(index);
                debug!("Consumed {}, remaining {:?}", digit, self.digits);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits not yet consumed, in their original order
    pub fn remaining(&self) -> &[u8] {
        &self.digits
    }
}
