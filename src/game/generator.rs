use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::constants::DIGIT_COUNT;

/// Source of the digits dealt at the start of a round
pub trait DigitGenerator {
    fn digits(&mut self) -> [u8; DIGIT_COUNT];
}

/// Deals each digit independently and uniformly from `1..=9`
pub struct RandomDigits {
    rng: StdRng,
}

impl RandomDigits {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        debug!("Seeding digit generator with {}", seed);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDigits {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGenerator for RandomDigits {
    fn digits(&mut self) -> [u8; DIGIT_COUNT] {
        let digits: [u8; DIGIT_COUNT] = std::array::from_fn(|_| self.rng.random_range(1..=9));
        debug!("Dealt digits {:?}", digits);
        digits
    }
}
