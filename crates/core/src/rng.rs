//! RNG module - dice rolls
//!
//! Every roll is a single uniform draw from `1..=DICE_FACES`. The roller is
//! seedable so a game (and its tests) can be replayed exactly; without a seed
//! it draws one from the operating system.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::DICE_FACES;

/// Seeded six-sided die
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: SmallRng,
    seed: u64,
}

impl DiceRoller {
    /// Create a roller with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a roller seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Roll the die: a value in `1..=6`
    pub fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DICE_FACES)
    }

    /// Seed this roller was created with (for replaying a session)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::new(1)
    }
}
