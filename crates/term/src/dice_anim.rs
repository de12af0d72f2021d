//! Display-only dice reveal.
//!
//! The turn engine draws the real value in one step. This animation only
//! decides which face the dice control shows while the reveal runs: a random
//! face per frame for [`ROLL_FRAMES`] frames of [`ROLL_FRAME_MS`], then the
//! real value. It never touches game state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::{DICE_FACES, ROLL_FRAMES, ROLL_FRAME_MS};

#[derive(Debug, Clone)]
pub struct DiceAnimation {
    rng: SmallRng,
    target: u8,
    face: u8,
    frames_left: u8,
    frame_elapsed_ms: u32,
}

impl DiceAnimation {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            target: 1,
            face: 1,
            frames_left: 0,
            frame_elapsed_ms: 0,
        }
    }

    /// Start a reveal that settles on `target`.
    pub fn start(&mut self, target: u8) {
        self.target = target.clamp(1, DICE_FACES);
        self.frames_left = ROLL_FRAMES;
        self.frame_elapsed_ms = 0;
        self.face = self.random_face();
    }

    pub fn is_running(&self) -> bool {
        self.frames_left > 0
    }

    /// Face to draw right now; `None` when idle.
    pub fn face(&self) -> Option<u8> {
        self.is_running().then_some(self.face)
    }

    /// Time until the next frame change, for sizing the event poll timeout.
    pub fn time_to_next_frame_ms(&self) -> Option<u32> {
        self.is_running()
            .then(|| ROLL_FRAME_MS.saturating_sub(self.frame_elapsed_ms))
    }

    /// Advance the reveal by `elapsed_ms`.
    ///
    /// Returns `true` when the displayed face changed or the reveal finished.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_running() {
            return false;
        }

        let mut changed = false;
        self.frame_elapsed_ms = self.frame_elapsed_ms.saturating_add(elapsed_ms);
        while self.frames_left > 0 && self.frame_elapsed_ms >= ROLL_FRAME_MS {
            self.frame_elapsed_ms -= ROLL_FRAME_MS;
            self.frames_left -= 1;
            changed = true;
            if self.frames_left > 0 {
                self.face = self.random_face();
            } else {
                self.face = self.target;
                self.frame_elapsed_ms = 0;
            }
        }
        changed
    }

    /// Drop any reveal in progress.
    pub fn cancel(&mut self) {
        self.frames_left = 0;
        self.frame_elapsed_ms = 0;
    }

    fn random_face(&mut self) -> u8 {
        self.rng.gen_range(1..=DICE_FACES)
    }
}

impl Default for DiceAnimation {
    fn default() -> Self {
        Self::new(0)
    }
}
