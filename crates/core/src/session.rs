//! Session controller - owns the game and its audio collaborator.
//!
//! The renderer talks to a [`Session`] instead of to the [`GameState`]. The
//! sound cue fires right after the clicked piece is identified and before the
//! ownership check, so clicking an opponent's piece still plays that piece's
//! sound even though the move is rejected.

use crate::error::GameError;
use crate::game_state::{GameState, Outcome};
use crate::snapshot::GameSnapshot;
use crate::types::{BoardAction, Phase, Species};

/// Plays the sound associated with a species. Fire-and-forget.
pub trait AudioCue {
    fn play(&mut self, species: Species);
}

/// Cue that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioCue for Silent {
    fn play(&mut self, _species: Species) {}
}

/// A running game plus the collaborators it drives.
#[derive(Debug)]
pub struct Session<C: AudioCue> {
    game: GameState,
    cue: C,
}

impl<C: AudioCue> Session<C> {
    pub fn new(game: GameState, cue: C) -> Self {
        Self { game, cue }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cue(&self) -> &C {
        &self.cue
    }

    pub fn cue_mut(&mut self) -> &mut C {
        &mut self.cue
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Forward an action from the renderer to the turn engine.
    pub fn handle(&mut self, action: BoardAction) -> Result<Outcome, GameError> {
        if let BoardAction::TileClicked(pos) = action {
            if self.game.phase() == Phase::AwaitingMove {
                if let Ok(Some(kind)) = self.game.piece_at(pos) {
                    self.cue.play(kind.species());
                }
            }
        }

        let result = self.game.apply_action(action);
        if let Err(err) = &result {
            tracing::debug!(action = action.as_str(), %err, "action rejected");
        }
        result
    }
}
