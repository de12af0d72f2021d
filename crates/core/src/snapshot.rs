//! Read-only view of a game for renderers.

use crate::types::{Cell, CellPos, Phase, Player};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major cells
    pub cells: Vec<Cell>,
    pub phase: Phase,
    pub active_player: Player,
    pub dice: Option<u8>,
    /// Last value rolled, kept after the move so the die keeps showing it.
    pub last_roll: u8,
    pub selected: Option<CellPos>,
    /// Where the selected piece would land with the current roll.
    pub preview: Option<CellPos>,
    pub turn: u32,
}

impl GameSnapshot {
    pub fn cell(&self, pos: CellPos) -> Cell {
        if pos.col >= self.cols || pos.row >= self.rows {
            return None;
        }
        self.cells[pos.row as usize * self.cols as usize + pos.col as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            phase: Phase::AwaitingRoll,
            active_player: Player::One,
            dice: None,
            last_roll: 1,
            selected: None,
            preview: None,
            turn: 0,
        }
    }
}
