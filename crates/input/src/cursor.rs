//! Keyboard tile cursor.

use crate::types::CellPos;

/// Tile selected with the arrow keys, clamped to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCursor {
    pos: CellPos,
    rows: u8,
    cols: u8,
}

impl TileCursor {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            pos: CellPos::new(0, 0),
            rows,
            cols,
        }
    }

    pub fn pos(&self) -> CellPos {
        self.pos
    }

    /// Move the cursor, stopping at the edges.
    pub fn step(&mut self, dc: i8, dr: i8) -> CellPos {
        let col = (self.pos.col as i16 + dc as i16).clamp(0, self.cols.saturating_sub(1) as i16);
        let row = (self.pos.row as i16 + dr as i16).clamp(0, self.rows.saturating_sub(1) as i16);
        self.pos = CellPos::new(col as u8, row as u8);
        self.pos
    }

    /// Jump to a tile (e.g. the one last clicked with the mouse).
    pub fn set(&mut self, pos: CellPos) {
        if pos.col < self.cols && pos.row < self.rows {
            self.pos = pos;
        }
    }
}
