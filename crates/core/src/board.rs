//! Board module - manages the tile grid
//!
//! The board is a `rows x cols` grid where each tile is empty or holds one piece.
//! Uses a flat row-major vector; dimensions are fixed for the board's lifetime.
//! Coordinates: (col, row) where col grows left to right and row 0 is the far edge.

use crate::error::GameError;
use crate::types::{Cell, CellPos, PieceKind};

/// The game board - flat storage, row-major (row * cols + col)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    /// Create a board from rows of cells.
    ///
    /// Returns `None` when the rows are ragged or either side exceeds 255.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        let mut board = Self::new(u8::try_from(height).ok()?, u8::try_from(width).ok()?);
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                board.cells[y * width + x] = *cell;
            }
        }
        Some(board)
    }

    /// Create a board from rows of piece names.
    ///
    /// Empty (or blank) names are empty tiles; anything else must be a name
    /// accepted by [`PieceKind::from_str`]. Every row must be as long as the
    /// first.
    pub fn from_layout<S: AsRef<str>>(layout: &[Vec<S>]) -> Result<Self, GameError> {
        let expected = layout.first().map(|r| r.len()).unwrap_or(0);
        if let Some((row, r)) = layout.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GameError::RaggedLayout {
                row,
                len: r.len(),
                expected,
            });
        }

        let (Ok(rows), Ok(cols)) = (u8::try_from(layout.len()), u8::try_from(expected)) else {
            return Err(GameError::LayoutTooLarge {
                rows: layout.len(),
                cols: expected,
            });
        };

        let mut board = Self::new(rows, cols);
        for (y, row) in layout.iter().enumerate() {
            for (x, name) in row.iter().enumerate() {
                board.cells[y * expected + x] = parse_cell(name.as_ref())?;
            }
        }
        Ok(board)
    }

    /// Calculate flat index from signed coordinates
    #[inline(always)]
    fn index_signed(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= self.cols as i32 || row < 0 || row >= self.rows as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    #[inline(always)]
    fn index(&self, pos: CellPos) -> Result<usize, GameError> {
        self.index_signed(pos.col as i32, pos.row as i32)
            .ok_or(GameError::OutOfBounds {
                col: pos.col as i32,
                row: pos.row as i32,
            })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Index of the last row
    pub fn max_row(&self) -> u8 {
        self.rows.saturating_sub(1)
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.col < self.cols && pos.row < self.rows
    }

    /// Get the piece on a tile
    pub fn piece_at(&self, pos: CellPos) -> Result<Cell, GameError> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Put a cell value on a tile, returning what was there before
    pub fn place(&mut self, pos: CellPos, cell: Cell) -> Result<Cell, GameError> {
        let idx = self.index(pos)?;
        Ok(std::mem::replace(&mut self.cells[idx], cell))
    }

    /// Move whatever is on `from` onto `to`.
    ///
    /// The source tile is cleared and the destination is overwritten without
    /// checking occupancy. The displaced occupant of `to` is returned so the
    /// caller can tell when a piece was destroyed. Moving a tile onto itself
    /// changes nothing.
    pub fn move_piece(&mut self, from: CellPos, to: CellPos) -> Result<Cell, GameError> {
        let src = self.index(from)?;
        let dst = self.index(to)?;
        if src == dst {
            return Ok(None);
        }

        let kind = self.cells[src].take();
        Ok(std::mem::replace(&mut self.cells[dst], kind))
    }

    /// Number of pieces of one kind on the board
    pub fn count(&self, kind: PieceKind) -> usize {
        self.cells.iter().filter(|c| **c == Some(kind)).count()
    }

    /// Total number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over occupied tiles in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (CellPos, PieceKind)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|kind| (CellPos::new((i % cols) as u8, (i / cols) as u8), kind))
        })
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to rows of cells for display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

fn parse_cell(name: &str) -> Result<Cell, GameError> {
    if name.trim().is_empty() {
        return Ok(None);
    }
    PieceKind::from_str(name)
        .map(Some)
        .ok_or_else(|| GameError::UnknownPieceKind(name.to_string()))
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(8, 8);
        assert_eq!(board.index_signed(0, 0), Some(0));
        assert_eq!(board.index_signed(7, 0), Some(7));
        assert_eq!(board.index_signed(0, 1), Some(8));
        assert_eq!(board.index_signed(7, 7), Some(63));
        assert_eq!(board.index_signed(-1, 0), None);
        assert_eq!(board.index_signed(8, 0), None);
        assert_eq!(board.index_signed(0, 8), None);
    }

    #[test]
    fn test_non_square_board_indexing() {
        let mut board = Board::new(3, 5);
        board.place(CellPos::new(4, 2), Some(PieceKind::Sheep)).unwrap();
        assert_eq!(board.cells[2 * 5 + 4], Some(PieceKind::Sheep));
        assert!(board.piece_at(CellPos::new(5, 0)).is_err());
        assert!(board.piece_at(CellPos::new(0, 3)).is_err());
    }

    #[test]
    fn test_move_onto_self_is_noop() {
        let mut board = Board::new(8, 8);
        let pos = CellPos::new(3, 3);
        board.place(pos, Some(PieceKind::Ostrich)).unwrap();

        assert_eq!(board.move_piece(pos, pos), Ok(None));
        assert_eq!(board.piece_at(pos), Ok(Some(PieceKind::Ostrich)));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![vec![None; 3], vec![None; 2]];
        assert!(Board::from_rows(&rows).is_none());
    }

    #[test]
    fn test_from_layout_reads_names() {
        let board = Board::from_layout(&[vec!["", "Ostritch"], vec!["sheep2", " "]]).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.piece_at(CellPos::new(1, 0)), Ok(Some(PieceKind::Ostrich)));
        assert_eq!(board.piece_at(CellPos::new(0, 1)), Ok(Some(PieceKind::Sheep2)));
        assert_eq!(board.piece_count(), 2);

        assert_eq!(
            Board::from_layout(&[vec!["wolf"]]),
            Err(GameError::UnknownPieceKind("wolf".to_string()))
        );
    }

    #[test]
    fn test_from_layout_rejects_ragged_rows() {
        let layout = vec![vec!["", "ostrich", ""], vec!["sheep"], vec!["", "", ""]];
        assert_eq!(
            Board::from_layout(&layout),
            Err(GameError::RaggedLayout {
                row: 1,
                len: 1,
                expected: 3,
            })
        );

        let wide = vec![vec![""; 300]];
        assert_eq!(
            Board::from_layout(&wide),
            Err(GameError::LayoutTooLarge { rows: 1, cols: 300 })
        );
        assert_eq!(Board::from_rows(&[vec![None; 256]]), None);
    }

    #[test]
    fn test_pieces_iterates_row_major() {
        let mut board = Board::new(2, 2);
        board.place(CellPos::new(1, 1), Some(PieceKind::Sheep)).unwrap();
        board.place(CellPos::new(0, 1), Some(PieceKind::Ostrich)).unwrap();

        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(
            pieces,
            vec![
                (CellPos::new(0, 1), PieceKind::Ostrich),
                (CellPos::new(1, 1), PieceKind::Sheep),
            ]
        );
    }
}
