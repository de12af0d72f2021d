//! Movement rules - where a piece lands for a given roll
//!
//! Pieces only move along their column. Player one walks down the board
//! (row increases), player two walks up. A move that would leave the board
//! bounces back off the edge by the overshoot:
//!
//! ```text
//! past the last row:  row = max_row - (row - max_row)
//! past row 0:         row = -row
//! ```
//!
//! On boards with at least seven rows one bounce is always enough for a
//! six-sided die. Smaller boards keep bouncing until the row is on the board.

use crate::types::{CellPos, Player};

/// Fold a raw row index back onto `0..=max_row` by reflecting at both edges.
///
/// # Examples
///
/// ```
/// use isoboard_core::rules::reflect_row;
///
/// assert_eq!(reflect_row(11, 7), 3);
/// assert_eq!(reflect_row(-2, 7), 2);
/// assert_eq!(reflect_row(5, 7), 5);
/// ```
pub fn reflect_row(mut row: i32, max_row: i32) -> i32 {
    if max_row <= 0 {
        return 0;
    }
    loop {
        if row > max_row {
            row = max_row - (row - max_row);
        } else if row < 0 {
            row = -row;
        } else {
            return row;
        }
    }
}

/// Destination of a piece owned by `player` standing on `from`, after `dice` steps.
pub fn destination(from: CellPos, player: Player, dice: u8, rows: u8) -> CellPos {
    let max_row = rows.saturating_sub(1) as i32;
    let raw = from.row as i32 + player.forward() * dice as i32;
    CellPos::new(from.col, reflect_row(raw, max_row) as u8)
}
