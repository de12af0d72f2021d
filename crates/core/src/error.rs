//! Error types for the board model, turn engine and configuration.
//!
//! Every failure here is local and recoverable: a bad click returns an error
//! value to the renderer and the session carries on.

use std::path::PathBuf;

use crate::types::{CellPos, Player};

/// Errors returned by board queries and turn engine actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("tile ({col}, {row}) is outside the board")]
    OutOfBounds { col: i32, row: i32 },

    #[error("unknown piece kind {0:?}")]
    UnknownPieceKind(String),

    #[error("layout row {row} has {len} tiles, expected {expected}")]
    RaggedLayout {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("layout of {rows}x{cols} tiles is too large")]
    LayoutTooLarge { rows: usize, cols: usize },

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
}

/// Reasons a tile click cannot become a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("no piece on {0}")]
    EmptyCell(CellPos),

    #[error("piece on {pos} belongs to {owner}")]
    NotYourPiece { pos: CellPos, owner: Player },

    #[error("destination {to} is occupied")]
    DestinationOccupied { from: CellPos, to: CellPos },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Layout(#[from] GameError),
}
