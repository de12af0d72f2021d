//! Game configuration, loadable from JSON.
//!
//! ```json
//! {
//!   "rows": 8,
//!   "cols": 8,
//!   "layout": [["", "ostrich", "", "ostrich"], ["sheep2", "", "sheep2", ""]],
//!   "tile_size": 4,
//!   "collision": "block",
//!   "seed": 12345
//! }
//! ```
//!
//! Every field is optional. Without a layout the sample 8x8 layout is used;
//! a board of any other size starts empty.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{ConfigError, GameError};
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TILE_SIZE, MAX_BOARD_DIM, SAMPLE_LAYOUT};

/// What happens when a piece would land on an occupied tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Reject the move; the turn stays with the player.
    #[default]
    Block,
    /// Replace the occupant; the displaced piece leaves the board.
    Overwrite,
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// Starting pieces, one entry per tile, `""` for an empty tile.
    pub layout: Option<Vec<Vec<String>>>,
    /// Tile width in terminal columns.
    pub tile_size: u16,
    pub collision: CollisionPolicy,
    /// Dice seed; a random one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            layout: None,
            tile_size: DEFAULT_TILE_SIZE,
            collision: CollisionPolicy::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check dimensions and layout consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Validation(
                "rows and cols must be at least 1".to_string(),
            ));
        }
        if self.rows > MAX_BOARD_DIM || self.cols > MAX_BOARD_DIM {
            return Err(ConfigError::Validation(format!(
                "board is limited to {0}x{0} tiles",
                MAX_BOARD_DIM
            )));
        }
        if self.tile_size < 2 {
            return Err(ConfigError::Validation(
                "tile_size must be at least 2".to_string(),
            ));
        }
        if let Some(layout) = &self.layout {
            if layout.len() != self.rows as usize {
                return Err(ConfigError::Validation(format!(
                    "layout has {} rows, expected {}",
                    layout.len(),
                    self.rows
                )));
            }
            if let Some((y, row)) = layout
                .iter()
                .enumerate()
                .find(|(_, row)| row.len() != self.cols as usize)
            {
                return Err(ConfigError::Validation(format!(
                    "layout row {} has {} tiles, expected {}",
                    y,
                    row.len(),
                    self.cols
                )));
            }
        }
        self.initial_board()?;
        Ok(())
    }

    /// Build the starting board described by this configuration.
    pub fn initial_board(&self) -> Result<Board, GameError> {
        match &self.layout {
            Some(layout) => parse_layout(layout),
            None if self.rows == DEFAULT_ROWS && self.cols == DEFAULT_COLS => {
                let rows: Vec<Vec<String>> = SAMPLE_LAYOUT
                    .iter()
                    .map(|row| row.iter().map(|s| s.to_string()).collect())
                    .collect();
                parse_layout(&rows)
            }
            None => Ok(Board::new(self.rows, self.cols)),
        }
    }
}

/// Parse rows of piece names into a board.
///
/// Empty names are empty tiles; anything else must be a known piece kind.
pub fn parse_layout(layout: &[Vec<String>]) -> Result<Board, GameError> {
    Board::from_layout(layout)
}
