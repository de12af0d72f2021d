//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The sample board is 8x8 (earlier layouts used 10x10). Dimensions are
//! configurable up to [`MAX_BOARD_DIM`] in either direction.
//!
//! - **Columns**: indexed `0..cols`, left to right
//! - **Rows**: indexed `0..rows`, row 0 is the far (top) edge
//!
//! # Pieces and Owners
//!
//! | Kind | Species | Owner | Direction |
//! |------|---------|-------|-----------|
//! | `Ostrich`, `Ostrich2` | Ostrich | Player one | down (row increases) |
//! | `Sheep`, `Sheep2` | Sheep | Player two | up (row decreases) |
//!
//! The second variant of each species only changes how the piece looks.
//!
//! # Dice Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DICE_FACES` | 6 | Faces on the die |
//! | `ROLL_FRAMES` | 10 | Frames in the reveal animation |
//! | `ROLL_FRAME_MS` | 100 | Duration of one reveal frame |
//!
//! # Examples
//!
//! ```
//! use isoboard_types::{BoardAction, CellPos, PieceKind, Player, Species};
//!
//! let kind = PieceKind::from_str("ostritch").unwrap();
//! assert_eq!(kind, PieceKind::Ostrich);
//! assert_eq!(kind.species(), Species::Ostrich);
//! assert_eq!(kind.owner(), Player::One);
//!
//! let action = BoardAction::TileClicked(CellPos::new(2, 0));
//! assert_eq!(action.as_str(), "tileClicked");
//! ```

/// Default board width in tiles.
pub const DEFAULT_COLS: u8 = 8;

/// Default board height in tiles.
pub const DEFAULT_ROWS: u8 = 8;

/// Largest supported extent in either direction.
pub const MAX_BOARD_DIM: u8 = 26;

/// Number of faces on the die.
pub const DICE_FACES: u8 = 6;

/// Number of random faces shown before the die settles.
pub const ROLL_FRAMES: u8 = 10;

/// Duration of one dice reveal frame in milliseconds.
pub const ROLL_FRAME_MS: u32 = 100;

/// Default tile width in terminal columns.
pub const DEFAULT_TILE_SIZE: u16 = 4;

/// Sample starting layout, row by row, using the names accepted by
/// [`PieceKind::from_str`]. Empty strings are empty tiles.
pub const SAMPLE_LAYOUT: [[&str; 8]; 8] = [
    ["", "ostrich", "", "ostrich", "", "ostrich", "", "ostrich"],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["sheep2", "", "sheep2", "", "sheep2", "", "sheep2", ""],
];


/// The two animal species on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Sheep,
    Ostrich,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Sheep, Species::Ostrich];

    /// The player who owns every piece of this species.
    pub fn owner(&self) -> Player {
        match self {
            Species::Ostrich => Player::One,
            Species::Sheep => Player::Two,
        }
    }

    /// Caption shown when the species' sound cue plays.
    pub fn call(&self) -> &'static str {
        match self {
            Species::Sheep => "baa!",
            Species::Ostrich => "boom!",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Sheep => "sheep",
            Species::Ostrich => "ostrich",
        }
    }
}

/// Piece kinds that can occupy a tile.
///
/// Each species comes in two variants that only differ in appearance:
/// - **Sheep** / **Sheep2**: owned by player two
/// - **Ostrich** / **Ostrich2**: owned by player one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Sheep,
    Sheep2,
    Ostrich,
    Ostrich2,
}

impl PieceKind {
    /// All kinds, in a stable order.
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Sheep,
        PieceKind::Sheep2,
        PieceKind::Ostrich,
        PieceKind::Ostrich2,
    ];

    /// Parse piece kind from a layout name (case-insensitive)
    ///
    /// The historical spelling `ostritch` is accepted as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use isoboard_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("Sheep2"), Some(PieceKind::Sheep2));
    /// assert_eq!(PieceKind::from_str("ostritch2"), Some(PieceKind::Ostrich2));
    /// assert_eq!(PieceKind::from_str("grass1"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sheep" => Some(PieceKind::Sheep),
            "sheep2" => Some(PieceKind::Sheep2),
            "ostrich" | "ostritch" => Some(PieceKind::Ostrich),
            "ostrich2" | "ostritch2" => Some(PieceKind::Ostrich2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Sheep => "sheep",
            PieceKind::Sheep2 => "sheep2",
            PieceKind::Ostrich => "ostrich",
            PieceKind::Ostrich2 => "ostrich2",
        }
    }

    pub fn species(&self) -> Species {
        match self {
            PieceKind::Sheep | PieceKind::Sheep2 => Species::Sheep,
            PieceKind::Ostrich | PieceKind::Ostrich2 => Species::Ostrich,
        }
    }

    pub fn owner(&self) -> Player {
        self.species().owner()
    }

    /// True for the alternate look of the species.
    pub fn is_variant(&self) -> bool {
        matches!(self, PieceKind::Sheep2 | PieceKind::Ostrich2)
    }
}

/// A cell on the game board
///
/// - `None`: empty tile
/// - `Some(PieceKind)`: tile occupied by that piece
pub type Cell = Option<PieceKind>;

/// The two players. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row delta per step of movement: +1 (down) for player one, -1 (up) for player two.
    pub fn forward(&self) -> i32 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The species this player moves. Inverse of [`Species::owner`].
    pub fn species(&self) -> Species {
        match self {
            Player::One => Species::Ostrich,
            Player::Two => Species::Sheep,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// Turn engine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for the active player to roll the die.
    #[default]
    AwaitingRoll,
    /// The die is rolled; waiting for the active player to pick a piece.
    AwaitingMove,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::AwaitingRoll => "roll",
            Phase::AwaitingMove => "play",
        }
    }
}

/// Address of a board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub col: u8,
    pub row: u8,
}

impl CellPos {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Actions the renderer forwards to the turn engine.
///
/// Raw pointer and key events are classified by the renderer/input layer
/// before reaching the core; the core never sees screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// The dice control was clicked
    RollRequested,
    /// A board tile was clicked
    TileClicked(CellPos),
    /// Reset the board to its starting layout
    Restart,
}

impl BoardAction {
    /// Convert to camelCase name (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardAction::RollRequested => "rollRequested",
            BoardAction::TileClicked(_) => "tileClicked",
            BoardAction::Restart => "restart",
        }
    }
}

/// What a point on screen refers to, after hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Dice,
    Tile(CellPos),
    Background,
}

impl Target {
    pub fn category(&self) -> TargetCategory {
        match self {
            Target::Dice => TargetCategory::Dice,
            Target::Tile(_) => TargetCategory::Tile,
            Target::Background => TargetCategory::Background,
        }
    }
}

/// [`Target`] without its payload; used as a dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetCategory {
    Dice,
    Tile,
    Background,
}
