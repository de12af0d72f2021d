//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board model, the turn engine and the session
//! controller. It has **no dependencies** on terminals or other I/O, making it:
//!
//! - **Deterministic**: the same dice seed replays the same game
//! - **Testable**: every rule is exercised without a renderer
//! - **Portable**: any renderer can drive it by forwarding [`BoardAction`]s
//!
//! # Module Structure
//!
//! - [`board`]: rows x cols tile grid, at most one piece per tile
//! - [`rules`]: column movement with reflection at the board edges
//! - [`game_state`]: the roll/move turn engine
//! - [`session`]: owns a game and its audio cue collaborator
//! - [`rng`]: seeded six-sided die
//! - [`config`]: JSON configuration and starting layouts
//! - [`error`]: error kinds surfaced to callers
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Player one (ostriches) starts. A turn is a roll followed by a move.
//! - A move takes one of the active player's pieces `dice` rows forward along
//!   its column: down for player one, up for player two.
//! - Overshooting an edge bounces back by the overshoot.
//! - Landing on an occupied tile is refused unless the game is configured with
//!   [`CollisionPolicy::Overwrite`].
//! - There is no win condition; the session lasts until the program exits.
//!
//! # Example
//!
//! ```
//! use isoboard_core::{Board, DiceRoller, GameState};
//! use isoboard_types::{BoardAction, CellPos, Phase, PieceKind, Player};
//!
//! let mut board = Board::new(8, 8);
//! board.place(CellPos::new(2, 0), Some(PieceKind::Ostrich)).unwrap();
//!
//! let mut game = GameState::new(board, DiceRoller::new(12345));
//! game.apply_roll(3);
//! game.apply_action(BoardAction::TileClicked(CellPos::new(2, 0))).unwrap();
//!
//! assert_eq!(game.piece_at(CellPos::new(2, 3)), Ok(Some(PieceKind::Ostrich)));
//! assert_eq!(game.active_player(), Player::Two);
//! assert_eq!(game.phase(), Phase::AwaitingRoll);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod rules;
pub mod session;
pub mod snapshot;

pub use isoboard_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{CollisionPolicy, GameConfig};
pub use error::{ConfigError, GameError, IllegalMove};
pub use game_state::{Change, GameState, Outcome};
pub use rng::DiceRoller;
pub use rules::{destination, reflect_row};
pub use session::{AudioCue, Session, Silent};
pub use snapshot::GameSnapshot;
