//! Terminal renderer for the isometric board.
//!
//! This is a small, game-oriented rendering layer. It avoids widget toolkits
//! and renders into a plain framebuffer that is flushed to the terminal.
//!
//! - [`IsoProjection`] maps tiles to screen cells and back (hit-testing)
//! - [`GameView`] draws a `GameSnapshot` and classifies clicks into targets
//! - [`DiceAnimation`] is the display-only dice reveal
//! - [`TerminalCue`] stands in for the animal sounds
//! - [`TerminalRenderer`] owns the real terminal

pub mod cue;
pub mod dice_anim;
pub mod fb;
pub mod game_view;
pub mod iso;
pub mod renderer;

pub use isoboard_core as core;
pub use isoboard_types as types;

pub use cue::TerminalCue;
pub use dice_anim::DiceAnimation;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Overlay, Rect, Viewport};
pub use iso::IsoProjection;
pub use renderer::{paint_changes, paint_full, TerminalRenderer};
