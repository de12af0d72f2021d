//! Input module (engine-facing).
//!
//! Turns classified pointer targets and terminal key events into
//! [`crate::types::BoardAction`]s. Hit-testing screen coordinates is the
//! renderer's job; this crate only sees [`crate::types::Target`]s.
//!
//! - [`dispatch`]: table from (target category, event kind) to handler
//! - [`map`]: keyboard bindings
//! - [`cursor`]: keyboard-driven tile cursor

pub mod cursor;
pub mod dispatch;
pub mod map;

pub use isoboard_types as types;

pub use cursor::TileCursor;
pub use dispatch::{DispatchTable, EventKind, Handler, PointerState};
pub use map::{handle_key_event, should_quit, KeyCommand};
