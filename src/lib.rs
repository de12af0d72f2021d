//! isoboard (workspace facade crate).
//!
//! Re-exports the workspace crates as `isoboard::{core,input,term,types}` so the
//! binary, tests and benches share one import path.

pub use isoboard_core as core;
pub use isoboard_input as input;
pub use isoboard_term as term;
pub use isoboard_types as types;
