//! Event dispatch table.
//!
//! Each (target category, event kind) pair maps to one plain function. The
//! default table reproduces the board's bindings: clicking a tile or the die
//! produces an action, hovering a tile dims it.

use std::collections::HashMap;

use crate::types::{BoardAction, CellPos, Target, TargetCategory};

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Hover,
}

/// Cosmetic pointer state shared by the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    /// Tile under the pointer (or keyboard cursor).
    pub hover: Option<CellPos>,
    /// Set while the die is still spinning; tile clicks are dropped.
    pub rolling: bool,
}

pub type Handler = fn(&mut PointerState, Target) -> Option<BoardAction>;

#[derive(Debug, Clone)]
pub struct DispatchTable {
    handlers: HashMap<(TargetCategory, EventKind), Handler>,
}

impl DispatchTable {
    /// A table with no bindings.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler, returning the one it replaces.
    pub fn bind(
        &mut self,
        category: TargetCategory,
        kind: EventKind,
        handler: Handler,
    ) -> Option<Handler> {
        self.handlers.insert((category, kind), handler)
    }

    pub fn unbind(&mut self, category: TargetCategory, kind: EventKind) -> Option<Handler> {
        self.handlers.remove(&(category, kind))
    }

    pub fn is_bound(&self, category: TargetCategory, kind: EventKind) -> bool {
        self.handlers.contains_key(&(category, kind))
    }

    /// Run the handler bound to this target and event, if any.
    pub fn dispatch(
        &self,
        state: &mut PointerState,
        target: Target,
        kind: EventKind,
    ) -> Option<BoardAction> {
        let handler = self.handlers.get(&(target.category(), kind))?;
        handler(state, target)
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.bind(TargetCategory::Tile, EventKind::Click, click_tile);
        table.bind(TargetCategory::Dice, EventKind::Click, click_dice);
        table.bind(TargetCategory::Tile, EventKind::Hover, hover_tile);
        table.bind(TargetCategory::Dice, EventKind::Hover, hover_off_board);
        table.bind(TargetCategory::Background, EventKind::Hover, hover_off_board);
        table
    }
}

fn click_tile(state: &mut PointerState, target: Target) -> Option<BoardAction> {
    if state.rolling {
        return None;
    }
    match target {
        Target::Tile(pos) => Some(BoardAction::TileClicked(pos)),
        _ => None,
    }
}

fn click_dice(state: &mut PointerState, _target: Target) -> Option<BoardAction> {
    if state.rolling {
        return None;
    }
    Some(BoardAction::RollRequested)
}

fn hover_tile(state: &mut PointerState, target: Target) -> Option<BoardAction> {
    if let Target::Tile(pos) = target {
        state.hover = Some(pos);
    }
    None
}

fn hover_off_board(state: &mut PointerState, _target: Target) -> Option<BoardAction> {
    state.hover = None;
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_click_bindings() {
        let table = DispatchTable::default();
        let mut state = PointerState::default();
        let pos = CellPos::new(3, 4);

        assert_eq!(
            table.dispatch(&mut state, Target::Tile(pos), EventKind::Click),
            Some(BoardAction::TileClicked(pos))
        );
        assert_eq!(
            table.dispatch(&mut state, Target::Dice, EventKind::Click),
            Some(BoardAction::RollRequested)
        );
        assert_eq!(
            table.dispatch(&mut state, Target::Background, EventKind::Click),
            None
        );
    }

    #[test]
    fn test_hover_tracks_tile() {
        let table = DispatchTable::default();
        let mut state = PointerState::default();

        table.dispatch(&mut state, Target::Tile(CellPos::new(1, 1)), EventKind::Hover);
        assert_eq!(state.hover, Some(CellPos::new(1, 1)));

        table.dispatch(&mut state, Target::Background, EventKind::Hover);
        assert_eq!(state.hover, None);
    }

    #[test]
    fn test_clicks_dropped_while_rolling() {
        let table = DispatchTable::default();
        let mut state = PointerState {
            rolling: true,
            ..PointerState::default()
        };

        assert_eq!(
            table.dispatch(&mut state, Target::Tile(CellPos::new(0, 0)), EventKind::Click),
            None
        );
        assert_eq!(table.dispatch(&mut state, Target::Dice, EventKind::Click), None);
    }

    #[test]
    fn test_rebinding_replaces_handler() {
        fn roll_anywhere(_: &mut PointerState, _: Target) -> Option<BoardAction> {
            Some(BoardAction::RollRequested)
        }

        let mut table = DispatchTable::default();
        assert!(table
            .bind(TargetCategory::Background, EventKind::Click, roll_anywhere)
            .is_none());
        let mut state = PointerState::default();
        assert_eq!(
            table.dispatch(&mut state, Target::Background, EventKind::Click),
            Some(BoardAction::RollRequested)
        );

        assert!(table.unbind(TargetCategory::Tile, EventKind::Click).is_some());
        assert!(!table.is_bound(TargetCategory::Tile, EventKind::Click));
    }
}
