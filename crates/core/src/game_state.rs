//! Game state module - the turn engine
//!
//! This module ties together the board, the dice and the movement rules.
//! A turn is two actions long:
//!
//! ```text
//!   AwaitingRoll --RollRequested--> AwaitingMove --TileClicked(own piece)--> AwaitingRoll
//!                                                  (active player flips)
//! ```
//!
//! A roll that leaves the active player without a single legal move passes
//! the turn straight away, so the game can never wait on a move that cannot
//! be made.
//!
//! Actions that do not fit the current phase are ignored and produce an empty
//! [`Outcome`]. Clicks that fit the phase but cannot become a move return an
//! error and leave the board, phase and player untouched. The selection may
//! still change on such a click; renderers read it from [`GameState::snapshot`]
//! since the error carries no [`Outcome`].

use arrayvec::ArrayVec;

use crate::config::{CollisionPolicy, GameConfig};
use crate::error::{GameError, IllegalMove};
use crate::rng::DiceRoller;
use crate::rules::destination;
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::Board;

/// One observable effect of an action, for the renderer to reflect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The die settled on a value.
    Rolled(u8),
    /// The highlighted tile changed.
    Selected(Option<CellPos>),
    /// A piece was relocated. `displaced` is only ever set under
    /// [`CollisionPolicy::Overwrite`].
    Moved {
        from: CellPos,
        to: CellPos,
        kind: PieceKind,
        displaced: Cell,
    },
    /// The turn passed to this player.
    TurnPassed(Player),
    /// The board was reset to its starting layout.
    Restarted,
}

/// Everything that changed as the result of one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    changes: ArrayVec<Change, 4>,
}

impl Outcome {
    fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// True when the action was ignored.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The move made by this action, if any.
    pub fn moved(&self) -> Option<(CellPos, CellPos)> {
        self.changes.iter().find_map(|c| match c {
            Change::Moved { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Layout to return to on restart.
    initial: Board,
    board: Board,
    phase: Phase,
    active_player: Player,
    /// Only `Some` while awaiting a move.
    dice: Option<u8>,
    last_roll: u8,
    /// Highlighted tile; does not affect the rules.
    selected: Option<CellPos>,
    /// Completed moves since the start.
    turn: u32,
    collision: CollisionPolicy,
    roller: DiceRoller,
}

impl GameState {
    /// Create a new game on `board`, player one to roll
    pub fn new(board: Board, roller: DiceRoller) -> Self {
        Self {
            initial: board.clone(),
            board,
            phase: Phase::AwaitingRoll,
            active_player: Player::One,
            dice: None,
            last_roll: 1,
            selected: None,
            turn: 0,
            collision: CollisionPolicy::default(),
            roller,
        }
    }

    /// Create a game from configuration: layout, collision policy and seed
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        let board = config.initial_board()?;
        let roller = match config.seed {
            Some(seed) => DiceRoller::new(seed),
            None => DiceRoller::from_entropy(),
        };
        Ok(Self::new(board, roller).with_collision(config.collision))
    }

    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn dice(&self) -> Option<u8> {
        self.dice
    }

    pub fn last_roll(&self) -> u8 {
        self.last_roll
    }

    pub fn selected(&self) -> Option<CellPos> {
        self.selected
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn collision(&self) -> CollisionPolicy {
        self.collision
    }

    pub fn seed(&self) -> u64 {
        self.roller.seed()
    }

    pub fn piece_at(&self, pos: CellPos) -> Result<Cell, GameError> {
        self.board.piece_at(pos)
    }

    /// Apply an action from the renderer
    ///
    /// On `Err` nothing but the selection may have changed; read it back
    /// through [`GameState::snapshot`].
    pub fn apply_action(&mut self, action: BoardAction) -> Result<Outcome, GameError> {
        match action {
            BoardAction::RollRequested => {
                if self.phase != Phase::AwaitingRoll {
                    return Ok(Outcome::default());
                }
                let value = self.roller.roll();
                Ok(self.settle_roll(value))
            }
            BoardAction::TileClicked(pos) => {
                if self.phase != Phase::AwaitingMove {
                    return Ok(Outcome::default());
                }
                self.click(pos)
            }
            BoardAction::Restart => {
                self.restart();
                let mut outcome = Outcome::default();
                outcome.push(Change::Restarted);
                Ok(outcome)
            }
        }
    }

    /// Roll with a known value instead of drawing one.
    ///
    /// Values are clamped to the faces of the die. Ignored outside the roll phase.
    pub fn apply_roll(&mut self, value: u8) -> Outcome {
        if self.phase != Phase::AwaitingRoll {
            return Outcome::default();
        }
        self.settle_roll(value.clamp(1, DICE_FACES))
    }

    fn settle_roll(&mut self, value: u8) -> Outcome {
        self.dice = Some(value);
        self.last_roll = value;
        self.phase = Phase::AwaitingMove;
        tracing::debug!(player = self.active_player.number(), value, "dice rolled");

        let mut outcome = Outcome::default();
        outcome.push(Change::Rolled(value));

        if self.legal_moves().is_empty() {
            self.active_player = self.active_player.opponent();
            self.phase = Phase::AwaitingRoll;
            self.dice = None;
            self.selected = None;
            tracing::info!(value, next = %self.active_player, "no legal move, turn passes");
            outcome.push(Change::TurnPassed(self.active_player));
        }
        outcome
    }

    fn click(&mut self, pos: CellPos) -> Result<Outcome, GameError> {
        let mut outcome = Outcome::default();

        let Some(kind) = self.board.piece_at(pos)? else {
            self.selected = None;
            tracing::debug!(%pos, "click on empty tile");
            return Err(IllegalMove::EmptyCell(pos).into());
        };

        if self.selected != Some(pos) {
            self.selected = Some(pos);
            outcome.push(Change::Selected(Some(pos)));
        }

        let owner = kind.owner();
        if owner != self.active_player {
            tracing::debug!(%pos, %owner, active = %self.active_player, "not the active player's piece");
            return Err(IllegalMove::NotYourPiece { pos, owner }.into());
        }

        let Some(to) = self.destination_of(pos) else {
            return Ok(Outcome::default());
        };

        if self.collision == CollisionPolicy::Block
            && to != pos
            && self.board.piece_at(to)?.is_some()
        {
            tracing::debug!(from = %pos, %to, "destination occupied");
            return Err(IllegalMove::DestinationOccupied { from: pos, to }.into());
        }

        let displaced = self.board.move_piece(pos, to)?;
        if let Some(lost) = displaced {
            tracing::warn!(from = %pos, %to, lost = lost.as_str(), "piece overwritten");
        }
        tracing::debug!(from = %pos, %to, kind = kind.as_str(), "piece moved");

        self.active_player = self.active_player.opponent();
        self.phase = Phase::AwaitingRoll;
        self.dice = None;
        self.selected = None;
        self.turn = self.turn.wrapping_add(1);

        outcome.push(Change::Moved {
            from: pos,
            to,
            kind,
            displaced,
        });
        outcome.push(Change::TurnPassed(self.active_player));
        Ok(outcome)
    }

    /// Where the piece on `pos` would land with the current roll.
    ///
    /// `None` outside the move phase or when the tile is empty.
    pub fn destination_of(&self, pos: CellPos) -> Option<CellPos> {
        let dice = self.dice?;
        let kind = self.board.piece_at(pos).ok()??;
        Some(destination(pos, kind.owner(), dice, self.board.rows()))
    }

    /// Every move the active player could make with the current roll.
    ///
    /// An empty list right after a roll passes the turn.
    pub fn legal_moves(&self) -> Vec<(CellPos, CellPos)> {
        if self.phase != Phase::AwaitingMove {
            return Vec::new();
        }
        self.board
            .pieces()
            .filter(|(_, kind)| kind.owner() == self.active_player)
            .filter_map(|(from, _)| self.destination_of(from).map(|to| (from, to)))
            .filter(|&(from, to)| {
                self.collision == CollisionPolicy::Overwrite
                    || to == from
                    || matches!(self.board.piece_at(to), Ok(None))
            })
            .collect()
    }

    /// Reset board and turn state to the starting layout.
    ///
    /// The dice keep their stream, so a restarted game gets fresh rolls.
    pub fn restart(&mut self) {
        self.board = self.initial.clone();
        self.phase = Phase::AwaitingRoll;
        self.active_player = Player::One;
        self.dice = None;
        self.selected = None;
        self.turn = 0;
        tracing::info!("game restarted");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            cells: self.board.cells().to_vec(),
            phase: self.phase,
            active_player: self.active_player,
            dice: self.dice,
            last_roll: self.last_roll,
            selected: self.selected,
            preview: self.selected.and_then(|pos| {
                self.piece_at(pos)
                    .ok()
                    .flatten()
                    .filter(|kind| kind.owner() == self.active_player)
                    .and_then(|_| self.destination_of(pos))
            }),
            turn: self.turn,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        let board = GameConfig::default()
            .initial_board()
            .unwrap_or_default();
        Self::new(board, DiceRoller::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(u8, u8, PieceKind)]) -> Board {
        let mut board = Board::new(8, 8);
        for &(col, row, kind) in pieces {
            board.place(CellPos::new(col, row), Some(kind)).unwrap();
        }
        board
    }

    #[test]
    fn test_initial_state() {
        let game = GameState::default();
        assert_eq!(game.phase(), Phase::AwaitingRoll);
        assert_eq!(game.active_player(), Player::One);
        assert_eq!(game.dice(), None);
        assert_eq!(game.board().piece_count(), 8);
    }

    #[test]
    fn test_roll_moves_to_play_phase() {
        let mut game = GameState::default();
        let outcome = game.apply_action(BoardAction::RollRequested).unwrap();

        assert_eq!(game.phase(), Phase::AwaitingMove);
        let value = game.dice().unwrap();
        assert!((1..=6).contains(&value));
        assert_eq!(outcome.changes(), &[Change::Rolled(value)]);
    }

    #[test]
    fn test_second_roll_is_ignored() {
        let mut game = GameState::default();
        game.apply_roll(4);
        let outcome = game.apply_action(BoardAction::RollRequested).unwrap();

        assert!(outcome.is_empty());
        assert_eq!(game.dice(), Some(4));
    }

    #[test]
    fn test_click_before_roll_is_ignored() {
        let mut game = GameState::default();
        let before = game.board().clone();
        let outcome = game
            .apply_action(BoardAction::TileClicked(CellPos::new(1, 0)))
            .unwrap();

        assert!(outcome.is_empty());
        assert_eq!(game.board(), &before);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn test_move_example_from_top_row() {
        let mut game = GameState::new(
            board_with(&[(2, 0, PieceKind::Ostrich)]),
            DiceRoller::new(1),
        );
        game.apply_roll(3);
        let outcome = game
            .apply_action(BoardAction::TileClicked(CellPos::new(2, 0)))
            .unwrap();

        assert_eq!(game.piece_at(CellPos::new(2, 0)), Ok(None));
        assert_eq!(game.piece_at(CellPos::new(2, 3)), Ok(Some(PieceKind::Ostrich)));
        assert_eq!(game.active_player(), Player::Two);
        assert_eq!(game.phase(), Phase::AwaitingRoll);
        assert_eq!(game.dice(), None);
        assert_eq!(game.turn(), 1);
        assert_eq!(outcome.moved(), Some((CellPos::new(2, 0), CellPos::new(2, 3))));
        assert!(outcome.changes().contains(&Change::TurnPassed(Player::Two)));
    }

    #[test]
    fn test_move_reflects_off_bottom_edge() {
        let mut game = GameState::new(
            board_with(&[(0, 6, PieceKind::Ostrich2)]),
            DiceRoller::new(1),
        );
        game.apply_roll(5);
        game.apply_action(BoardAction::TileClicked(CellPos::new(0, 6)))
            .unwrap();

        assert_eq!(game.piece_at(CellPos::new(0, 3)), Ok(Some(PieceKind::Ostrich2)));
    }

    #[test]
    fn test_opponent_piece_is_rejected_but_selected() {
        let mut game = GameState::new(
            board_with(&[(3, 0, PieceKind::Ostrich), (0, 7, PieceKind::Sheep)]),
            DiceRoller::new(1),
        );
        game.apply_roll(2);
        let before = game.board().clone();

        let err = game
            .apply_action(BoardAction::TileClicked(CellPos::new(0, 7)))
            .unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove(IllegalMove::NotYourPiece {
                pos: CellPos::new(0, 7),
                owner: Player::Two,
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.phase(), Phase::AwaitingMove);
        assert_eq!(game.active_player(), Player::One);
        assert_eq!(game.selected(), Some(CellPos::new(0, 7)));
        assert_eq!(game.snapshot().selected, Some(CellPos::new(0, 7)));
        assert_eq!(game.snapshot().preview, None);
    }

    #[test]
    fn test_empty_click_clears_selection() {
        let mut game = GameState::new(
            board_with(&[(3, 0, PieceKind::Ostrich), (0, 7, PieceKind::Sheep)]),
            DiceRoller::new(1),
        );
        game.apply_roll(2);
        let _ = game.apply_action(BoardAction::TileClicked(CellPos::new(0, 7)));
        let err = game
            .apply_action(BoardAction::TileClicked(CellPos::new(3, 3)))
            .unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove(IllegalMove::EmptyCell(CellPos::new(3, 3)))
        );
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn test_out_of_bounds_click() {
        let mut game = GameState::default();
        game.apply_roll(1);
        let err = game
            .apply_action(BoardAction::TileClicked(CellPos::new(8, 0)))
            .unwrap_err();
        assert_eq!(err, GameError::OutOfBounds { col: 8, row: 0 });
        assert_eq!(game.phase(), Phase::AwaitingMove);
    }

    #[test]
    fn test_block_policy_rejects_collision() {
        let mut game = GameState::new(
            board_with(&[
                (1, 0, PieceKind::Ostrich),
                (1, 2, PieceKind::Sheep),
                (5, 0, PieceKind::Ostrich2),
            ]),
            DiceRoller::new(1),
        );
        game.apply_roll(2);
        let err = game
            .apply_action(BoardAction::TileClicked(CellPos::new(1, 0)))
            .unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove(IllegalMove::DestinationOccupied {
                from: CellPos::new(1, 0),
                to: CellPos::new(1, 2),
            })
        );
        assert_eq!(game.board().piece_count(), 3);
        assert_eq!(game.active_player(), Player::One);
        assert_eq!(game.phase(), Phase::AwaitingMove);
    }

    #[test]
    fn test_roll_without_legal_move_passes_turn() {
        let mut game = GameState::new(
            board_with(&[(0, 0, PieceKind::Ostrich), (0, 3, PieceKind::Sheep)]),
            DiceRoller::new(1),
        );
        let outcome = game.apply_roll(3);

        assert_eq!(
            outcome.changes(),
            &[Change::Rolled(3), Change::TurnPassed(Player::Two)]
        );
        assert_eq!(game.phase(), Phase::AwaitingRoll);
        assert_eq!(game.active_player(), Player::Two);
        assert_eq!(game.dice(), None);
        assert_eq!(game.last_roll(), 3);
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_roll_with_no_pieces_passes_turn() {
        let mut game = GameState::new(Board::new(10, 10), DiceRoller::new(1));
        for expected in [Player::Two, Player::One, Player::Two] {
            game.apply_action(BoardAction::RollRequested).unwrap();
            assert_eq!(game.phase(), Phase::AwaitingRoll);
            assert_eq!(game.active_player(), expected);
        }
    }

    #[test]
    fn test_overwrite_policy_replaces_occupant() {
        let mut game = GameState::new(
            board_with(&[(1, 0, PieceKind::Ostrich), (1, 2, PieceKind::Sheep)]),
            DiceRoller::new(1),
        )
        .with_collision(CollisionPolicy::Overwrite);
        game.apply_roll(2);
        let outcome = game
            .apply_action(BoardAction::TileClicked(CellPos::new(1, 0)))
            .unwrap();

        assert_eq!(game.piece_at(CellPos::new(1, 2)), Ok(Some(PieceKind::Ostrich)));
        assert_eq!(game.board().count(PieceKind::Sheep), 0);
        assert!(outcome.changes().contains(&Change::Moved {
            from: CellPos::new(1, 0),
            to: CellPos::new(1, 2),
            kind: PieceKind::Ostrich,
            displaced: Some(PieceKind::Sheep),
        }));
    }

    #[test]
    fn test_legal_moves_respects_owner_and_policy() {
        let mut game = GameState::new(
            board_with(&[
                (1, 0, PieceKind::Ostrich),
                (3, 0, PieceKind::Ostrich),
                (3, 2, PieceKind::Sheep),
            ]),
            DiceRoller::new(1),
        );
        assert!(game.legal_moves().is_empty());

        game.apply_roll(2);
        assert_eq!(
            game.legal_moves(),
            vec![(CellPos::new(1, 0), CellPos::new(1, 2))]
        );
    }

    #[test]
    fn test_snapshot_previews_selected_destination() {
        let mut game = GameState::new(
            board_with(&[(4, 0, PieceKind::Ostrich)]),
            DiceRoller::new(1),
        );
        game.apply_roll(4);
        game.selected = Some(CellPos::new(4, 0));

        let snap = game.snapshot();
        assert_eq!(snap.preview, Some(CellPos::new(4, 4)));
        assert_eq!(snap.dice, Some(4));
        assert_eq!(snap.cell(CellPos::new(4, 0)), Some(PieceKind::Ostrich));
    }

    #[test]
    fn test_restart_restores_layout() {
        let mut game = GameState::default();
        game.apply_roll(3);
        game.apply_action(BoardAction::TileClicked(CellPos::new(1, 0)))
            .unwrap();
        assert_eq!(game.turn(), 1);

        let outcome = game.apply_action(BoardAction::Restart).unwrap();
        assert_eq!(outcome.changes(), &[Change::Restarted]);
        assert_eq!(game.turn(), 0);
        assert_eq!(game.active_player(), Player::One);
        assert_eq!(game.piece_at(CellPos::new(1, 0)), Ok(Some(PieceKind::Ostrich)));
    }
}
