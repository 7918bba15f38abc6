//! The game engine: a snapshot log plus a cursor.

use crate::contracts::{Contract, MoveContract, assert_invariants};
use crate::history::{History, MoveListEntry};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A game in play: every board snapshot since the start, plus a cursor
/// selecting the active one.
///
/// Turn order and status are recomputed from `{history, cursor}` on
/// every read; no derived value is stored. Both mutating operations take
/// `&mut self` and complete before returning, so a reader never observes
/// a half-applied transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: History,
    pub(crate) cursor: usize,
}

/// Reason a move cannot be applied at the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Rejected jump outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Step {step} is outside recorded history (0..{len})")]
pub struct JumpError {
    /// The requested step.
    pub step: usize,
    /// The number of recorded snapshots.
    pub len: usize,
}

impl std::error::Error for JumpError {}

/// Rejected restore from inconsistent parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreError {
    /// The invariants the supplied parts violate.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for RestoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let descriptions = self
            .violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Restored game is inconsistent: {}", descriptions)
    }
}

impl std::error::Error for RestoreError {}

impl Game {
    /// Creates a new game: one empty snapshot, cursor at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
        }
    }

    /// Rebuilds a game from externally supplied parts (for example a
    /// deserialized checkpoint), validating the full invariant set.
    ///
    /// # Errors
    ///
    /// Returns `RestoreError` naming every violated invariant if the
    /// parts do not describe a reachable game state.
    #[instrument(skip(history))]
    pub fn restore(history: History, cursor: usize) -> Result<Self, RestoreError> {
        let candidate = Self { history, cursor };
        match GameInvariants::check_all(&candidate) {
            Ok(()) => Ok(candidate),
            Err(violations) => {
                warn!(count = violations.len(), "rejecting inconsistent game state");
                Err(RestoreError { violations })
            }
        }
    }

    /// The snapshot log.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The active step index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The board at the cursor (read-only view).
    pub fn current_board(&self) -> &Board {
        self.history
            .get(self.cursor)
            .expect("cursor always indexes a recorded snapshot")
    }

    /// The mark to move at the current snapshot, derived from cursor
    /// parity: X on even steps, O on odd.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Game status derived from the current snapshot: the winning mark
    /// if a line is complete, a draw if the board is exhausted, else the
    /// mark to move next.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// Checks whether a move could be applied at the current snapshot,
    /// without mutating.
    ///
    /// # Errors
    ///
    /// Returns the reason `make_move` would ignore this position.
    pub fn check_move(&self, position: Position) -> Result<(), MoveError> {
        MoveContract::pre(self, &position)
    }

    /// Applies a move at the current snapshot.
    ///
    /// A move on an occupied square, or once the game is decided, is
    /// silently ignored: clicking a finished or filled cell does
    /// nothing. Otherwise the forward branch beyond the cursor is
    /// discarded, a new snapshot with the current player's mark is
    /// appended, and the cursor advances to it. Results are observed
    /// through the read accessors.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn make_move(&mut self, position: Position) {
        if let Err(reason) = MoveContract::pre(self, &position) {
            debug!(%reason, "move ignored");
            return;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let mut board = self.current_board().clone();
        board.set(position, Square::Occupied(player));
        self.cursor = self.history.record_after(self.cursor, board);

        // Postconditions are verified in debug builds only.
        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(&before, self) {
            panic!("move postcondition failed: {violation}");
        }
    }

    /// Re-points the cursor at a recorded snapshot.
    ///
    /// History is untouched, so jumping forward again stays possible
    /// until the next move truncates the branch. Time travel never
    /// replays moves; it only selects a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `JumpError` if `step` is outside the recorded range.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            warn!(
                step,
                len = self.history.len(),
                "rejecting jump outside recorded history"
            );
            return Err(JumpError {
                step,
                len: self.history.len(),
            });
        }
        self.cursor = step;
        assert_invariants(self);
        Ok(())
    }

    /// One descriptor per recorded snapshot, in step order, for the
    /// presentation layer's jump-to-move affordance.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        (0..self.history.len()).map(MoveListEntry::new).collect()
    }

    /// The unoccupied positions of the current snapshot. Empty once the
    /// game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
