//! Contract-based validation for state transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::game::{Game, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress at the cursor.
pub struct GameNotOver;

impl GameNotOver {
    /// Returns `GameOver` if the current snapshot is already decided.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Returns `SquareOccupied` if the position already holds a mark.
    #[instrument(skip(game))]
    pub fn check(position: &Position, game: &Game) -> Result<(), MoveError> {
        if game.current_board().is_empty(*position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(*position))
        }
    }
}

/// Composite precondition: a move is legal only on an empty square of an
/// undecided game. Failing either check makes the move a no-op.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(position: &Position, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move application.
///
/// Preconditions:
/// - No winner on the current snapshot
/// - Target square must be empty
///
/// Postconditions:
/// - Cursor advanced to the newly appended last step
/// - The log up to the old cursor is preserved unchanged
/// - The full invariant set still holds
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    fn pre(game: &Game, position: &Position) -> Result<(), MoveError> {
        LegalMove::check(position, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.cursor() != before.cursor() + 1 || after.cursor() != after.history().last_step() {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: cursor {} did not advance to the last step",
                after.cursor()
            )));
        }

        let kept = before.cursor() + 1;
        if after.history().snapshots()[..kept] != before.history().snapshots()[..kept] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: recorded prefix was rewritten".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        GameInvariants::check_all(game).is_ok(),
        "game invariants violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = Game::new();
        game.make_move(Position::Center);

        assert!(matches!(
            MoveContract::pre(&game, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_finished_game() {
        let mut game = Game::new();
        // X takes the top row.
        for index in [0, 3, 1, 4, 2] {
            game.make_move(Position::from_index(index).expect("index in range"));
        }

        assert!(matches!(
            MoveContract::pre(&game, &Position::BottomRight),
            Err(MoveError::GameOver)
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = Game::new();
        let mut after = game.clone();
        after.make_move(Position::Center);

        assert!(MoveContract::post(&game, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_stuck_cursor() {
        let game = Game::new();
        let mut after = game.clone();
        after.make_move(Position::Center);
        after.cursor = 0;

        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_rewritten_prefix() {
        let mut game = Game::new();
        game.make_move(Position::Center);

        let mut after = game.clone();
        after.make_move(Position::TopLeft);
        after.history.snapshots[1] = crate::types::Board::new();

        assert!(matches!(
            MoveContract::post(&game, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
