//! Empty start invariant: the log begins with the empty board.

use super::Invariant;
use crate::game::Game;
use crate::types::Board;

/// Invariant: The first recorded snapshot is the all-empty board.
///
/// The log is never empty; step 0 is the game start, before any move.
pub struct EmptyStartInvariant;

impl Invariant<Game> for EmptyStartInvariant {
    fn holds(game: &Game) -> bool {
        match game.history().get(0) {
            Some(board) => *board == Board::new(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
