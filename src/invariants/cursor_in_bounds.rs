//! Cursor bounds invariant: the cursor always selects a recorded snapshot.

use super::Invariant;
use crate::game::Game;

/// Invariant: The cursor indexes a recorded snapshot.
///
/// Jumps only accept recorded steps and moves advance the cursor to the
/// snapshot they append, so the cursor can never run past the log.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor indexes a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_fresh_game_holds() {
        let game = Game::new();
        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut game = Game::new();
        game.make_move(Position::TopLeft);
        game.make_move(Position::Center);
        assert!(CursorInBoundsInvariant::holds(&game));

        game.jump_to(0).expect("recorded step");
        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_runaway_cursor_violates() {
        let mut game = Game::new();
        game.make_move(Position::TopLeft);

        game.cursor = game.history.len();
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
