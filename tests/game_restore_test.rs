//! Tests for checkpointing a game and restoring it with validation.

use tictactoe_timeline::{Board, Game, History, Player, Position, Square};

fn position(index: usize) -> Position {
    Position::from_index(index).expect("index in range")
}

#[test]
fn test_checkpoint_round_trip() {
    let mut game = Game::new();
    game.make_move(position(4));
    game.make_move(position(0));
    game.make_move(position(8));
    game.jump_to(1).expect("recorded step");

    let checkpoint = serde_json::to_string(&game).expect("serializable");
    let thawed: Game = serde_json::from_str(&checkpoint).expect("deserializable");
    assert_eq!(thawed, game);

    // The validated path accepts the same parts.
    let restored =
        Game::restore(thawed.history().clone(), thawed.cursor()).expect("consistent parts");
    assert_eq!(restored, game);
    assert_eq!(restored.cursor(), 1);
    assert_eq!(restored.history().len(), 4);
}

#[test]
fn test_restore_rejects_out_of_range_cursor() {
    let err = Game::restore(History::new(), 3).expect_err("cursor past the log");

    assert!(
        err.violations
            .iter()
            .any(|v| v.description.contains("Cursor"))
    );
    assert!(err.to_string().contains("inconsistent"));
}

#[test]
fn test_restore_rejects_two_marks_in_one_step() {
    let mut double = Board::new();
    double.set(position(0), Square::Occupied(Player::X));
    double.set(position(4), Square::Occupied(Player::O));

    let mut history = History::new();
    history.record_after(0, double);

    let err = Game::restore(history, 1).expect_err("two marks appeared in one step");
    assert!(!err.violations.is_empty());
}

#[test]
fn test_restore_rejects_wrong_opening_mark() {
    let mut opened_by_o = Board::new();
    opened_by_o.set(position(4), Square::Occupied(Player::O));

    let mut history = History::new();
    history.record_after(0, opened_by_o);

    let err = Game::restore(history, 1).expect_err("O cannot move first");
    assert!(
        err.violations
            .iter()
            .any(|v| v.description.contains("alternate"))
    );
}
