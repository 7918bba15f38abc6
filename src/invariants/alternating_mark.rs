//! Alternating mark invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::game::Game;
use crate::types::{Player, Square};

/// Invariant: The mark added at step i matches the turn for that step.
///
/// X fills the square recorded between snapshots 0 and 1, O the next,
/// and so on. Together with the monotonic-history invariant this pins
/// the whole log to a legal alternating game.
pub struct AlternatingMarkInvariant;

impl Invariant<Game> for AlternatingMarkInvariant {
    fn holds(game: &Game) -> bool {
        for (step, pair) in game.history().snapshots().windows(2).enumerate() {
            let expected = Player::for_step(step);
            for (prev, next) in pair[0].squares().iter().zip(pair[1].squares()) {
                if *prev == Square::Empty
                    && matches!(next, Square::Occupied(mark) if *mark != expected)
                {
                    return false;
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ... through the log"
    }
}
