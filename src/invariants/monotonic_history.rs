//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: Successive snapshots differ by exactly one new mark.
///
/// A recorded square is never cleared or overwritten in a later
/// snapshot, and every step fills exactly one previously empty square.
/// This is what makes the log contiguous: no gaps, no rewrites.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        for pair in game.history().snapshots().windows(2) {
            let mut added = 0;
            for (prev, next) in pair[0].squares().iter().zip(pair[1].squares()) {
                match (prev, next) {
                    (p, n) if p == n => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    // An occupied square changed or was cleared.
                    _ => return false,
                }
            }
            if added != 1 {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "Successive snapshots differ by exactly one new mark"
    }
}
