//! The snapshot log: every recorded board state since game start.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered log of board snapshots from game start onward.
///
/// The log always holds at least one snapshot: the empty board at step 0.
/// Recording from an interior step discards the forward branch first, so
/// steps stay contiguous and every recorded step remains reachable by a
/// jump until a later move overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) snapshots: Vec<Board>,
}

impl History {
    /// Creates a log holding the single empty-board snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of recorded snapshots. Always at least 1.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if the log holds no snapshots.
    ///
    /// Never true for a log built through this module's operations; only
    /// externally supplied parts (see `Game::restore`) can be empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The last recorded step index.
    pub fn last_step(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// The snapshot at the given step, if recorded.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// All recorded snapshots in step order.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Records a snapshot as the successor of `step`, discarding any
    /// forward branch beyond it. Returns the new last step index.
    ///
    /// The discard is permanent: once play branches from an interior
    /// step, the old forward snapshots are gone.
    #[instrument(skip(self, board))]
    pub fn record_after(&mut self, step: usize, board: Board) -> usize {
        let discarded = self.snapshots.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "discarding forward branch");
        }
        self.snapshots.truncate(step + 1);
        self.snapshots.push(board);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptor for one recorded step, used by the presentation layer to
/// build its jump-to-move affordance.
///
/// Step 0 is the game start; every later step is "move #N".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListEntry {
    step: usize,
}

impl MoveListEntry {
    /// Creates a descriptor for the given step.
    pub fn new(step: usize) -> Self {
        Self { step }
    }

    /// The step this entry points at, valid as a `jump_to` argument.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns true for the game-start entry.
    pub fn is_start(&self) -> bool {
        self.step == 0
    }

    /// Human-readable label for this entry.
    pub fn label(&self) -> String {
        if self.is_start() {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

impl std::fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
