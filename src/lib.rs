//! Tic-tac-toe game core with a snapshot history and time travel.
//!
//! Every move records a full board snapshot in an append-only-from-the-
//! cursor log, so any earlier state can be revisited with [`Game::jump_to`]
//! and play can branch forward again from there. The next move after a
//! jump discards the old forward branch. Rendering and input handling
//! belong to a host application; this crate is the state machine it
//! calls into and reads back from.
//!
//! # Architecture
//!
//! - **Types / Position**: domain vocabulary (players, squares, boards)
//! - **Rules**: pure win and draw detection over a single snapshot
//! - **History**: the snapshot log and jump-to-move descriptors
//! - **Game**: the engine tying the log to a cursor
//! - **Invariants / Contracts**: first-class structural guarantees,
//!   verified as postconditions in debug builds and on restore
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.make_move(Position::TopLeft);
//! game.make_move(Position::Center);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//!
//! // Revisit the opening position, then branch forward again.
//! game.jump_to(0)?;
//! game.make_move(Position::Center);
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), tictactoe_timeline::JumpError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod game;
mod history;
mod invariants;
mod position;
mod rules;
mod types;

// Crate-level exports - Game engine
pub use game::{Game, JumpError, MoveError, RestoreError};

// Crate-level exports - Snapshot log and move descriptors
pub use history::{History, MoveListEntry};

// Crate-level exports - Domain types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{check_winner, is_draw, is_full};

// Crate-level exports - Contracts
pub use contracts::{
    Contract, GameNotOver, LegalMove, MoveContract, SquareIsEmpty, assert_invariants,
};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingMarkInvariant, CursorInBoundsInvariant, EmptyStartInvariant, GameInvariants,
    Invariant, InvariantSet, InvariantViolation, MonotonicHistoryInvariant,
};
