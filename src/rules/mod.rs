//! Game rules: win and draw detection.
//!
//! This module contains pure functions for evaluating a single board
//! snapshot. Rules never touch the snapshot log, so the same functions
//! serve the engine, the contract system, and any caller holding a board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
