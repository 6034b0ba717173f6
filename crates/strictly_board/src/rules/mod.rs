//! Board rules for tic-tac-toe.
//!
//! This module contains pure functions over a [`Board`](crate::Board).
//! Rules are separated from board storage so invariants and the
//! classifier can compose them.

pub mod count;
pub mod summary;
pub mod win;

pub use count::{count, Tally};
pub use summary::BoardSummary;
pub use win::{has_line, winning_lines, LINES};
