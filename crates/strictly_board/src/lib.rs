//! Strictly Board - tic-tac-toe board classification
//!
//! Parses a flattened 3x3 board and decides whether it shows no winner,
//! an X win, an O win, or a position that alternating play starting with
//! X can never reach.
//!
//! # Architecture
//!
//! - **Types**: immutable [`Board`] built from 9 bytes of text, [`Cell`], [`Piece`]
//! - **Rules**: pure counting and line detection
//! - **Invariants**: the reachability checks, composable as a set
//! - **Evaluation**: precedence-ordered classification into [`BoardState`]
//!
//! # Example
//!
//! ```
//! use strictly_board::{Board, BoardState};
//!
//! # fn example() -> Result<(), strictly_board::ValidationError> {
//! let board = Board::parse("xoxxooxxo")?;
//! assert_eq!(board.evaluate(), BoardState::XWins);
//!
//! assert!(Board::parse("xxoooxoo").is_err());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod evaluation;
mod position;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Errors
pub use error::{ValidationError, ValidationErrorKind};

// Crate-level exports - Board types
pub use position::{Position, SIDE, SQUARES};
pub use rules::{BoardSummary, Tally};
pub use types::{Board, BoardState, Cell, Piece};

// Crate-level exports - Classification
pub use evaluation::{check_reachable, evaluate};
pub use invariants::Violation;
