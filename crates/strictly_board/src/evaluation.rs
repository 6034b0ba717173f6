//! Board classification.
//!
//! Reachability is always decided before any win is reported: a board
//! showing a line together with an impossible move history is
//! [`BoardState::Unreachable`], never a win.

use crate::invariants::{InvariantSet, ReachabilityInvariants, Violation};
use crate::{Board, BoardState, BoardSummary, Piece};
use tracing::{debug, instrument};

/// Classifies `board`.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> BoardState {
    let summary = BoardSummary::of(board);
    let state = if ReachabilityInvariants::check_first(&summary).is_err() {
        BoardState::Unreachable
    } else if summary.has_line(Piece::X) {
        BoardState::XWins
    } else if summary.has_line(Piece::O) {
        BoardState::OWins
    } else {
        BoardState::NoWinner
    };
    debug!(%state, "Evaluated board");
    state
}

/// Reports the first reachability check `board` fails, if any.
#[instrument(skip(board), fields(board = %board))]
pub fn check_reachable(board: &Board) -> Result<(), Violation> {
    ReachabilityInvariants::check_first(&BoardSummary::of(board))
}

impl Board {
    /// Classifies this board. See [`evaluate`].
    pub fn evaluate(&self) -> BoardState {
        evaluate(self)
    }

    /// Reports why this board is unreachable, if it is.
    pub fn check_reachable(&self) -> Result<(), Violation> {
        check_reachable(self)
    }
}
