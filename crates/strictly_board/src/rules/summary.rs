//! Counts and lines gathered in one pass.

use super::super::{Board, Piece};
use super::{has_line, Tally};
use derive_getters::Getters;
use tracing::instrument;

/// Everything classification needs to know about a board.
///
/// Built once per evaluation so the reachability invariants and the win
/// checks share a single count and line scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct BoardSummary {
    /// Piece counts.
    #[getter(copy)]
    tally: Tally,
    /// Whether X has three in a row.
    #[getter(copy)]
    x_line: bool,
    /// Whether O has three in a row.
    #[getter(copy)]
    o_line: bool,
}

impl BoardSummary {
    /// Summarizes `board`.
    #[instrument(skip(board), fields(board = %board))]
    pub fn of(board: &Board) -> Self {
        Self {
            tally: Tally::of(board),
            x_line: has_line(board, Piece::X),
            o_line: has_line(board, Piece::O),
        }
    }

    /// Whether `piece` has three in a row.
    pub fn has_line(&self, piece: Piece) -> bool {
        match piece {
            Piece::X => self.x_line,
            Piece::O => self.o_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_matches_board_queries() {
        let board = Board::parse("xooxXoxoX").unwrap();
        let summary = BoardSummary::of(&board);
        assert_eq!(summary.tally(), board.tally());
        assert!(summary.has_line(Piece::X));
        assert!(!summary.has_line(Piece::O));
        assert_eq!(summary.x_line(), board.has_line(Piece::X));
    }
}
