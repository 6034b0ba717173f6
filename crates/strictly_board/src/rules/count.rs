//! Piece counting.

use super::super::{Board, Cell, Piece};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Counts the cells occupied by `piece`.
#[instrument(skip(board), fields(board = %board))]
pub fn count(board: &Board, piece: Piece) -> usize {
    board
        .cells()
        .iter()
        .filter(|c| **c == Cell::Occupied(piece))
        .count()
}

/// Number of X and O pieces on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Pieces placed by X.
    #[getter(copy)]
    x: usize,
    /// Pieces placed by O.
    #[getter(copy)]
    o: usize,
}

impl Tally {
    /// Counts both pieces on `board`.
    pub fn of(board: &Board) -> Self {
        Self {
            x: count(board, Piece::X),
            o: count(board, Piece::O),
        }
    }

    /// Absolute difference between the two counts.
    pub fn gap(&self) -> usize {
        self.x.abs_diff(self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_counts_zero() {
        let board = Board::parse("---------").unwrap();
        assert_eq!(count(&board, Piece::X), 0);
        assert_eq!(count(&board, Piece::O), 0);
    }

    #[test]
    fn test_count_ignores_case_and_other_symbols() {
        let board = Board::parse("xXoO#1 -o").unwrap();
        let tally = Tally::of(&board);
        assert_eq!(tally.x(), 2);
        assert_eq!(tally.o(), 3);
        assert_eq!(tally.gap(), 1);
    }
}
