//! Line detection for tic-tac-toe.

use super::super::{Board, Cell, Piece, Position};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn is_filled_by(board: &Board, line: &[Position; 3], piece: Piece) -> bool {
    line.iter().all(|pos| board.get(*pos) == Cell::Occupied(piece))
}

/// Checks if `piece` has three in a row anywhere on the board.
#[instrument(skip(board), fields(board = %board))]
pub fn has_line(board: &Board, piece: Piece) -> bool {
    LINES.iter().any(|line| is_filled_by(board, line, piece))
}

/// Returns every line fully occupied by `piece`.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_lines(board: &Board, piece: Piece) -> Vec<[Position; 3]> {
    LINES
        .iter()
        .filter(|line| is_filled_by(board, line, piece))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_empty_board() {
        let board = Board::parse("---------").unwrap();
        assert!(!has_line(&board, Piece::X));
        assert!(!has_line(&board, Piece::O));
    }

    #[test]
    fn test_line_top_row() {
        let board = Board::parse("xxx------").unwrap();
        assert!(has_line(&board, Piece::X));
        assert!(!has_line(&board, Piece::O));
    }

    #[test]
    fn test_line_column() {
        let board = Board::parse("-o--o--o-").unwrap();
        assert!(has_line(&board, Piece::O));
        assert_eq!(
            winning_lines(&board, Piece::O),
            vec![[Position::TopCenter, Position::Center, Position::BottomCenter]]
        );
    }

    #[test]
    fn test_line_anti_diagonal() {
        let board = Board::parse("--O-o-O--").unwrap();
        assert!(has_line(&board, Piece::O));
    }

    #[test]
    fn test_incomplete_line() {
        let board = Board::parse("xx-------").unwrap();
        assert!(!has_line(&board, Piece::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::parse("xxo------").unwrap();
        assert!(!has_line(&board, Piece::X));
        assert!(!has_line(&board, Piece::O));
    }

    #[test]
    fn test_two_lines_reported_in_order() {
        let board = Board::parse("xooxXoxoX").unwrap();
        assert_eq!(
            winning_lines(&board, Piece::X),
            vec![
                [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
                [Position::TopLeft, Position::Center, Position::BottomRight],
            ]
        );
    }
}
