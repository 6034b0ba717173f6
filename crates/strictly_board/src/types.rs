//! Core domain types for board classification.

use crate::error::ValidationError;
use crate::position::{Position, SIDE, SQUARES};
use crate::rules::Tally;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, Span};

/// A player's piece. X always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Piece {
    /// Piece X (moves first).
    X,
    /// Piece O (moves second).
    O,
}

impl Piece {
    /// Returns the other piece.
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Canonical lowercase symbol for this piece.
    pub fn symbol(self) -> char {
        match self {
            Piece::X => 'x',
            Piece::O => 'o',
        }
    }
}

/// A square's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    Empty,
    /// Square occupied by a piece.
    Occupied(Piece),
}

impl Cell {
    /// Maps one input character to a cell.
    ///
    /// `x`/`X` and `o`/`O` are pieces; every other character is empty.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'x' => Cell::Occupied(Piece::X),
            'o' => Cell::Occupied(Piece::O),
            _ => Cell::Empty,
        }
    }

    /// Canonical symbol: `x`, `o`, or `-` for empty.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(piece) => piece.symbol(),
        }
    }
}

/// Immutable 3x3 board parsed from a 9-byte string.
///
/// There is no way to change a board after construction; every query is a
/// pure function of the cells it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SQUARES],
}

impl Board {
    /// Parses a board from exactly 9 bytes in row-major order.
    ///
    /// The first three bytes are the top row. Each byte is mapped with
    /// [`Cell::from_char`]; only the length is validated. A multibyte
    /// character occupies one empty cell per byte.
    #[track_caller]
    #[instrument(skip(input), fields(found = tracing::field::Empty))]
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let found = input.len();
        Span::current().record("found", found);
        if found != SQUARES {
            debug!("Rejecting board with wrong length");
            return Err(ValidationError::invalid_length(SQUARES, found));
        }

        let mut cells = [Cell::Empty; SQUARES];
        for (cell, b) in cells.iter_mut().zip(input.bytes()) {
            *cell = Cell::from_char(char::from(b));
        }

        let board = Self { cells };
        debug!(board = %board, "Parsed board");
        Ok(board)
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; SQUARES] {
        &self.cells
    }

    /// Counts the cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        crate::rules::count(self, piece)
    }

    /// Counts both pieces at once.
    pub fn tally(&self) -> Tally {
        Tally::of(self)
    }

    /// Checks whether `piece` occupies at least one full line.
    pub fn has_line(&self, piece: Piece) -> bool {
        crate::rules::has_line(self, piece)
    }

    /// Returns every line fully occupied by `piece`.
    pub fn winning_lines(&self, piece: Piece) -> Vec<[Position; SIDE]> {
        crate::rules::winning_lines(self, piece)
    }

    /// Formats the board as a human-readable grid.
    pub fn display_grid(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Cell::Empty => ' ',
                Cell::Occupied(Piece::X) => 'X',
                Cell::Occupied(Piece::O) => 'O',
            };
            result.push(symbol);
            if pos.col() < SIDE - 1 {
                result.push('|');
            } else if pos.row() < SIDE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ValidationError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Board {
    type Error = ValidationError;

    #[track_caller]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Board {
    type Error = ValidationError;

    #[track_caller]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

/// Classification of a board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum BoardState {
    /// Reachable position where nobody has three in a row.
    #[display("no winner")]
    NoWinner,
    /// X has a line and moved last.
    #[display("X wins")]
    XWins,
    /// O has a line and moved last.
    #[display("O wins")]
    OWins,
    /// No sequence of alternating moves starting with X produces this board.
    #[display("unreachable")]
    Unreachable,
}

impl BoardState {
    /// Returns the winning piece, if any.
    pub fn winner(self) -> Option<Piece> {
        match self {
            BoardState::XWins => Some(Piece::X),
            BoardState::OWins => Some(Piece::O),
            BoardState::NoWinner | BoardState::Unreachable => None,
        }
    }

    /// Whether the board could arise from legal play.
    pub fn is_reachable(self) -> bool {
        self != BoardState::Unreachable
    }
}
