//! Invariants tying a completed line to who moved last.
//!
//! X moves on odd turns, so after an X move X has one more piece than O;
//! after an O move the counts are tied. A line can only belong to the side
//! that moved last.

use super::{Invariant, Violation};
use crate::BoardSummary;
use tracing::warn;

/// Invariant: X cannot have a line while counts are tied.
pub struct XWinParityInvariant;

impl Invariant<BoardSummary> for XWinParityInvariant {
    fn holds(summary: &BoardSummary) -> bool {
        let tally = summary.tally();
        let valid = !(summary.x_line() && tally.x() == tally.o());
        if !valid {
            warn!(x_count = tally.x(), o_count = tally.o(), "X line with tied counts");
        }
        valid
    }

    fn violation() -> Violation {
        Violation::XWonOnTiedCount
    }
}

/// Invariant: O cannot have a line when X has one more piece.
pub struct OWinParityInvariant;

impl Invariant<BoardSummary> for OWinParityInvariant {
    fn holds(summary: &BoardSummary) -> bool {
        let tally = summary.tally();
        let valid = !(summary.o_line() && tally.x() == tally.o() + 1);
        if !valid {
            warn!(x_count = tally.x(), o_count = tally.o(), "O line after X moved");
        }
        valid
    }

    fn violation() -> Violation {
        Violation::OWonAfterX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn summary(s: &str) -> BoardSummary {
        BoardSummary::of(&Board::parse(s).unwrap())
    }

    #[test]
    fn test_x_line_with_tied_counts() {
        let summary = summary("xoXxoOxo-");
        assert!(!XWinParityInvariant::holds(&summary));
        assert!(OWinParityInvariant::holds(&summary));
    }

    #[test]
    fn test_x_line_after_x_move() {
        assert!(XWinParityInvariant::holds(&summary("xoxxooxxo")));
    }

    #[test]
    fn test_o_line_after_x_move() {
        let summary = summary("oXooxXoxx");
        assert!(!OWinParityInvariant::holds(&summary));
        assert!(XWinParityInvariant::holds(&summary));
    }

    #[test]
    fn test_o_line_with_tied_counts() {
        assert!(OWinParityInvariant::holds(&summary("ooo-xxxxo")));
    }
}
