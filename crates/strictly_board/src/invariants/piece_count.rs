//! Invariants over the number of pieces each side has placed.

use super::{Invariant, Violation};
use crate::BoardSummary;
use tracing::warn;

/// Invariant: X and O counts differ by at most one.
///
/// Each turn places exactly one piece, so the sides can never be more
/// than a single move apart.
pub struct CountGapInvariant;

impl Invariant<BoardSummary> for CountGapInvariant {
    fn holds(summary: &BoardSummary) -> bool {
        let tally = summary.tally();
        let valid = tally.gap() <= 1;
        if !valid {
            warn!(x_count = tally.x(), o_count = tally.o(), "Piece count gap violated");
        }
        valid
    }

    fn violation() -> Violation {
        Violation::CountGap
    }
}

/// Invariant: O never has more pieces than X.
pub struct XMovesFirstInvariant;

impl Invariant<BoardSummary> for XMovesFirstInvariant {
    fn holds(summary: &BoardSummary) -> bool {
        let tally = summary.tally();
        let valid = tally.o() <= tally.x();
        if !valid {
            warn!(x_count = tally.x(), o_count = tally.o(), "O ahead of X");
        }
        valid
    }

    fn violation() -> Violation {
        Violation::OutOfTurn
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
    fn test_count_gap_holds_within_one() {
        for s in ["---------", "x--------", "xo-------", "xox------"] {
            assert!(CountGapInvariant::holds(&summary(s)), "{s}");
        }
    }

    #[test]
    fn test_count_gap_detects_extra_x() {
        assert!(!CountGapInvariant::holds(&summary("xoxOxxoxx")));
    }

    #[test]
    fn test_x_moves_first_detects_extra_o() {
        let summary = summary("o--------");
        assert!(CountGapInvariant::holds(&summary));
        assert!(!XMovesFirstInvariant::holds(&summary));
    }
}
