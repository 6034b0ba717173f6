//! Reachability invariants for tic-tac-toe boards.
//!
//! A board can only arise from alternating play starting with X if every
//! invariant here holds for its [`BoardSummary`](crate::BoardSummary). Each
//! one is testable on its own, and they compose into
//! [`ReachabilityInvariants`], checked in declaration order.

use serde::{Deserialize, Serialize};

pub mod piece_count;
pub mod win_parity;

pub use piece_count::{CountGapInvariant, XMovesFirstInvariant};
pub use win_parity::{OWinParityInvariant, XWinParityInvariant};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// The violation reported when the invariant does not hold.
    fn violation() -> Violation;
}

/// Why a board cannot arise from legal alternating play.
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
pub enum Violation {
    /// Piece counts differ by more than one.
    #[display("piece counts differ by more than one")]
    CountGap,
    /// O has placed more pieces than X.
    #[display("O has more pieces than X")]
    OutOfTurn,
    /// X has a line but counts are tied, so O moved last.
    #[display("X has a line but O moved last")]
    XWonOnTiedCount,
    /// O has a line but X has one more piece, so X moved last.
    #[display("O has a line but X moved last")]
    OWonAfterX,
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples; members are checked left to
/// right.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<Violation>>;

    /// Stops at the first invariant that does not hold.
    fn check_first(state: &S) -> Result<(), Violation>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<Violation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push($inv::violation());
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }

            fn check_first(state: &S) -> Result<(), Violation> {
                $(
                    if !$inv::holds(state) {
                        return Err($inv::violation());
                    }
                )+
                Ok(())
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every reachability invariant, in the order they are checked.
pub type ReachabilityInvariants = (
    CountGapInvariant,
    XMovesFirstInvariant,
    XWinParityInvariant,
    OWinParityInvariant,
);
