//! Properties every in-progress game satisfies.
//!
//! Each invariant is a zero-sized type with a name and a predicate. Tuples
//! of invariants form a set that reports every failing member at once; the
//! game controller runs [`GameInvariants`] after each move in debug builds.

mod balance;
mod cell_count;
mod history;

pub use balance::MarkBalanceInvariant;
pub use cell_count::CellCountInvariant;
pub use history::HistoryConsistentInvariant;

use crate::{Board, GameInProgress};

/// A property of states of type `S`.
pub trait Invariant<S> {
    /// Short statement of the property, used in violation reports.
    const NAME: &'static str;

    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;
}

/// A failed invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{}", name)]
pub struct InvariantViolation {
    /// Name of the invariant that failed.
    pub name: &'static str,
}

/// Invariants checked together.
pub trait InvariantSet<S> {
    /// Names of the members that do not hold, in declaration order.
    fn failing(state: &S) -> Vec<InvariantViolation>;

    /// Succeeds only if every member holds.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let failing = Self::failing(state);
        if failing.is_empty() {
            Ok(())
        } else {
            Err(failing)
        }
    }
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn failing(state: &S) -> Vec<InvariantViolation> {
                [$(($member::NAME, $member::holds as fn(&S) -> bool)),+]
                    .into_iter()
                    .filter(|(_, holds)| !holds(state))
                    .map(|(name, _)| InvariantViolation { name })
                    .collect()
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// Every invariant of an in-progress game.
pub type GameInvariants = (
    CellCountInvariant,
    MarkBalanceInvariant,
    HistoryConsistentInvariant,
);

impl Invariant<GameInProgress> for CellCountInvariant {
    const NAME: &'static str = <Self as Invariant<Board>>::NAME;

    fn holds(game: &GameInProgress) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }
}
