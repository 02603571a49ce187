//! Properties every reachable engine state satisfies.
//!
//! The engine checks [`MarkerInvariants`] after each mutation in debug
//! builds; each invariant can also be asserted on its own in tests.

/// A property of a state `S`.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;

    /// The violation `state` commits, if any.
    fn check(state: &S) -> Option<InvariantViolation> {
        (!Self::holds(state)).then(|| InvariantViolation::new(Self::description()))
    }
}

/// A property that failed to hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_new::new)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Statement of the broken property.
    #[new(into)]
    pub description: String,
}

/// Invariants checked as a group; implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Every violation in the set, in tuple order.
    fn violations(state: &S) -> Vec<InvariantViolation>;

    /// `Err` with all violations when any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let found = Self::violations(state);
        if found.is_empty() {
            Ok(())
        } else {
            Err(found)
        }
    }
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn violations(state: &S) -> Vec<InvariantViolation> {
                [$($inv::check(state)),+].into_iter().flatten().collect()
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod anchor_consistent;
pub mod monotonic_board;
pub mod outcome_consistent;

pub use anchor_consistent::AnchorConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All marker-game invariants as a composable set.
pub type MarkerInvariants = (
    MonotonicBoardInvariant,
    AnchorConsistentInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::markers::{Command, GameEngine, MoveProtocol, Orientation, Position};

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        let engine = GameEngine::new(4, MoveProtocol::Point).unwrap();
        assert!(MarkerInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let commands = [
            Command::Point {
                target: Position::new(0, 0),
                orientation: Orientation::RowLocked,
            },
            Command::Point {
                target: Position::new(0, 1),
                orientation: Orientation::RowLocked,
            },
            Command::EndTurn,
        ];
        let engine = GameEngine::new(3, MoveProtocol::Point)
            .unwrap()
            .replay(&commands)
            .unwrap();
        assert!(MarkerInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new(1, MoveProtocol::Range).unwrap();
        // Empty the board behind the engine's back: no history, no outcome.
        engine.board.remove(Position::new(0, 0));

        let violations = MarkerInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_single_invariant_check() {
        let mut engine = GameEngine::new(1, MoveProtocol::Range).unwrap();
        assert_eq!(OutcomeConsistentInvariant::check(&engine), None);

        engine.board.remove(Position::new(0, 0));
        let violation = OutcomeConsistentInvariant::check(&engine).unwrap();
        assert_eq!(
            violation.to_string(),
            <OutcomeConsistentInvariant as Invariant<GameEngine>>::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new(2, MoveProtocol::Range).unwrap();
        type TwoInvariants = (MonotonicBoardInvariant, OutcomeConsistentInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
