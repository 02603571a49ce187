//! Outcome consistency: a result exists exactly when the board is empty.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: the outcome is recorded iff the board is empty, and the
/// loser is whoever made the last recorded removal.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameEngine> for OutcomeConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        match (engine.outcome(), engine.is_game_over()) {
            (None, false) => true,
            (Some(outcome), true) => engine
                .history()
                .last()
                .is_some_and(|last| last.player == outcome.loser()),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Outcome is recorded exactly when the last marker is gone, against its remover"
    }
}
