//! Anchor consistency: an anchored turn always knows where it is anchored.

use super::super::{GameEngine, TurnPhase};
use super::Invariant;

/// Invariant: once a sub-move succeeded this turn, an on-board anchor exists.
///
/// The reverse does not hold: a rejected first sub-move may leave an
/// anchor behind while the turn is still idle.
pub struct AnchorConsistentInvariant;

impl Invariant<GameEngine> for AnchorConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let turn = engine.turn();
        match turn.phase() {
            TurnPhase::Idle => true,
            TurnPhase::Anchored => turn
                .anchor()
                .is_some_and(|a| engine.board().is_on_board(a.position)),
        }
    }

    fn description() -> &'static str {
        "Anchored turns carry an on-board anchor"
    }
}
