//! Monotonic board invariant: markers only ever disappear, and only through recorded moves.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: the board equals a full board with the history replayed.
///
/// Every recorded removal must have found its cells present, so no cell is
/// taken twice and nothing comes back without a reset.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let Ok(mut reconstructed) = Board::new(engine.board().size()) else {
            return false;
        };

        for removal in engine.history() {
            for pos in &removal.cells {
                if !reconstructed.is_present(*pos) {
                    return false;
                }
                reconstructed.remove(*pos);
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board only loses markers through recorded moves"
    }
}
