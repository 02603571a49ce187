//! Match outcome.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of a finished match.
///
/// Misère rule: whoever takes the last marker loses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    winner: Player,
    loser: Player,
}

impl Outcome {
    /// Builds the outcome for a match whose last marker was taken by `remover`.
    pub fn last_marker_taken_by(remover: Player) -> Self {
        Self {
            winner: remover.opponent(),
            loser: remover,
        }
    }

    /// Player who won.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Player who took the last marker.
    pub fn loser(&self) -> Player {
        self.loser
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins ({} took the last marker)", self.winner, self.loser)
    }
}
