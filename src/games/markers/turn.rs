//! Turn bookkeeping: who moves, and where the current turn is anchored.

use super::{Orientation, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Position and locked axis of the latest point removal in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Anchor {
    /// Cell of the latest removal (or attempted first removal).
    pub position: Position,
    /// Axis the turn is locked to.
    pub orientation: Orientation,
}

/// Phase of the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No sub-move completed yet.
    Idle,
    /// At least one sub-move completed; follow-ups must chain from the anchor.
    Anchored,
}

/// Active player plus the per-turn anchor state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTracker {
    active: Player,
    anchor: Option<Anchor>,
    moved: bool,
}

impl TurnTracker {
    /// Starts a match with Player 1 to move.
    pub fn new() -> Self {
        Self {
            active: Player::Player1,
            anchor: None,
            moved: false,
        }
    }

    /// Player whose turn it is.
    pub fn active(&self) -> Player {
        self.active
    }

    /// Recorded anchor, if any.
    ///
    /// May be set while the turn is still [`TurnPhase::Idle`]: a rejected
    /// first sub-move still records its target.
    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    /// True once a sub-move has succeeded this turn.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Current phase.
    pub fn phase(&self) -> TurnPhase {
        if self.moved {
            TurnPhase::Anchored
        } else {
            TurnPhase::Idle
        }
    }

    /// Anchor that constrains the next sub-move.
    ///
    /// `None` while idle, whatever anchor happens to be recorded.
    pub fn constraint(&self) -> Option<&Anchor> {
        match self.phase() {
            TurnPhase::Idle => None,
            TurnPhase::Anchored => self.anchor.as_ref(),
        }
    }

    /// Orientation in force for the next sub-move.
    ///
    /// Once anchored the turn keeps its axis; while idle the caller's
    /// choice applies.
    pub fn orientation_for(&self, requested: Orientation) -> Orientation {
        self.constraint()
            .map(|a| a.orientation)
            .unwrap_or(requested)
    }

    /// Records a new anchor.
    #[instrument(skip(self))]
    pub fn set_anchor(&mut self, anchor: Anchor) {
        debug!(?anchor, "Anchor recorded");
        self.anchor = Some(anchor);
    }

    /// Marks a successful sub-move at `anchor`.
    #[instrument(skip(self))]
    pub fn record_sub_move(&mut self, anchor: Anchor) {
        self.anchor = Some(anchor);
        self.moved = true;
    }

    /// Flips the active player without touching the anchor.
    ///
    /// Used by the range protocol, which never anchors.
    #[instrument(skip(self), fields(from = %self.active))]
    pub fn advance(&mut self) {
        self.active = self.active.opponent();
        debug!(active = %self.active, "Turn passed");
    }

    /// Closes the turn: clears anchor and flag, then flips the active player.
    #[instrument(skip(self), fields(from = %self.active))]
    pub fn end_turn(&mut self) {
        self.anchor = None;
        self.moved = false;
        self.advance();
    }
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new()
    }
}
