//! First-class action types for the marker game.
//!
//! Collaborators describe what they want as a [`Command`] value and hand it
//! to the engine; nothing inside the engine listens for events.

use super::{MoveProtocol, Orientation, Player, Position};
use serde::{Deserialize, Serialize};

/// A request a collaborator can make of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Remove the inclusive span between two endpoints (range protocol).
    Range {
        /// First endpoint.
        from: Position,
        /// Second endpoint.
        to: Position,
    },
    /// Remove a single marker (point protocol).
    Point {
        /// Cell to clear.
        target: Position,
        /// Axis chosen for the turn; only read on the first sub-move.
        orientation: Orientation,
    },
    /// Hand the turn to the opponent (point protocol).
    EndTurn,
}

impl Command {
    /// Protocol this command belongs to.
    pub fn protocol(&self) -> MoveProtocol {
        match self {
            Command::Range { .. } => MoveProtocol::Range,
            Command::Point { .. } | Command::EndTurn => MoveProtocol::Point,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Range { from, to } => write!(f, "range {} -> {}", from, to),
            Command::Point {
                target,
                orientation,
            } => write!(f, "point {} ({})", target, orientation),
            Command::EndTurn => write!(f, "end turn"),
        }
    }
}

/// A successful removal, as kept in the match history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Removal {
    /// Player who took the markers.
    pub player: Player,
    /// Cells cleared by the move, in span order.
    pub cells: Vec<Position>,
}

/// Reason a move was rejected.
///
/// Every variant is recoverable: the board and the active player are left
/// as they were.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate lies outside the board.
    #[display("Position {} is off the board", _0)]
    OffBoard(Position),

    /// Range endpoints share neither a row nor a column.
    #[display("Positions {} and {} share neither a row nor a column", _0, _1)]
    NotAligned(Position, Position),

    /// A cell inside the span has already been taken.
    #[display("Span is interrupted at {}", _0)]
    SpanInterrupted(Position),

    /// The target marker has already been taken.
    #[display("Marker at {} was already removed", _0)]
    MarkerRemoved(Position),

    /// A follow-up point move is not adjacent to the anchor along the locked axis.
    #[display("Position {} is not adjacent to {} along the {} axis", _0, _1, _2)]
    NotAdjacent(Position, Position, Orientation),

    /// The command belongs to the other move protocol.
    #[display("Command requires the {} protocol but the match uses {}", _0, _1)]
    WrongProtocol(MoveProtocol, MoveProtocol),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
