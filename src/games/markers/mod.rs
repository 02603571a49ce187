//! Misère marker game: players take markers along rows and columns, and
//! whoever takes the last one loses.

mod action;
mod board;
mod contracts;
mod engine;
mod game;
mod invariants;
mod phases;
mod position;
pub mod rules;
mod turn;
mod types;

pub use action::{Command, MoveError, Removal};
pub use board::{Board, BoardError};
pub use contracts::{BoardAccepts, Contract, MoveContract, ProtocolMatches};
pub use engine::{GameEngine, MoveReport};
pub use game::MarkerGame;
pub use invariants::{
    AnchorConsistentInvariant, Invariant, InvariantSet, InvariantViolation, MarkerInvariants,
    MonotonicBoardInvariant, OutcomeConsistentInvariant,
};
pub use phases::Outcome;
pub use position::{ParsePositionError, Position};
pub use turn::{Anchor, TurnPhase, TurnTracker};
pub use types::{Cell, MoveProtocol, Orientation, Player};
