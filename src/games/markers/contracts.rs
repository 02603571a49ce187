//! Contract-based validation for the marker game.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Command, MoveError};
use super::engine::GameEngine;
use super::invariants::{InvariantSet, MarkerInvariants};
use super::rules;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the command belongs to the engine's protocol.
pub struct ProtocolMatches;

impl ProtocolMatches {
    /// Rejects commands meant for the other protocol.
    #[instrument(skip(engine))]
    pub fn check(command: &Command, engine: &GameEngine) -> Result<(), MoveError> {
        let required = command.protocol();
        if required != engine.protocol() {
            Err(MoveError::WrongProtocol(required, engine.protocol()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the board accepts the removal in the current turn.
pub struct BoardAccepts;

impl BoardAccepts {
    /// Runs the board rules for the command without mutating anything.
    #[instrument(skip(engine))]
    pub fn check(command: &Command, engine: &GameEngine) -> Result<(), MoveError> {
        match command {
            Command::Range { from, to } => {
                rules::check_range_move(engine.board(), *from, *to).map(|_| ())
            }
            Command::Point { target, .. } => {
                rules::check_point_move(engine.board(), engine.turn().constraint(), *target)
            }
            Command::EndTurn => Ok(()),
        }
    }
}

/// Contract for engine commands.
///
/// Preconditions:
/// - Command matches the engine's protocol
/// - Board accepts the removal
///
/// Postconditions:
/// - Board only loses markers, and exactly the recorded ones
/// - Turn anchor is coherent with the sub-move flag
/// - Outcome is recorded exactly when the board is empty
pub struct MoveContract;

impl Contract<GameEngine, Command> for MoveContract {
    fn pre(engine: &GameEngine, command: &Command) -> Result<(), MoveError> {
        ProtocolMatches::check(command, engine)?;
        BoardAccepts::check(command, engine)
    }

    fn post(_before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        MarkerInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
