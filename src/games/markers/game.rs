//! Capability contract shared by every frontend.

use super::action::{Command, MoveError};
use super::contracts::{Contract, MoveContract};
use super::engine::{GameEngine, MoveReport};
use super::Player;

/// What a frontend needs from a marker game.
///
/// Console and terminal drivers are written against this trait rather
/// than the concrete engine.
pub trait MarkerGame {
    /// Player whose turn it is.
    fn active_player(&self) -> Player;

    /// Whether `command` would be accepted right now. Never mutates.
    fn is_legal(&self, command: &Command) -> bool;

    /// Applies `command`.
    fn apply(&mut self, command: Command) -> Result<MoveReport, MoveError>;

    /// True once the last marker is gone.
    fn is_game_over(&self) -> bool;
}

impl MarkerGame for GameEngine {
    fn active_player(&self) -> Player {
        GameEngine::active_player(self)
    }

    fn is_legal(&self, command: &Command) -> bool {
        MoveContract::pre(self, command).is_ok()
    }

    fn apply(&mut self, command: Command) -> Result<MoveReport, MoveError> {
        self.execute(command)
    }

    fn is_game_over(&self) -> bool {
        GameEngine::is_game_over(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::markers::{MoveProtocol, Orientation, Position};

    fn drive(game: &mut impl MarkerGame, command: Command) -> bool {
        game.is_legal(&command) && game.apply(command).is_ok()
    }

    #[test]
    fn test_trait_drives_engine() {
        let mut engine = GameEngine::new(2, MoveProtocol::Point).unwrap();
        let first = Command::Point {
            target: Position::new(0, 0),
            orientation: Orientation::ColumnLocked,
        };
        assert!(drive(&mut engine, first));
        assert!(drive(&mut engine, Command::EndTurn));
        assert_eq!(MarkerGame::active_player(&engine), Player::Player2);
    }

    #[test]
    fn test_is_legal_does_not_anchor() {
        let mut engine = GameEngine::new(2, MoveProtocol::Point).unwrap();
        engine.board.remove(Position::new(1, 1));
        let command = Command::Point {
            target: Position::new(1, 1),
            orientation: Orientation::RowLocked,
        };
        assert!(!engine.is_legal(&command));
        assert!(engine.turn().anchor().is_none());
    }
}
