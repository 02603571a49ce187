//! Application state and logic.

use super::input::{move_cursor, Action};
use crate::games::markers::{GameEngine, Orientation, Position};
use crate::roster::PlayerNames;
use tracing::{debug, info, instrument};

/// The row or column a player picked for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Axis the turn is locked to.
    pub orientation: Orientation,
    /// Row index (row-locked) or column index (column-locked).
    pub line: usize,
}

impl Selection {
    /// True when `pos` lies on the selected line.
    pub fn contains(&self, pos: Position) -> bool {
        match self.orientation {
            Orientation::RowLocked => pos.row == self.line,
            Orientation::ColumnLocked => pos.col == self.line,
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.orientation, self.line + 1)
    }
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    names: PlayerNames,
    cursor: Position,
    selection: Option<Selection>,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the app around a point-protocol engine.
    pub fn new(engine: GameEngine, names: PlayerNames) -> Self {
        let status_message = format!("{}'s turn", names.name(engine.active_player()));
        Self {
            engine,
            names,
            cursor: Position::new(0, 0),
            selection: None,
            status_message,
            should_quit: false,
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Display names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current row/column selection.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a cell can be clicked under the current selection.
    pub fn is_enabled(&self, pos: Position) -> bool {
        self.selection.is_none_or(|s| s.contains(pos))
    }

    fn active_name(&self) -> &str {
        self.names.name(self.engine.active_player())
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Cursor(key) => {
                self.cursor = move_cursor(self.cursor, key, self.engine.board().size());
            }
            Action::Select(orientation) => self.select(orientation),
            Action::Remove => self.remove(),
            Action::EndTurn => self.end_turn(),
            Action::Restart => self.restart(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn select(&mut self, orientation: Orientation) {
        if self.engine.turn().has_moved() {
            self.status_message = "The selection is fixed once a marker is taken".to_string();
            return;
        }
        let line = match orientation {
            Orientation::RowLocked => self.cursor.row,
            Orientation::ColumnLocked => self.cursor.col,
        };
        let selection = Selection { orientation, line };
        self.selection = Some(selection);
        self.status_message = format!("{} selected {}", self.active_name(), selection);
    }

    fn remove(&mut self) {
        if self.engine.is_game_over() {
            self.status_message = "Game over. Press 'n' for a new match.".to_string();
            return;
        }
        let Some(selection) = self.selection else {
            self.status_message = "Pick a row (r) or column (c) first".to_string();
            return;
        };
        if !selection.contains(self.cursor) {
            self.status_message = format!("{} is outside {}", self.cursor, selection);
            return;
        }

        match self
            .engine
            .apply_point_move(self.cursor, selection.orientation)
        {
            Ok(report) => match report.outcome {
                Some(outcome) => {
                    info!(%outcome, "Game over");
                    self.status_message = format!(
                        "{} took the last marker. {} wins! Press 'n' for a new match.",
                        self.names.name(outcome.loser()),
                        self.names.name(outcome.winner())
                    );
                }
                None => {
                    self.status_message = format!(
                        "{} took {}. Continue or press 'e' to end the turn.",
                        self.active_name(),
                        self.cursor
                    );
                }
            },
            Err(e) => self.status_message = format!("Illegal move: {}", e),
        }
    }

    fn end_turn(&mut self) {
        match self.engine.end_turn() {
            Ok(report) => {
                self.selection = None;
                self.status_message = format!("{}'s turn", self.names.name(report.next));
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Restarts the match.
    pub fn restart(&mut self) {
        debug!("Restarting match");
        self.engine.new_match();
        self.selection = None;
        self.cursor = Position::new(0, 0);
        self.status_message = format!("New match. {}'s turn", self.active_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::markers::{MoveProtocol, Player};
    use crossterm::event::KeyCode;

    fn app(size: usize) -> App {
        App::new(
            GameEngine::new(size, MoveProtocol::Point).unwrap(),
            PlayerNames::default(),
        )
    }

    #[test]
    fn test_remove_requires_selection() {
        let mut app = app(3);
        app.handle(Action::Remove);
        assert!(app.status_message().contains("Pick a row"));
        assert_eq!(app.engine().board().present_count(), 9);
    }

    #[test]
    fn test_selection_disables_other_lines() {
        let mut app = app(3);
        app.handle(Action::Cursor(KeyCode::Down));
        app.handle(Action::Select(Orientation::RowLocked));
        assert!(app.is_enabled(Position::new(1, 2)));
        assert!(!app.is_enabled(Position::new(0, 2)));
    }

    #[test]
    fn test_turn_cycle() {
        let mut app = app(3);
        app.handle(Action::Select(Orientation::RowLocked));
        app.handle(Action::Remove);
        app.handle(Action::Cursor(KeyCode::Right));
        app.handle(Action::Remove);
        assert_eq!(app.engine().board().present_count(), 7);

        // Selection is locked mid-turn.
        app.handle(Action::Select(Orientation::ColumnLocked));
        assert_eq!(
            app.selection().map(|s| s.orientation),
            Some(Orientation::RowLocked)
        );

        app.handle(Action::EndTurn);
        assert_eq!(app.engine().active_player(), Player::Player2);
        assert!(app.selection().is_none());
        assert_eq!(app.status_message(), "Player 2's turn");
    }

    #[test]
    fn test_last_marker_reports_loser() {
        let mut app = app(1);
        app.handle(Action::Select(Orientation::ColumnLocked));
        app.handle(Action::Remove);
        assert!(app.status_message().contains("Player 1 took the last marker"));
        assert_eq!(app.engine().winner(), Some(Player::Player2));

        app.handle(Action::Restart);
        assert_eq!(app.engine().board().present_count(), 1);
        assert_eq!(app.engine().active_player(), Player::Player1);
    }
}
