//! Keyboard mapping for the terminal frontend.

use crate::games::markers::{Orientation, Position};
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Cursor(KeyCode),
    /// Lock the turn to the cursor's row or column.
    Select(Orientation),
    /// Take the marker under the cursor.
    Remove,
    /// Hand the turn over.
    EndTurn,
    /// Start a fresh match.
    Restart,
    /// Leave the app.
    Quit,
}

impl Action {
    /// Maps a key to an action, if it has one.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Action::Cursor(key))
            }
            KeyCode::Char('r') => Some(Action::Select(Orientation::RowLocked)),
            KeyCode::Char('c') => Some(Action::Select(Orientation::ColumnLocked)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Remove),
            KeyCode::Char('e') => Some(Action::EndTurn),
            KeyCode::Char('n') => Some(Action::Restart),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Moves the cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode, size: usize) -> Position {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Up => Position::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Position::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Position::new(cursor.row, (cursor.col + 1).min(last)),
        _ => cursor,
    }
}
