//! Core domain types for the marker game.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player (moves first in every new match).
    #[display("Player 1")]
    Player1,
    /// Second player.
    #[display("Player 2")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// A marker occupies the cell.
    Present,
    /// The marker has been taken.
    Removed,
}

impl Cell {
    /// Digit used by the text rendering (1 = present, 0 = removed).
    pub fn digit(self) -> u8 {
        match self {
            Cell::Present => 1,
            Cell::Removed => 0,
        }
    }
}

/// Axis a point-move turn is locked to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Orientation {
    /// Row selection: follow-up removals must sit in an adjacent column.
    #[display("row")]
    RowLocked,
    /// Column selection: follow-up removals must sit in an adjacent row.
    #[display("column")]
    ColumnLocked,
}

/// Which move protocol an engine enforces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MoveProtocol {
    /// Bulk removal of a contiguous span; the turn passes automatically.
    #[default]
    #[display("range")]
    Range,
    /// Single removals chained by adjacency; the turn passes on request.
    #[display("point")]
    Point,
}
