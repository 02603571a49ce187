//! Strictly Markers library - a misère marker-removal game
//!
//! Two players take turns removing markers from an n×n board. Whoever
//! removes the last marker loses.
//!
//! # Architecture
//!
//! - **Games**: board, rules, turn tracking and the [`GameEngine`] facade
//! - **Config**: TOML match settings ([`GameConfig`])
//! - **Roster**: display names for the two seats
//! - **Console**: range-move frontend over any reader and writer
//! - **TUI**: point-move frontend on a ratatui board
//!
//! # Example
//!
//! ```
//! use strictly_markers::{Command, GameEngine, MarkerGame, MoveProtocol, Player, Position};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut engine = GameEngine::new(3, MoveProtocol::Range)?;
//! engine.apply(Command::Range {
//!     from: Position::new(0, 0),
//!     to: Position::new(0, 2),
//! })?;
//! assert_eq!(engine.active_player(), Player::Player2);
//! assert_eq!(engine.board().present_count(), 6);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod roster;
mod tui;

/// Pure legality checks, usable without an engine.
pub use games::markers::rules;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Frontends
pub use console::Console;
pub use tui::{move_cursor, run_tui, Action, App, Selection};

// Crate-level exports - Names
pub use roster::{Character, PlayerNames, Roster, RosterError};

// Crate-level exports - Game types
pub use games::markers::{
    Anchor, AnchorConsistentInvariant, Board, BoardAccepts, BoardError, Cell, Command, Contract,
    GameEngine, Invariant, InvariantSet, InvariantViolation, MarkerGame, MarkerInvariants,
    MonotonicBoardInvariant, MoveContract, MoveError, MoveProtocol, MoveReport, Orientation,
    Outcome, OutcomeConsistentInvariant, ParsePositionError, Player, Position, ProtocolMatches,
    Removal, TurnPhase, TurnTracker,
};
