//! Game engine: the only place marker state is mutated.

use super::action::{Command, MoveError, Removal};
use super::board::{Board, BoardError};
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::phases::Outcome;
use super::rules;
use super::turn::{Anchor, TurnPhase, TurnTracker};
use super::{MoveProtocol, Orientation, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Player who issued the command.
    pub player: Player,
    /// Cells cleared by the command (empty for end-turn).
    pub removed: Vec<Position>,
    /// Set when this command emptied the board.
    pub outcome: Option<Outcome>,
    /// Player to act next.
    pub next: Player,
}

/// Rule engine for one match.
///
/// Owns the board and the turn state exclusively. Every method runs to
/// completion synchronously; callers serialize access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    pub(super) protocol: MoveProtocol,
    pub(super) board: Board,
    pub(super) turn: TurnTracker,
    pub(super) outcome: Option<Outcome>,
    pub(super) history: Vec<Removal>,
}

impl GameEngine {
    /// Creates an engine with a full `size × size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero.
    #[instrument]
    pub fn new(size: usize, protocol: MoveProtocol) -> Result<Self, BoardError> {
        let board = Board::new(size)?;
        info!(size, %protocol, "New match");
        Ok(Self {
            protocol,
            board,
            turn: TurnTracker::new(),
            outcome: None,
            history: Vec::new(),
        })
    }

    /// Move protocol this engine enforces.
    pub fn protocol(&self) -> MoveProtocol {
        self.protocol
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Turn state (active player, anchor, sub-move flag).
    pub fn turn(&self) -> &TurnTracker {
        &self.turn
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.turn.active()
    }

    /// True iff every marker has been removed.
    pub fn is_game_over(&self) -> bool {
        self.board.is_empty()
    }

    /// Outcome of the match, once the last marker is gone.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Winner of the match, once decided.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.map(|o| o.winner())
    }

    /// Successful removals since the board was last reset.
    pub fn history(&self) -> &[Removal] {
        &self.history
    }

    /// Whether a range move would be accepted by the board.
    ///
    /// Looks at the board only; the configured protocol is not consulted.
    pub fn is_legal_range_move(&self, from: Position, to: Position) -> bool {
        rules::is_legal_range_move(&self.board, from, to)
    }

    /// Whether a point move would be accepted in the current turn.
    ///
    /// Unlike [`apply_point_move`](Self::apply_point_move), this never
    /// records an anchor.
    pub fn is_legal_point_move(&self, target: Position) -> bool {
        rules::is_legal_point_move(&self.board, self.turn.constraint(), target)
    }

    fn ensure_protocol(&self, required: MoveProtocol) -> Result<(), MoveError> {
        if self.protocol != required {
            warn!(%required, actual = %self.protocol, "Protocol mismatch");
            return Err(MoveError::WrongProtocol(required, self.protocol));
        }
        Ok(())
    }

    /// Removes an inclusive span of markers and passes the turn.
    ///
    /// # Errors
    ///
    /// Rejections leave the board and the active player untouched:
    /// [`MoveError::WrongProtocol`] outside the range protocol, or any
    /// error from [`rules::check_range_move`].
    #[instrument(skip(self), fields(player = %self.turn.active()))]
    pub fn apply_range_move(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<MoveReport, MoveError> {
        self.ensure_protocol(MoveProtocol::Range)?;
        let cells = rules::check_range_move(&self.board, from, to).inspect_err(|e| {
            warn!(error = %e, "Range move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.turn.active();
        self.remove_cells(player, &cells);
        let outcome = self.evaluate_outcome(player);
        self.turn.advance();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(MoveReport {
            player,
            removed: cells,
            outcome,
            next: self.turn.active(),
        })
    }

    /// Removes a single marker within the current turn.
    ///
    /// On the first sub-move of a turn the target is recorded as the anchor
    /// before legality is decided, so a rejected first sub-move still moves
    /// the anchor (off-board targets excepted). `orientation` only matters
    /// for that first sub-move; afterwards the turn keeps its axis.
    ///
    /// The active player does not change; call [`end_turn`](Self::end_turn).
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongProtocol`] outside the point protocol, or any error
    /// from [`rules::check_point_move`].
    #[instrument(skip(self), fields(player = %self.turn.active(), phase = ?self.turn.phase()))]
    pub fn apply_point_move(
        &mut self,
        target: Position,
        orientation: Orientation,
    ) -> Result<MoveReport, MoveError> {
        self.ensure_protocol(MoveProtocol::Point)?;
        let orientation = self.turn.orientation_for(orientation);

        if self.turn.phase() == TurnPhase::Idle && self.board.is_on_board(target) {
            self.turn.set_anchor(Anchor::new(target, orientation));
        }

        rules::check_point_move(&self.board, self.turn.constraint(), target).inspect_err(
            |e| {
                warn!(error = %e, "Point move rejected");
            },
        )?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.turn.active();
        self.remove_cells(player, &[target]);
        self.turn.record_sub_move(Anchor::new(target, orientation));
        let outcome = self.evaluate_outcome(player);

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(MoveReport {
            player,
            removed: vec![target],
            outcome,
            next: self.turn.active(),
        })
    }

    /// Ends the current point-protocol turn.
    ///
    /// Clears the anchor and the sub-move flag and hands the turn over.
    /// Ending a turn without removing anything is allowed.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongProtocol`] under the range protocol, where turns
    /// pass automatically.
    #[instrument(skip(self), fields(player = %self.turn.active()))]
    pub fn end_turn(&mut self) -> Result<MoveReport, MoveError> {
        self.ensure_protocol(MoveProtocol::Point)?;
        let player = self.turn.active();
        self.turn.end_turn();
        Ok(MoveReport {
            player,
            removed: Vec::new(),
            outcome: None,
            next: self.turn.active(),
        })
    }

    /// Dispatches a command to the matching operation.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> Result<MoveReport, MoveError> {
        match command {
            Command::Range { from, to } => self.apply_range_move(from, to),
            Command::Point {
                target,
                orientation,
            } => self.apply_point_move(target, orientation),
            Command::EndTurn => self.end_turn(),
        }
    }

    /// Applies a sequence of commands, stopping at the first rejection.
    #[instrument(skip(self, commands), fields(count = commands.len()))]
    pub fn replay(mut self, commands: &[Command]) -> Result<Self, MoveError> {
        for command in commands {
            self.execute(*command)?;
        }
        Ok(self)
    }

    /// Puts every marker back.
    ///
    /// Clears the outcome and history. The active player, anchor and
    /// sub-move flag are turn state and stay as they are.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board.reset();
        self.outcome = None;
        self.history.clear();
        info!(active = %self.turn.active(), "Board reset");
    }

    /// Starts a fresh match on the same board size and protocol.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        self.reset_board();
        self.turn = TurnTracker::new();
        info!("New match started");
    }

    fn remove_cells(&mut self, player: Player, cells: &[Position]) {
        for pos in cells {
            self.board.remove(*pos);
        }
        debug!(%player, removed = cells.len(), left = self.board.present_count(), "Markers removed");
        self.history.push(Removal {
            player,
            cells: cells.to_vec(),
        });
    }

    /// Decides the match if the board is empty, before any turn flip.
    fn evaluate_outcome(&mut self, remover: Player) -> Option<Outcome> {
        if !self.board.is_empty() {
            return None;
        }
        let outcome = Outcome::last_marker_taken_by(remover);
        info!(%outcome, "Game over");
        self.outcome = Some(outcome);
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_first_sub_move_takes_requested_orientation() {
        use strum::IntoEnumIterator;

        for orientation in Orientation::iter() {
            let mut engine = GameEngine::new(3, MoveProtocol::Point).unwrap();
            engine
                .apply_point_move(Position::new(1, 1), orientation)
                .unwrap();
            assert_eq!(
                engine.turn().anchor().map(|a| a.orientation),
                Some(orientation)
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_malformed_board() {
        let engine = GameEngine::new(3, MoveProtocol::Range).unwrap();
        let mut value = serde_json::to_value(&engine).unwrap();
        value["board"]["cells"] = serde_json::json!([]);

        let err = serde_json::from_value::<GameEngine>(value).unwrap_err();
        assert!(err.to_string().contains("needs 9 cells"));

        let json = serde_json::to_string(&engine).unwrap();
        assert_eq!(serde_json::from_str::<GameEngine>(&json).unwrap(), engine);
    }

    #[test]
    fn test_range_move_flips_turn() {
        let mut engine = GameEngine::new(4, MoveProtocol::Range).unwrap();
        let report = engine.apply_range_move(pos(0, 0), pos(0, 2)).unwrap();
        assert_eq!(report.player, Player::Player1);
        assert_eq!(report.next, Player::Player2);
        assert_eq!(report.removed.len(), 3);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_rejected_range_move_changes_nothing() {
        let mut engine = GameEngine::new(4, MoveProtocol::Range).unwrap();
        let before = engine.clone();
        assert!(engine.apply_range_move(pos(0, 0), pos(1, 1)).is_err());
        assert_eq!(engine, before);
    }

    #[test]
    fn test_wrong_protocol() {
        let mut range = GameEngine::new(3, MoveProtocol::Range).unwrap();
        assert_eq!(
            range.end_turn(),
            Err(MoveError::WrongProtocol(MoveProtocol::Point, MoveProtocol::Range))
        );

        let mut point = GameEngine::new(3, MoveProtocol::Point).unwrap();
        assert_eq!(
            point.apply_range_move(pos(0, 0), pos(0, 0)),
            Err(MoveError::WrongProtocol(MoveProtocol::Range, MoveProtocol::Point))
        );
    }

    #[test]
    fn test_failed_first_point_move_still_anchors() {
        let mut engine = GameEngine::new(4, MoveProtocol::Point).unwrap();
        engine.board.remove(pos(2, 2));

        let result = engine.apply_point_move(pos(2, 2), Orientation::RowLocked);
        assert_eq!(result, Err(MoveError::MarkerRemoved(pos(2, 2))));
        assert_eq!(
            engine.turn().anchor(),
            Some(&Anchor::new(pos(2, 2), Orientation::RowLocked))
        );
        assert!(!engine.turn().has_moved());
    }

    #[test]
    fn test_off_board_first_point_move_leaves_anchor_alone() {
        let mut engine = GameEngine::new(4, MoveProtocol::Point).unwrap();
        let result = engine.apply_point_move(pos(4, 0), Orientation::RowLocked);
        assert_eq!(result, Err(MoveError::OffBoard(pos(4, 0))));
        assert!(engine.turn().anchor().is_none());
    }

    #[test]
    fn test_point_turn_keeps_first_orientation() {
        let mut engine = GameEngine::new(4, MoveProtocol::Point).unwrap();
        engine
            .apply_point_move(pos(1, 1), Orientation::RowLocked)
            .unwrap();
        // Column-locked request is ignored mid-turn: (2, 1) shares the column.
        assert!(
            engine
                .apply_point_move(pos(2, 1), Orientation::ColumnLocked)
                .is_err()
        );
        assert_eq!(engine.active_player(), Player::Player1);
    }

    #[test]
    fn test_reset_board_keeps_turn_state() {
        let mut engine = GameEngine::new(3, MoveProtocol::Point).unwrap();
        engine
            .apply_point_move(pos(0, 0), Orientation::ColumnLocked)
            .unwrap();
        engine.end_turn().unwrap();
        engine
            .apply_point_move(pos(1, 1), Orientation::RowLocked)
            .unwrap();

        engine.reset_board();
        assert_eq!(engine.board().present_count(), 9);
        assert_eq!(engine.active_player(), Player::Player2);
        assert!(engine.turn().has_moved());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_new_match_resets_everything() {
        let mut engine = GameEngine::new(2, MoveProtocol::Range).unwrap();
        engine.apply_range_move(pos(0, 0), pos(0, 1)).unwrap();
        engine.new_match();
        assert_eq!(engine.active_player(), Player::Player1);
        assert_eq!(engine.board().present_count(), 4);
        assert!(engine.outcome().is_none());
    }
}
