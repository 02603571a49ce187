//! Point-move legality: single removals chained along a locked axis.

use super::super::{Anchor, Board, MoveError, Orientation, Position};
use tracing::instrument;

/// Adjacency test between the anchor and a follow-up target.
///
/// Only the locked axis is compared: a row-locked turn looks at columns
/// alone and a column-locked turn at rows alone. The other coordinate is
/// free, so `(1, 2)` follows a row-locked anchor at `(3, 1)`.
pub fn is_adjacent(anchor: &Anchor, target: Position) -> bool {
    match anchor.orientation {
        Orientation::RowLocked => anchor.position.col.abs_diff(target.col) == 1,
        Orientation::ColumnLocked => anchor.position.row.abs_diff(target.row) == 1,
    }
}

/// Validates a point move.
///
/// `anchor` is `None` for the first sub-move of a turn, in which case any
/// present marker is fair game.
///
/// # Errors
///
/// - [`MoveError::OffBoard`] if the target is outside the grid
/// - [`MoveError::MarkerRemoved`] if the target was already taken
/// - [`MoveError::NotAdjacent`] if a follow-up misses the anchor's axis
#[instrument(skip(board))]
pub fn check_point_move(
    board: &Board,
    anchor: Option<&Anchor>,
    target: Position,
) -> Result<(), MoveError> {
    if !board.is_on_board(target) {
        return Err(MoveError::OffBoard(target));
    }
    if !board.is_present(target) {
        return Err(MoveError::MarkerRemoved(target));
    }
    match anchor {
        Some(anchor) if !is_adjacent(anchor, target) => Err(MoveError::NotAdjacent(
            target,
            anchor.position,
            anchor.orientation,
        )),
        _ => Ok(()),
    }
}

/// Boolean form of [`check_point_move`].
pub fn is_legal_point_move(board: &Board, anchor: Option<&Anchor>, target: Position) -> bool {
    check_point_move(board, anchor, target).is_ok()
}
