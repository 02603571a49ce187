//! Range-move legality: a straight, unbroken run of markers.

use super::super::{Board, MoveError, Position};
use tracing::instrument;

/// Cells of the inclusive span between two aligned positions.
///
/// Returns `None` when the endpoints share neither a row nor a column.
/// Identical endpoints yield a single-cell span.
pub fn span(from: Position, to: Position) -> Option<Vec<Position>> {
    if from.shares_row(&to) {
        let (lo, hi) = (from.col.min(to.col), from.col.max(to.col));
        Some((lo..=hi).map(|col| Position::new(from.row, col)).collect())
    } else if from.shares_col(&to) {
        let (lo, hi) = (from.row.min(to.row), from.row.max(to.row));
        Some((lo..=hi).map(|row| Position::new(row, from.col)).collect())
    } else {
        None
    }
}

/// Validates a range move and returns the cells it would clear.
///
/// # Errors
///
/// - [`MoveError::OffBoard`] if either endpoint is outside the grid
/// - [`MoveError::NotAligned`] if the endpoints share no row or column
/// - [`MoveError::SpanInterrupted`] at the first removed cell of the span
#[instrument(skip(board))]
pub fn check_range_move(
    board: &Board,
    from: Position,
    to: Position,
) -> Result<Vec<Position>, MoveError> {
    for endpoint in [from, to] {
        if !board.is_on_board(endpoint) {
            return Err(MoveError::OffBoard(endpoint));
        }
    }

    let cells = span(from, to).ok_or(MoveError::NotAligned(from, to))?;

    if let Some(gap) = cells.iter().find(|pos| !board.is_present(**pos)) {
        return Err(MoveError::SpanInterrupted(*gap));
    }

    Ok(cells)
}

/// True iff both endpoints are on the board, aligned, and every cell
/// between them (inclusive) still holds a marker.
pub fn is_legal_range_move(board: &Board, from: Position, to: Position) -> bool {
    check_range_move(board, from, to).is_ok()
}
