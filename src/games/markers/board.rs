//! The n×n marker grid.

use super::position::Position;
use super::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error raised when a board cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Board size must be at least 1.
    #[display("Board size must be positive (got {})", _0)]
    InvalidSize(usize),
    /// Board size is above [`Board::MAX_SIZE`].
    #[display("Board size {} exceeds the maximum of {}", _0, Board::MAX_SIZE)]
    TooLarge(usize),
    /// Stored cell count does not match the side length.
    #[display("Board of size {} needs {} cells (got {})", size, expected, actual)]
    CellCount {
        /// Side length.
        size: usize,
        /// `size × size`.
        expected: usize,
        /// Cells actually present.
        actual: usize,
    },
}

impl std::error::Error for BoardError {}

/// Square grid of markers.
///
/// Every position-taking method bounds-checks first and answers
/// negatively for off-board positions instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

/// Unchecked wire form, validated into a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let expected = Board::cell_count(repr.size)?;
        if repr.cells.len() != expected {
            return Err(BoardError::CellCount {
                size: repr.size,
                expected,
                actual: repr.cells.len(),
            });
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Largest accepted side length.
    pub const MAX_SIZE: usize = 256;

    /// Creates a board of `size × size` present markers.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero and
    /// [`BoardError::TooLarge`] above [`Board::MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let count = Self::cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Present; count],
        })
    }

    fn cell_count(size: usize) -> Result<usize, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize(size));
        }
        if size > Self::MAX_SIZE {
            return Err(BoardError::TooLarge(size));
        }
        size.checked_mul(size).ok_or(BoardError::TooLarge(size))
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks that a position lies inside the grid.
    pub fn is_on_board(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.is_on_board(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Gets the cell at a position, or `None` when off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// True when the position is on the board and still holds a marker.
    pub fn is_present(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Present)
    }

    /// Takes the marker at a position.
    ///
    /// Returns `false` without touching the grid when the position is off
    /// the board. Removing an already removed cell is a no-op that still
    /// returns `true`.
    #[instrument(skip(self))]
    pub fn remove(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = Cell::Removed;
                true
            }
            None => false,
        }
    }

    /// True iff every marker has been removed.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Removed)
    }

    /// Number of markers still on the board.
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Present).count()
    }

    /// Puts every marker back.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Present);
        debug!("Board reset");
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}

impl std::fmt::Display for Board {
    /// One line per row, cells as space-separated `1`/`0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.digit().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
