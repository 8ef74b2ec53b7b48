//! The block well: collision, merging and line sweeps

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::piece::{Matrix, Piece};
use crate::consts::LINE_CLEAR_POINTS;

/// Fixed-size grid of cell values, row 0 at the top
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cols: usize,
    rows: usize,
    cells: Matrix,
}

impl Board {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![0; cols]; rows],
        }
    }

    /// Build from explicit rows (all rows must share one width)
    pub fn from_rows(cells: Matrix) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        debug_assert!(cells.iter().all(|row| row.len() == cols));
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Read-only view for the renderer
    pub fn cells(&self) -> &Matrix {
        &self.cells
    }

    /// Cell value, or None when off the board
    pub fn get(&self, pos: IVec2) -> Option<u8> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        self.cells
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    pub fn set(&mut self, pos: IVec2, value: u8) {
        if let Some(cell) = usize::try_from(pos.y)
            .ok()
            .zip(usize::try_from(pos.x).ok())
            .and_then(|(y, x)| self.cells.get_mut(y)?.get_mut(x))
        {
            *cell = value;
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(0);
        }
    }
}

/// True if any filled piece cell is off the board or on a filled board cell
pub fn collide(board: &Board, piece: &Piece) -> bool {
    piece
        .cells()
        .any(|(pos, _)| board.get(pos).is_none_or(|value| value != 0))
}

/// Stamp the piece's filled cells into the board
///
/// Callers check [`collide`] first; cells off the board are dropped.
pub fn merge(board: &mut Board, piece: &Piece) {
    for (pos, value) in piece.cells() {
        board.set(pos, value);
    }
}

/// Remove full rows, refilling from the top. Returns how many went.
///
/// Rows are scanned bottom-up; after a removal the same index is scanned
/// again because the row above has just dropped into it.
pub fn sweep(board: &mut Board) -> usize {
    if board.cols == 0 {
        return 0;
    }
    let mut cleared = 0;
    let mut y = board.rows;
    while y > 0 {
        let row = y - 1;
        if board.cells[row].iter().all(|value| *value != 0) {
            let mut emptied = board.cells.remove(row);
            emptied.fill(0);
            board.cells.insert(0, emptied);
            cleared += 1;
        } else {
            y -= 1;
        }
    }
    cleared
}

/// Classic scoring for simultaneous clears. None beyond four rows.
pub fn line_clear_points(rows: usize) -> Option<u32> {
    LINE_CLEAR_POINTS.get(rows).copied()
}
