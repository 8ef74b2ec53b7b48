//! Tetromino shapes and matrix rotation

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Row-major cell matrix; 0 is empty, 1..=7 is a palette index
pub type Matrix = Vec<Vec<u8>>;

/// The seven classic shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tetromino {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Tetromino {
    pub const ALL: [Tetromino; 7] = [
        Tetromino::I,
        Tetromino::O,
        Tetromino::T,
        Tetromino::S,
        Tetromino::Z,
        Tetromino::J,
        Tetromino::L,
    ];

    /// Spawn orientation. Every call builds a new matrix.
    pub fn matrix(self) -> Matrix {
        let rows: &[&[u8]] = match self {
            Tetromino::I => &[&[1, 1, 1, 1]],
            Tetromino::O => &[&[2, 2], &[2, 2]],
            Tetromino::T => &[&[0, 3, 0], &[3, 3, 3]],
            Tetromino::S => &[&[0, 4, 4], &[4, 4, 0]],
            Tetromino::Z => &[&[5, 5, 0], &[0, 5, 5]],
            Tetromino::J => &[&[6, 0, 0], &[6, 6, 6]],
            Tetromino::L => &[&[0, 0, 7], &[7, 7, 7]],
        };
        rows.iter().map(|row| row.to_vec()).collect()
    }

    /// Uniform pick over [`Self::ALL`]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// The falling piece: its cells plus the board offset of its top-left corner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub matrix: Matrix,
    pub pos: IVec2,
}

impl Piece {
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix,
            pos: IVec2::ZERO,
        }
    }

    /// Width of the widest row
    pub fn width(&self) -> usize {
        self.matrix.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Board coordinates and value of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, u8)> + '_ {
        self.matrix.iter().enumerate().flat_map(move |(y, row)| {
            row.iter().enumerate().filter(|(_, v)| **v != 0).map(move |(x, v)| {
                (self.pos + IVec2::new(x as i32, y as i32), *v)
            })
        })
    }
}

/// A fresh random piece, never sharing storage with the shape templates
pub fn create_piece<R: Rng>(rng: &mut R) -> Piece {
    Piece::new(Tetromino::random(rng).matrix())
}

/// Rotate 90° clockwise: row `y` of the result is column `y` read bottom-up
pub fn rotate(matrix: &[Vec<u8>]) -> Matrix {
    let width = matrix.first().map_or(0, Vec::len);
    (0..width)
        .map(|x| matrix.iter().rev().map(|row| row[x]).collect())
        .collect()
}
