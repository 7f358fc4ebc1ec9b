//! Grid module - the tile grid the engine transforms
//!
//! The grid is a `rows x cols` matrix of tiles stored as a flat, row-major
//! vector. Coordinates are `(row, col)` with `(0, 0)` in the top-left corner.
//! A tile of 0 is an empty cell; any other value is a positive power of two.
//!
//! Grids are plain values: cloning produces an independent copy, and the
//! engine never holds on to one between calls.

use std::fmt;

use crate::types::{Tile, DEFAULT_COLS, DEFAULT_ROWS};

/// Reasons a grid cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    ZeroDimension { rows: usize, cols: usize },
    Ragged { row: usize, expected: usize, found: usize },
    InvalidTile { row: usize, col: usize, value: Tile },
}

impl std::error::Error for GridError {}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroDimension { rows, cols } => {
                write!(f, "grid must be at least 1x1, got {}x{}", rows, cols)
            }
            GridError::Ragged { row, expected, found } => write!(
                f,
                "row {} has {} cells but the first row has {}",
                row, found, expected
            ),
            GridError::InvalidTile { row, col, value } => write!(
                f,
                "tile {} at ({}, {}) is neither empty nor a power of two",
                value, row, col
            ),
        }
    }
}

/// Returns true for 0 (empty) and for powers of two from 2 upwards.
#[inline]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// A fixed-size grid of tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// Fails when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        })
    }

    /// Build a grid from nested rows
    ///
    /// ```
    /// use tui_2048_engine::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.get(1, 1), Some(4));
    ///
    /// assert!(Grid::from_rows(vec![vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 {
            return Err(GridError::ZeroDimension {
                rows: height,
                cols: width,
            });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, value) in row.into_iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row: r, col: c, value });
                }
                cells.push(value);
            }
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Empty every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    /// Coordinates of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest tile on the grid (0 when empty).
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of every tile value.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    /// Mirror image across the vertical axis (column c becomes cols - 1 - c).
    pub fn flipped_horizontally(&self) -> Self {
        let mut out = self.clone();
        for row in out.cells.chunks_mut(self.cols) {
            row.reverse();
        }
        out
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                cells.push(self.cells[r * self.cols + c]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![0; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if *v == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", v)?;
                }
            }
        }
        Ok(())
    }
}
