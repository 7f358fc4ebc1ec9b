//! Move module - sliding and merging tiles in one direction
//!
//! Every move treats the grid as independent lines: rows for Left/Right,
//! columns for Up/Down. A [`LineMap`] fixes, once per call, how a
//! `(line, position)` pair maps onto a `(row, col)` cell, with position 0 on
//! the edge the tiles travel towards. A single sweep routine then runs over
//! each line without knowing which direction it is working in.
//!
//! Within a line, tiles are visited from position 1 outward. Each tile slides
//! towards position 0 over empty cells and merges with the first tile it hits
//! when both hold the same value. A merged tile is final for the rest of the
//! move: the sweep raises a barrier past it so nothing can slide into it again.

use crate::grid::Grid;
use crate::types::{Direction, Score, Tile};

/// Tiles at or above this value cannot merge (their double would not fit in a `Tile`).
const MERGE_CEILING: Tile = 1 << (Tile::BITS - 1);

/// Result of applying one direction to one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The grid after sliding and merging
    pub grid: Grid,
    /// Sum of every tile produced by a merge during this move
    pub score_delta: Score,
    /// True iff at least one tile moved or merged
    pub changed: bool,
}

/// Maps `(line, position)` onto grid coordinates for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMap {
    direction: Direction,
    rows: usize,
    cols: usize,
}

impl LineMap {
    pub fn new(direction: Direction, rows: usize, cols: usize) -> Self {
        Self {
            direction,
            rows,
            cols,
        }
    }

    /// Number of independent lines (rows for Left/Right, columns for Up/Down).
    pub fn line_count(&self) -> usize {
        if self.direction.is_horizontal() {
            self.rows
        } else {
            self.cols
        }
    }

    /// Number of cells in each line.
    pub fn line_len(&self) -> usize {
        if self.direction.is_horizontal() {
            self.cols
        } else {
            self.rows
        }
    }

    /// `(row, col)` of `pos` within `line`; position 0 touches the target edge.
    ///
    /// ```
    /// use tui_2048_engine::LineMap;
    /// use tui_2048_types::Direction;
    ///
    /// let map = LineMap::new(Direction::Down, 4, 3);
    /// assert_eq!(map.coord(1, 0), (3, 1));
    /// assert_eq!(map.coord(1, 3), (0, 1));
    /// ```
    #[inline(always)]
    pub fn coord(&self, line: usize, pos: usize) -> (usize, usize) {
        match self.direction {
            Direction::Left => (line, pos),
            Direction::Right => (line, self.cols - 1 - pos),
            Direction::Up => (pos, line),
            Direction::Down => (self.rows - 1 - pos, line),
        }
    }

    #[inline(always)]
    fn index(&self, line: usize, pos: usize) -> usize {
        let (row, col) = self.coord(line, pos);
        row * self.cols + col
    }
}

/// Slide and merge every tile of `grid` towards `direction`.
///
/// The input grid is left untouched; the outcome carries a new grid.
///
/// ```
/// use tui_2048_engine::{apply_move, Grid};
/// use tui_2048_types::Direction;
///
/// let grid = Grid::from_rows(vec![vec![2, 2, 0, 0]]).unwrap();
/// let outcome = apply_move(&grid, Direction::Left);
/// assert_eq!(outcome.grid.to_rows(), vec![vec![4, 0, 0, 0]]);
/// assert_eq!(outcome.score_delta, 4);
/// assert!(outcome.changed);
/// ```
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let map = LineMap::new(direction, grid.rows(), grid.cols());
    let mut next = grid.clone();
    let mut score_delta: Score = 0;
    let mut changed = false;

    let cells = next.cells_mut();
    for line in 0..map.line_count() {
        let (delta, line_changed) = sweep_line(cells, &map, line);
        score_delta += delta;
        changed |= line_changed;
    }

    MoveOutcome {
        grid: next,
        score_delta,
        changed,
    }
}

/// Settle one line in place. Returns the merge score and whether anything moved.
fn sweep_line(cells: &mut [Tile], map: &LineMap, line: usize) -> (Score, bool) {
    let mut score: Score = 0;
    let mut changed = false;
    // Positions below `floor` hold merge results and are closed for this move.
    let mut floor = 0usize;

    for src in 1..map.line_len() {
        let src_idx = map.index(line, src);
        let value = cells[src_idx];
        if value == 0 {
            continue;
        }

        let mut dst = src;
        while dst > floor && cells[map.index(line, dst - 1)] == 0 {
            dst -= 1;
        }

        if dst > floor && value < MERGE_CEILING && cells[map.index(line, dst - 1)] == value {
            let merged = value * 2;
            cells[map.index(line, dst - 1)] = merged;
            cells[src_idx] = 0;
            score += merged as Score;
            changed = true;
            floor = dst;
        } else if dst != src {
            cells[map.index(line, dst)] = value;
            cells[src_idx] = 0;
            changed = true;
        }
    }

    (score, changed)
}

/// True when `direction` would move or merge at least one tile.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    apply_move(grid, direction).changed
}

/// True iff no direction changes the grid.
///
/// Each direction is probed on its own copy; `grid` is never modified.
///
/// ```
/// use tui_2048_engine::{is_terminal, Grid};
///
/// let stuck = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
/// assert!(is_terminal(&stuck));
///
/// let open = Grid::from_rows(vec![vec![2, 2], vec![4, 8]]).unwrap();
/// assert!(!is_terminal(&open));
/// ```
pub fn is_terminal(grid: &Grid) -> bool {
    Direction::ALL.iter().all(|&dir| !can_move(grid, dir))
}
