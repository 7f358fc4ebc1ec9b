//! Game state module - the live grid and everything accumulated around it
//!
//! `GameState` owns the only mutable grid in the program. Moves are computed by
//! the board engine on a borrowed snapshot; the state commits the returned grid,
//! adds the score delta, spawns a tile and re-checks for a terminal grid.
//!
//! Lifecycle: `new` -> `start` (initial spawn) -> `apply_action`* ; once the
//! grid is terminal, slides are rejected until `Restart`.

use log::{debug, info, trace, warn};

use crate::engine::{apply_move, is_terminal, Grid, GridError};
use crate::rng::{Spawn, TileSpawner};
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, Score, INITIAL_TILES};

/// Whether the game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    /// No direction changes the grid. Absorbing until restart.
    Terminal,
}

#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    spawner: TileSpawner,
    /// Seed the game was created with.
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    score: Score,
    /// Score gained by the most recent accepted move.
    last_delta: Score,
    /// Number of accepted (grid-changing) moves this episode.
    moves: u32,
    status: GameStatus,
    started: bool,
}

impl GameState {
    /// Create a new 4x4 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_grid(Grid::default(), seed, false)
    }

    /// Create a new game on an empty `rows x cols` grid.
    pub fn with_size(rows: usize, cols: usize, seed: u32) -> Result<Self, GridError> {
        Ok(Self::with_grid(Grid::new(rows, cols)?, seed, false))
    }

    /// Resume play on an existing grid. The game counts as already started.
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        let mut state = Self::with_grid(grid, seed, true);
        state.refresh_status();
        state
    }

    fn with_grid(grid: Grid, seed: u32, started: bool) -> Self {
        Self {
            grid,
            spawner: TileSpawner::new(seed),
            seed,
            episode_id: 0,
            score: 0,
            last_delta: 0,
            moves: 0,
            status: GameStatus::Active,
            started,
        }
    }

    /// Start the game and spawn the initial tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        info!(
            "episode {} started on {}x{} grid (seed {})",
            self.episode_id,
            self.grid.rows(),
            self.grid.cols(),
            self.seed
        );
        self.refresh_status();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn last_delta(&self) -> Score {
        self.last_delta
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status == GameStatus::Terminal
    }

    pub fn best_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Apply a player action. Returns true when the game state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Slide(direction) => self.slide(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Slide the live grid. Unchanged moves neither score, count nor spawn.
    pub fn slide(&mut self, direction: Direction) -> bool {
        if !self.started || self.status == GameStatus::Terminal {
            return false;
        }

        let outcome = apply_move(&self.grid, direction);
        if !outcome.changed {
            trace!("slide {} had no effect", direction.as_str());
            return false;
        }

        self.grid = outcome.grid;
        self.score += outcome.score_delta;
        self.last_delta = outcome.score_delta;
        self.moves += 1;
        debug!(
            "move {}: {} +{} (score {})",
            self.moves,
            direction.as_str(),
            outcome.score_delta,
            self.score
        );

        self.spawn_tile();
        self.refresh_status();
        true
    }

    /// Clear the grid and counters and start a new episode.
    ///
    /// The spawner keeps its state, so the next episode gets fresh tiles.
    pub fn restart(&mut self) {
        info!(
            "episode {} restarted at score {} after {} moves",
            self.episode_id, self.score, self.moves
        );
        self.grid.clear();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.score = 0;
        self.last_delta = 0;
        self.moves = 0;
        self.status = GameStatus::Active;
        self.started = false;
        self.start();
    }

    fn spawn_tile(&mut self) -> Option<Spawn> {
        let spawn = self.spawner.spawn(&mut self.grid);
        match spawn {
            Some(s) => trace!("spawned {} at ({}, {})", s.value, s.row, s.col),
            None => warn!("spawn requested on a full grid"),
        }
        spawn
    }

    fn refresh_status(&mut self) {
        if is_terminal(&self.grid) {
            if self.status != GameStatus::Terminal {
                info!(
                    "episode {} over: score {}, best tile {}, {} moves",
                    self.episode_id,
                    self.score,
                    self.best_tile(),
                    self.moves
                );
            }
            self.status = GameStatus::Terminal;
        } else {
            self.status = GameStatus::Active;
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its grid allocation when the size matches.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.score = self.score;
        out.last_delta = self.last_delta;
        out.moves = self.moves;
        out.best_tile = self.best_tile();
        out.terminal = self.is_terminal();
        out.episode_id = self.episode_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<u32>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_new_game_is_empty_until_started() {
        let state = GameState::new(1);
        assert!(!state.started());
        assert_eq!(state.grid().empty_count(), 16);
        assert_eq!(state.status(), GameStatus::Active);
    }

    #[test]
    fn test_start_spawns_initial_tiles_once() {
        let mut state = GameState::new(1);
        state.start();
        state.start();
        assert_eq!(state.grid().empty_count(), 16 - INITIAL_TILES);
    }

    #[test]
    fn test_slide_before_start_is_ignored() {
        let mut state = GameState::new(1);
        assert!(!state.apply_action(GameAction::Slide(Direction::Left)));
    }

    #[test]
    fn test_accepted_move_scores_counts_and_spawns() {
        let mut state = GameState::from_grid(
            grid(vec![
                vec![2, 2, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ]),
            7,
        );

        assert!(state.apply_action(GameAction::Slide(Direction::Left)));
        assert_eq!(state.score(), 4);
        assert_eq!(state.last_delta(), 4);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.grid().get(0, 0), Some(4));
        // One merged tile plus one spawn.
        assert_eq!(state.grid().empty_count(), 14);
    }

    #[test]
    fn test_unchanged_move_does_not_spawn() {
        let mut state = GameState::from_grid(
            grid(vec![vec![2, 0], vec![4, 0]]),
            7,
        );
        let before = state.grid().clone();

        assert!(!state.apply_action(GameAction::Slide(Direction::Left)));
        assert_eq!(state.grid(), &before);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_terminal_grid_rejects_slides() {
        let mut state = GameState::from_grid(grid(vec![vec![2, 4], vec![4, 2]]), 1);
        assert!(state.is_terminal());
        for dir in Direction::ALL {
            assert!(!state.slide(dir));
        }
    }

    #[test]
    fn test_restart_resets_counters() {
        let mut state = GameState::from_grid(grid(vec![vec![2, 4], vec![4, 2]]), 1);
        assert!(state.apply_action(GameAction::Restart));

        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.grid().empty_count(), 4 - INITIAL_TILES);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(3);
        state.start();
        let snap = state.snapshot();
        assert_eq!(&snap.grid, state.grid());
        assert_eq!(snap.best_tile, state.best_tile());
        assert!(!snap.terminal);
        assert!(!snap.won());
    }
}
