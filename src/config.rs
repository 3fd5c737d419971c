use alloc::vec::Vec;

use crate::common::EngineError;
use crate::ship::ShipKind;

pub const DEFAULT_PLAYERS: usize = 2;
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_SEED: u64 = 1999;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::AircraftCarrier,
    ShipKind::Battleship,
    ShipKind::Submarine,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
];

/// Total number of ship segments in one fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Parameters of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub n_players: usize,
    pub rows: usize,
    pub cols: usize,
    /// Placement seed. Read by `GameEngine::from_config`; engines built with
    /// an explicit RNG only carry it along.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            n_players: DEFAULT_PLAYERS,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    pub fn new(n_players: usize, rows: usize, cols: usize, seed: u64) -> Self {
        Self {
            n_players,
            rows,
            cols,
            seed,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Reject configurations no game can be built from.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.n_players < 2 {
            return Err(EngineError::InvalidConfig("at least two players are required"));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidConfig("grid dimensions must be non-zero"));
        }
        Ok(())
    }

    /// Number of cells in one grid.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Every cell index against every opponent, independent of game progress.
    pub fn action_space(&self) -> Vec<Vec<usize>> {
        (0..self.n_players.saturating_sub(1))
            .map(|_| (0..self.cells()).collect())
            .collect()
    }
}
