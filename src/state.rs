//! Full game state: one block per player.
//!
//! Each block owns that player's ownership board and one shot grid per
//! opponent, in opponent order with the player itself skipped. Shooting needs
//! the shooter's block and the target's block at the same time; `pair_mut`
//! hands out both as disjoint borrows.

use alloc::vec::Vec;

use crate::board::OwnershipBoard;
use crate::common::{EngineError, ShotMark};
use crate::grid::Grid;

pub type ShotGrid = Grid<ShotMark>;

/// Ownership board plus shot grids of one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerBlock {
    pub ownership: OwnershipBoard,
    pub shots: Vec<ShotGrid>,
}

impl PlayerBlock {
    /// Cells this player has fired at, across every opponent.
    pub fn shots_taken(&self) -> usize {
        self.shots
            .iter()
            .map(|g| g.iter().filter(|m| m.is_shot()).count())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    rows: usize,
    cols: usize,
    blocks: Vec<PlayerBlock>,
}

impl State {
    /// Assemble a state from already placed boards, one per player, with
    /// empty shot grids.
    pub fn from_boards(boards: Vec<OwnershipBoard>) -> Result<Self, EngineError> {
        let n_players = boards.len();
        if n_players < 2 {
            return Err(EngineError::InvalidConfig("at least two players are required"));
        }
        let (rows, cols) = (boards[0].rows(), boards[0].cols());
        if boards.iter().any(|b| b.rows() != rows || b.cols() != cols) {
            return Err(EngineError::InvalidConfig("all grids must share one shape"));
        }
        let blocks = boards
            .into_iter()
            .map(|ownership| PlayerBlock {
                ownership,
                shots: (1..n_players).map(|_| ShotGrid::new(rows, cols)).collect(),
            })
            .collect();
        let state = State { rows, cols, blocks };
        state.validate()?;
        Ok(state)
    }

    pub fn n_players(&self) -> usize {
        self.blocks.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of grids in the flat layout: `n + n * (n - 1)`.
    pub fn grid_count(&self) -> usize {
        let n = self.n_players();
        n + n * n.saturating_sub(1)
    }

    /// Check the block layout: at least two players, one ownership board and
    /// `n - 1` shot grids per player, every grid `rows × cols`.
    pub fn validate(&self) -> Result<(), EngineError> {
        let n_players = self.n_players();
        if n_players < 2 {
            return Err(EngineError::InvalidConfig("at least two players are required"));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidConfig("grid dimensions must be non-zero"));
        }
        for block in &self.blocks {
            block.ownership.validate(self.rows, self.cols)?;
            if block.shots.len() != n_players - 1 {
                return Err(EngineError::InvalidConfig("each player needs one shot grid per opponent"));
            }
            let well_formed = block.shots.iter().all(|g| {
                g.is_well_formed() && g.rows() == self.rows && g.cols() == self.cols
            });
            if !well_formed {
                return Err(EngineError::InvalidConfig("shot grid has the wrong shape"));
            }
        }
        Ok(())
    }

    pub fn blocks(&self) -> &[PlayerBlock] {
        &self.blocks
    }

    pub fn block(&self, player: usize) -> Result<&PlayerBlock, EngineError> {
        self.check_player(player)?;
        Ok(&self.blocks[player])
    }

    pub fn ownership(&self, player: usize) -> Result<&OwnershipBoard, EngineError> {
        Ok(&self.block(player)?.ownership)
    }

    /// `player`'s record of shots against `opponent`.
    pub fn shot_grid(&self, player: usize, opponent: usize) -> Result<&ShotGrid, EngineError> {
        let idx = self.shot_grid_index(player, opponent)?;
        Ok(&self.blocks[player].shots[idx])
    }

    /// Opponents of `player`, ascending.
    pub fn opponents(&self, player: usize) -> impl Iterator<Item = usize> {
        (0..self.n_players()).filter(move |&o| o != player)
    }

    /// Position of `opponent`'s shot grid inside `player`'s block.
    pub fn shot_grid_index(&self, player: usize, opponent: usize) -> Result<usize, EngineError> {
        self.check_player(player)?;
        self.check_player(opponent)?;
        if player == opponent {
            return Err(EngineError::NotAnOpponent { player });
        }
        Ok(if opponent < player { opponent } else { opponent - 1 })
    }

    /// Shooter's shot grid against `target` and the target's ownership board.
    pub fn pair_mut(
        &mut self,
        shooter: usize,
        target: usize,
    ) -> Result<(&mut ShotGrid, &mut OwnershipBoard), EngineError> {
        let idx = self.shot_grid_index(shooter, target)?;
        let (shooter_block, target_block) = if shooter < target {
            let (lo, hi) = self.blocks.split_at_mut(target);
            (&mut lo[shooter], &mut hi[0])
        } else {
            let (lo, hi) = self.blocks.split_at_mut(shooter);
            (&mut hi[0], &mut lo[target])
        };
        Ok((&mut shooter_block.shots[idx], &mut target_block.ownership))
    }

    /// The state as the flat sequence of numeric grids: per player, the
    /// signed ownership encoding followed by the shot-grid codes.
    pub fn encoded_grids(&self) -> Vec<Grid<i8>> {
        let mut out = Vec::with_capacity(self.grid_count());
        for block in &self.blocks {
            out.push(block.ownership.encoded());
            out.extend(block.shots.iter().map(|g| g.map(|m| m.code() as i8)));
        }
        out
    }

    fn check_player(&self, player: usize) -> Result<(), EngineError> {
        if player < self.n_players() {
            Ok(())
        } else {
            Err(EngineError::InvalidPlayer {
                player,
                n_players: self.n_players(),
            })
        }
    }
}

#[cfg(feature = "std")]
impl State {
    /// Serialize a snapshot of the state.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore a snapshot produced by [`State::to_bytes`]. Snapshots that
    /// fail [`State::validate`] are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let state: State = bincode::deserialize(bytes)?;
        state
            .validate()
            .map_err(|e| bincode::ErrorKind::Custom(e.to_string()))?;
        Ok(state)
    }
}
