//! Random fleet placement.
//!
//! Ships are placed one at a time in random order. For each ship a random
//! orientation is tried first: start cells are drawn uniformly without
//! replacement until one fits. If none does, the other orientation gets one
//! full scan. A ship that fits in neither fails the whole placement run.
//!
//! A start cell is rejected when the exclusive end of the span reaches the
//! last row or column (`start + span >= size`), so ships never occupy the final
//! row or column of the grid.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::board::OwnershipBoard;
use crate::common::EngineError;
use crate::config::{GameConfig, FLEET};
use crate::ship::{Orientation, Placement, ShipKind};

/// `true` if `placement` lies in the area random placement is allowed to use.
pub fn in_usable_area(rows: usize, cols: usize, placement: &Placement) -> bool {
    matches!(placement.end(), Some((r, c)) if r < rows && c < cols)
}

/// Fill `board` with the whole fleet.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut OwnershipBoard,
    rng: &mut R,
    player: usize,
) -> Result<(), EngineError> {
    let mut unplaced: Vec<ShipKind> = FLEET.iter().copied().filter(|k| !board.is_placed(*k)).collect();

    while !unplaced.is_empty() {
        let pick = rng.random_range(0..unplaced.len());
        let kind = unplaced[pick];
        let mut orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };

        let mut found = None;
        for _ in 0..2 {
            found = scan_start_cells(board, rng, kind, orientation);
            if found.is_some() {
                break;
            }
            trace!("player {}: no room for {} {:?}, flipping", player, kind, orientation);
            orientation = orientation.flipped();
        }

        let placement = found.ok_or(EngineError::PlacementFailed { player, ship: kind })?;
        board.place(placement)?;
        debug!(
            "player {}: placed {} at ({}, {}) {:?}",
            player, kind, placement.row, placement.col, placement.orientation
        );
        unplaced.swap_remove(pick);
    }
    Ok(())
}

/// Place a fleet for every player of `config`, in player order.
pub fn place_fleets<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<OwnershipBoard>, EngineError> {
    (0..config.n_players)
        .map(|p| {
            let mut board = OwnershipBoard::new(config.rows, config.cols);
            place_fleet(&mut board, rng, p)?;
            Ok(board)
        })
        .collect()
}

fn scan_start_cells<R: Rng + ?Sized>(
    board: &OwnershipBoard,
    rng: &mut R,
    kind: ShipKind,
    orientation: Orientation,
) -> Option<Placement> {
    let (rows, cols) = (board.rows(), board.cols());
    let mut starts: Vec<(usize, usize)> = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .collect();

    while !starts.is_empty() {
        let idx = rng.random_range(0..starts.len());
        let (row, col) = starts.swap_remove(idx);
        let candidate = Placement::new(kind, row, col, orientation);
        if in_usable_area(rows, cols, &candidate) && board.is_clear(&candidate) {
            return Some(candidate);
        }
    }
    None
}
