//! A player's own fleet layout and the hits it has taken.

use crate::common::{EngineError, ShotMark};
use crate::config::{FLEET, NUM_SHIPS};
use crate::grid::Grid;
use crate::ship::{Placement, ShipKind};

/// One cell of an ownership grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnCell {
    pub ship: Option<ShipKind>,
    pub hit: bool,
}

impl OwnCell {
    /// Signed numeric encoding: 0 untouched water, -1 shot water, `+code`
    /// intact ship segment, `-code` hit ship segment.
    pub fn encoded(self) -> i8 {
        match (self.ship, self.hit) {
            (None, false) => 0,
            (None, true) => -1,
            (Some(kind), false) => kind.code() as i8,
            (Some(kind), true) => -(kind.code() as i8),
        }
    }
}

/// Ownership grid plus per-ship bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnershipBoard {
    grid: Grid<OwnCell>,
    placements: [Option<Placement>; NUM_SHIPS],
    remaining: [usize; NUM_SHIPS],
}

impl OwnershipBoard {
    /// Empty board of open water.
    pub fn new(rows: usize, cols: usize) -> Self {
        OwnershipBoard {
            grid: Grid::new(rows, cols),
            placements: [None; NUM_SHIPS],
            remaining: [0; NUM_SHIPS],
        }
    }

    /// Build a board from explicit placements.
    pub fn from_placements(
        rows: usize,
        cols: usize,
        placements: &[Placement],
    ) -> Result<Self, EngineError> {
        let mut board = Self::new(rows, cols);
        for p in placements {
            board.place(*p)?;
        }
        Ok(board)
    }

    pub fn grid(&self) -> &Grid<OwnCell> {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Placements indexed by [`ShipKind::index`].
    pub fn placements(&self) -> &[Option<Placement>; NUM_SHIPS] {
        &self.placements
    }

    pub fn is_placed(&self, kind: ShipKind) -> bool {
        self.placements[kind.index()].is_some()
    }

    /// Intact cells left on `kind`.
    pub fn remaining(&self, kind: ShipKind) -> usize {
        self.remaining[kind.index()]
    }

    /// Placed ships that are still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.remaining.iter().filter(|&&n| n > 0).count()
    }

    /// Intact ship cells across the whole fleet.
    pub fn cells_remaining(&self) -> usize {
        self.remaining.iter().sum()
    }

    /// No intact ship cell is left on the grid.
    pub fn is_defeated(&self) -> bool {
        self.cells_remaining() == 0
    }

    /// `true` when `placement` lies inside the grid. Ships may touch any edge.
    pub fn in_bounds(&self, placement: &Placement) -> bool {
        matches!(placement.end(), Some((r, c)) if r <= self.rows() && c <= self.cols())
    }

    /// `true` when the span of `placement` is inside the grid and clear.
    pub fn is_clear(&self, placement: &Placement) -> bool {
        self.in_bounds(placement)
            && placement
                .cells()
                .all(|(r, c)| matches!(self.grid.at(r, c), Some(cell) if cell.ship.is_none()))
    }

    /// Put a ship on the board. Any in-bounds, non-overlapping placement is
    /// accepted; the stricter edge rule belongs to random placement only.
    pub fn place(&mut self, placement: Placement) -> Result<(), EngineError> {
        let kind = placement.kind;
        if self.is_placed(kind) {
            return Err(EngineError::ShipAlreadyPlaced(kind));
        }
        if !self.in_bounds(&placement) {
            return Err(EngineError::ShipOutOfBounds);
        }
        if !self.is_clear(&placement) {
            return Err(EngineError::ShipOverlaps);
        }
        for (r, c) in placement.cells() {
            if let Some(cell) = self.grid.at_mut(r, c) {
                cell.ship = Some(kind);
            }
        }
        self.placements[kind.index()] = Some(placement);
        self.remaining[kind.index()] = kind.length();
        Ok(())
    }

    pub fn is_hit(&self, cell: usize) -> bool {
        self.grid.get(cell).is_some_and(|c| c.hit)
    }

    /// Resolve a shot at flat index `cell`.
    ///
    /// A cell that was already hit (by another shooter) reports what is there
    /// now without touching the remaining counters.
    pub fn receive_shot(&mut self, cell: usize) -> Result<ShotMark, EngineError> {
        let cells = self.grid.len();
        let target = self
            .grid
            .get_mut(cell)
            .ok_or(EngineError::CellOutOfRange { cell, cells })?;
        let already_hit = target.hit;
        target.hit = true;
        let Some(kind) = target.ship else {
            return Ok(ShotMark::Miss);
        };
        let left = &mut self.remaining[kind.index()];
        if !already_hit {
            *left = left.saturating_sub(1);
        }
        if *left == 0 {
            Ok(ShotMark::Sunk)
        } else {
            Ok(ShotMark::Hit)
        }
    }

    /// Check that the board is a `rows × cols` grid whose placements and
    /// remaining counters agree with its cells.
    pub fn validate(&self, rows: usize, cols: usize) -> Result<(), EngineError> {
        if !self.grid.is_well_formed() || self.rows() != rows || self.cols() != cols {
            return Err(EngineError::InvalidConfig("ownership grid has the wrong shape"));
        }
        for kind in FLEET {
            let on_grid = self.grid.iter().filter(|c| c.ship == Some(kind)).count();
            let intact = self
                .grid
                .iter()
                .filter(|c| c.ship == Some(kind) && !c.hit)
                .count();
            if intact != self.remaining(kind) {
                return Err(EngineError::InvalidConfig("remaining ship cells do not match the grid"));
            }
            let expected = match self.placements[kind.index()] {
                Some(p) => {
                    let matches = self.in_bounds(&p)
                        && p.kind == kind
                        && p.cells()
                            .all(|(r, c)| matches!(self.grid.at(r, c), Some(cell) if cell.ship == Some(kind)));
                    if !matches {
                        return Err(EngineError::InvalidConfig("placement does not match the grid"));
                    }
                    kind.length()
                }
                None => 0,
            };
            if on_grid != expected {
                return Err(EngineError::InvalidConfig("ship cells do not match placements"));
            }
        }
        Ok(())
    }

    /// The board in its signed numeric encoding, see [`OwnCell::encoded`].
    pub fn encoded(&self) -> Grid<i8> {
        self.grid.map(|c| c.encoded())
    }
}
