//! Common types for the engine: shot marks and engine errors.

use crate::ship::ShipKind;

/// What a player knows about one cell of an opponent's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotMark {
    /// Cell not shot yet.
    #[default]
    Unshot,
    /// Shot landed in water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact cell of a ship.
    Sunk,
}

impl ShotMark {
    /// Numeric shot-grid code: 0 unshot, 1 miss, 2 hit, 3 sunk.
    pub const fn code(self) -> u8 {
        match self {
            ShotMark::Unshot => 0,
            ShotMark::Miss => 1,
            ShotMark::Hit => 2,
            ShotMark::Sunk => 3,
        }
    }

    pub const fn is_shot(self) -> bool {
        !matches!(self, ShotMark::Unshot)
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Game parameters cannot produce a playable game.
    InvalidConfig(&'static str),
    /// Both orientations were exhausted without a legal spot for `ship`.
    PlacementFailed { player: usize, ship: ShipKind },
    /// Ship placement leaves the usable area of the grid.
    ShipOutOfBounds,
    /// Ship placement overlaps a ship already on the grid.
    ShipOverlaps,
    /// Ship kind was already placed on this grid.
    ShipAlreadyPlaced(ShipKind),
    /// Player index does not name a player in this game.
    InvalidPlayer { player: usize, n_players: usize },
    /// A player tried to target itself.
    NotAnOpponent { player: usize },
    /// Flat cell index beyond the grid.
    CellOutOfRange { cell: usize, cells: usize },
    /// One action per opponent is required.
    ActionCountMismatch { expected: usize, got: usize },
    /// The shooter already fired at this cell of this opponent.
    AlreadyShot {
        player: usize,
        opponent: usize,
        cell: usize,
    },
    /// Shot-count turn order is only defined for two players.
    UnsupportedTurnOrder { n_players: usize },
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidConfig(why) => write!(f, "Invalid game configuration: {}", why),
            EngineError::PlacementFailed { player, ship } => {
                write!(f, "Failed to place {} for player {}", ship, player)
            }
            EngineError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            EngineError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            EngineError::ShipAlreadyPlaced(kind) => {
                write!(f, "{} is already placed on the grid", kind)
            }
            EngineError::InvalidPlayer { player, n_players } => {
                write!(f, "Player {} does not exist in a {}-player game", player, n_players)
            }
            EngineError::NotAnOpponent { player } => {
                write!(f, "Player {} cannot target its own grid", player)
            }
            EngineError::CellOutOfRange { cell, cells } => {
                write!(f, "Cell {} is out of range for a grid of {} cells", cell, cells)
            }
            EngineError::ActionCountMismatch { expected, got } => {
                write!(f, "Expected {} actions (one per opponent), got {}", expected, got)
            }
            EngineError::AlreadyShot {
                player,
                opponent,
                cell,
            } => write!(
                f,
                "Player {} already shot cell {} of player {}",
                player, cell, opponent
            ),
            EngineError::UnsupportedTurnOrder { n_players } => write!(
                f,
                "Turn order is only defined for two players, game has {}",
                n_players
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
