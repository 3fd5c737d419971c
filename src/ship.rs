//! Ship kinds, orientations and placed spans.

use core::fmt;

/// The five ship types of the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    AircraftCarrier,
    Battleship,
    Submarine,
    Cruiser,
    Destroyer,
}

impl ShipKind {
    /// Numeric code written into an ownership grid (2..=6).
    pub const fn code(self) -> u8 {
        match self {
            ShipKind::AircraftCarrier => 2,
            ShipKind::Battleship => 3,
            ShipKind::Submarine => 4,
            ShipKind::Cruiser => 5,
            ShipKind::Destroyer => 6,
        }
    }

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::AircraftCarrier => "Aircraft Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Submarine => "Submarine",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Position in [`crate::FLEET`], used to index per-ship tables.
    pub const fn index(self) -> usize {
        (self.code() - 2) as usize
    }

    /// Inverse of [`ShipKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        crate::config::FLEET.iter().copied().find(|k| k.code() == code)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a ship on the grid.
///
/// `Vertical` is the unrotated configuration: the ship spans `(length, 1)`
/// rows by columns. `Horizontal` is the rotated one spanning `(1, length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Map a configuration bit to an orientation. Only 0 and 1 are valid.
    pub const fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Orientation::Vertical),
            1 => Some(Orientation::Horizontal),
            _ => None,
        }
    }

    /// The other configuration.
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// Rows × columns covered by a ship of `length` in this orientation.
    pub const fn span(self, length: usize) -> (usize, usize) {
        match self {
            Orientation::Vertical => (length, 1),
            Orientation::Horizontal => (1, length),
        }
    }
}

/// A ship anchored at (`row`, `col`) with its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub kind: ShipKind,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(kind: ShipKind, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            kind,
            row,
            col,
            orientation,
        }
    }

    /// Rows × columns covered by the ship.
    pub const fn span(&self) -> (usize, usize) {
        self.orientation.span(self.kind.length())
    }

    /// Exclusive end `(row, col)` of the span, `None` if it overflows.
    pub fn end(&self) -> Option<(usize, usize)> {
        let (span_r, span_c) = self.span();
        Some((self.row.checked_add(span_r)?, self.col.checked_add(span_c)?))
    }

    /// Iterator over the `(row, col)` cells the ship covers. Stops early if
    /// a coordinate would overflow.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.kind.length()).map_while(move |i| match orientation {
            Orientation::Vertical => row.checked_add(i).map(|r| (r, col)),
            Orientation::Horizontal => col.checked_add(i).map(|c| (row, c)),
        })
    }
}
