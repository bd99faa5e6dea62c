use std::fmt;
use std::ops::{Add, Sub};

use serde::Serialize;

/// A board cell as `(col, row)`, both zero-based.
///
/// Components are signed so that adding a knight delta next to an edge yields an
/// off-board value instead of wrapping; [`crate::core::board::Board::in_bounds`] rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { col: 0, row: 0 };

    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.col - rhs.col, self.row - rhs.row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The 8 knight jumps in canonical scan order.
///
/// Move generation walks this array front to back, and the tour engine breaks degree ties in
/// favour of the earlier entry. Reordering it changes which tour is produced.
pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { col: 2, row: 1 },
    Coord { col: 2, row: -1 },
    Coord { col: -2, row: 1 },
    Coord { col: -2, row: -1 },
    Coord { col: 1, row: 2 },
    Coord { col: 1, row: -2 },
    Coord { col: -1, row: 2 },
    Coord { col: -1, row: -2 },
];
