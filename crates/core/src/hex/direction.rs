use crate::hex::HexVector;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Vectors that move a hex one step to each of its six edge-sharing
/// neighbors, indexed by direction. Index 0 is `+q`, then the indexes go
/// clockwise (for pointy-topped hexes).
pub const ORTHOGONAL_VECTORS: [HexVector; 6] = [
    HexVector::new(1, 0),
    HexVector::new(0, 1),
    HexVector::new(-1, 1),
    HexVector::new(-1, 0),
    HexVector::new(0, -1),
    HexVector::new(1, -1),
];

/// Vectors that move a hex to each of its six diagonal neighbors. A diagonal
/// neighbor doesn't share an edge with the hex, it sits straight out from one
/// of its vertices. Diagonal `i` is the sum of orthogonal `i` and orthogonal
/// `i - 1`, i.e. it's the vertex just counter-clockwise of orthogonal `i`.
pub const DIAGONAL_VECTORS: [HexVector; 6] = [
    HexVector::new(2, -1),
    HexVector::new(1, 1),
    HexVector::new(-1, 2),
    HexVector::new(-2, 1),
    HexVector::new(-1, -1),
    HexVector::new(1, -2),
];

/// Wrap any direction index into `[0, 5]`. Negative indexes wrap backwards,
/// so `-1` is 5, `-4` is 2, and `92` is 2.
pub fn normalize_direction(direction: i32) -> usize {
    // % is remainder, not modulus, so it keeps the sign of the lhs. Adding
    // the length back in gets us a true modulus
    (((direction % 6) + 6) % 6) as usize
}

/// Get the vector for the given direction index, out of either the orthogonal
/// or the diagonal table. The index is normalized first, so any integer is
/// accepted.
pub fn direction_vector(direction: i32, diagonal: bool) -> HexVector {
    let table = if diagonal {
        &DIAGONAL_VECTORS
    } else {
        &ORTHOGONAL_VECTORS
    };
    table[normalize_direction(direction)]
}

/// The 6 directions in which hexes can line up side-to-side. Names assume
/// pointy-topped hexes. Variants are declared in index order, so iteration
/// order and [Self::ALL] both match [ORTHOGONAL_VECTORS].
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// East
    E,
    /// Southeast
    SE,
    /// Southwest
    SW,
    /// West
    W,
    /// Northwest
    NW,
    /// Northeast
    NE,
}

impl Direction {
    pub const ALL: [Self; 6] =
        [Self::E, Self::SE, Self::SW, Self::W, Self::NW, Self::NE];

    /// Position of this direction in the direction tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction at the given index. Out of range indexes are wrapped
    /// around with [normalize_direction].
    pub fn from_index(index: i32) -> Self {
        Self::ALL[normalize_direction(index)]
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % Self::ALL.len()]
    }

    /// Get a vector offset that would move a hex one step in this direction
    pub fn vector(self) -> HexVector {
        ORTHOGONAL_VECTORS[self.index()]
    }

    /// Get a vector offset that would move a hex to its diagonal neighbor at
    /// this direction's index
    pub fn diagonal_vector(self) -> HexVector {
        DIAGONAL_VECTORS[self.index()]
    }
}
