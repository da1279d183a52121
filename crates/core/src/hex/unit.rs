//! This sub-module contains the value types that form the hex coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use crate::{
    config::{Layout, Orientation},
    hex::Direction,
};
use anyhow::anyhow;
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::ops;

/// A single hex in the grid, in axial coordinates. See the module-level
/// documentation for a description of the coordinate system.
///
/// This struct only stores `q` and `r`, since `q + r + s = 0` for all hexes,
/// so `s` can be derived as necessary.
///
/// Two hexes are equal iff their coordinates are equal. A hex carries no other
/// state, so it's freely copyable and every operation on it returns a new
/// value.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// The offset applied by [Self::nudge]. It's added to the hex's cube
    /// coordinates, so it has to sum to zero as well.
    pub const NUDGE_EPSILON: FractionalHex = FractionalHex {
        q: 1e-6,
        r: 1e-6,
        s: -2e-6,
    };

    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// hexes, we can derive s from q & r.
    ///
    /// Panics if `s = -(q + r)` doesn't fit in an `i32`. Use
    /// [Self::checked_new] if the coordinates aren't known to be in range.
    pub const fn new(q: i32, r: i32) -> Self {
        assert!(
            Self::is_representable(q, r),
            "hex coordinates out of range; s = -(q + r) must fit in i32"
        );
        Self { q, r }
    }

    /// Construct a new hex with the given q and r, or `None` if the derived
    /// `s` wouldn't fit in an `i32`
    pub const fn checked_new(q: i32, r: i32) -> Option<Self> {
        if Self::is_representable(q, r) {
            Some(Self { q, r })
        } else {
            None
        }
    }

    const fn is_representable(q: i32, r: i32) -> bool {
        match q.checked_add(r) {
            // -i32::MIN overflows
            Some(sum) => sum != i32::MIN,
            None => false,
        }
    }

    /// Construct a new hex with the given q and s. Since q+r+s=0 for all
    /// hexes, we can derive r from q & s.
    pub const fn new_qs(q: i32, s: i32) -> Self {
        Self::new(q, -q - s)
    }

    /// Construct a new hex with the given r and s. Since q+r+s=0 for all
    /// hexes, we can derive q from r & s.
    pub const fn new_rs(r: i32, s: i32) -> Self {
        Self::new(-r - s, r)
    }

    /// Construct a hex from all three cube components. Returns an error if the
    /// components don't fall on the plane `q + r + s = 0`.
    pub fn from_cube(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(anyhow!(
                "Invalid hex ({}, {}, {}); must be on the plane q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::new(q, r))
        }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -(self.q + self.r)
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they are adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance_to(self, other: Hex) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Deltas between two in-range hexes can overflow i32, so widen first
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = -(dq + dr);
        dq.unsigned_abs()
            .max(dr.unsigned_abs())
            .max(ds.unsigned_abs()) as usize
    }

    /// Shift this hex by a vector, or get `None` if the result would fall
    /// outside the range of coordinates that [Hex] can represent
    pub fn checked_add(self, vector: HexVector) -> Option<Hex> {
        let q = self.q.checked_add(vector.q)?;
        let r = self.r.checked_add(vector.r)?;
        Self::checked_new(q, r)
    }

    /// Get the coordinate of the hex adjacent to this one in the given
    /// direction. There's no guarantee that hex exists in any particular grid.
    pub fn adjacent(self, direction: Direction) -> Hex {
        self + direction.vector()
    }

    /// Get the coordinate of the diagonal neighbor in the given direction.
    /// See [DIAGONAL_VECTORS](crate::DIAGONAL_VECTORS) for how the directions
    /// are indexed.
    pub fn diagonal(self, direction: Direction) -> Hex {
        self + direction.diagonal_vector()
    }

    /// Get an iterator of all the coordinates directly adjacent to this one.
    /// The iterator will always contain exactly 6 values, in direction index
    /// order.
    pub fn adjacents(self) -> impl Iterator<Item = Hex> {
        Direction::ALL.iter().map(move |dir| self.adjacent(*dir))
    }

    /// Convert this hex to its column/row address under the given layout. For
    /// every layout, this is a bijection with [Self::from_cartesian].
    ///
    /// https://www.redblobgames.com/grids/hexagons/#conversions-offset
    pub fn to_cartesian(self, layout: Layout) -> CartesianPoint {
        let sign = layout.offset.sign();
        // `n + sign * (n & 1)` is always even, so these divisions are exact
        match layout.orientation {
            Orientation::Pointy => CartesianPoint::new(
                self.q + (self.r + sign * (self.r & 1)) / 2,
                self.r,
            ),
            Orientation::Flat => CartesianPoint::new(
                self.q,
                self.r + (self.q + sign * (self.q & 1)) / 2,
            ),
        }
    }

    /// Convert a column/row address under the given layout back to a hex. This
    /// is the inverse of [Self::to_cartesian].
    pub fn from_cartesian(point: CartesianPoint, layout: Layout) -> Self {
        let sign = layout.offset.sign();
        let CartesianPoint { x, y } = point;
        match layout.orientation {
            Orientation::Pointy => Self::new(x - (y + sign * (y & 1)) / 2, y),
            Orientation::Flat => Self::new(x, y - (x + sign * (x & 1)) / 2),
        }
    }

    /// Shift this hex by a tiny fixed amount, so that points interpolated from
    /// it never fall exactly on the boundary between two hexes. See
    /// [Self::NUDGE_EPSILON].
    pub fn nudge(self) -> FractionalHex {
        FractionalHex::from(self) + Self::NUDGE_EPSILON
    }
}

impl ops::Add<HexVector> for Hex {
    type Output = Hex;

    fn add(self, rhs: HexVector) -> Self::Output {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

/// Like integer subtraction, this panics on overflow. [Hex::distance_to]
/// doesn't go through here, so it's safe over the whole coordinate range.
impl ops::Sub for Hex {
    type Output = HexVector;

    fn sub(self, rhs: Hex) -> Self::Output {
        HexVector::new(self.q - rhs.q, self.r - rhs.r)
    }
}

/// A column/row address of a hex, i.e. its position in offset coordinates.
/// `x` is the column and `y` is the row. See [Hex::to_cartesian].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", x, y)]
pub struct CartesianPoint {
    pub x: i32,
    pub y: i32,
}

impl CartesianPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A vector in a hex grid. This is essentially the same as a [Hex], but by
/// denoting some values explicitly as vectors rather than positions, it makes
/// it a bit clearer when shifting hexes around. Like [Hex], q+r+s will always
/// equal 0 for all vectors.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct HexVector {
    q: i32,
    r: i32,
}

impl HexVector {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -(self.q + self.r)
    }
}

/// A hex whose cube components don't have to be integers. These show up as
/// intermediate values while interpolating between two hexes, and have to be
/// converted back to a [Hex] via [Self::round] before they can be looked up
/// in a grid.
///
/// Unlike [Hex], all three components are stored, because interpolation
/// should be applied to each one independently.
#[derive(Copy, Clone, Debug, Default, PartialEq, Display, Add, Sub, Mul)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Linearly interpolate between this point and another. `t = 0` gives
    /// `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        self + (other - self) * t
    }

    /// Round to the nearest hex. Rounding each component on its own can break
    /// the q+r+s=0 constraint, so after rounding, the component that moved
    /// the furthest is thrown out and re-derived from the other two.
    ///
    /// Components that land exactly on a half always round up (towards
    /// positive infinity), so `-0.5` goes to `0` rather than `-1`. When two
    /// components tie for the furthest move, `q` is kept over `r`, and `r`
    /// over `s`.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> Hex {
        // f64::round sends halves away from zero, which isn't symmetric
        let round_half_up = |x: f64| (x + 0.5).floor();
        let mut q = round_half_up(self.q);
        let mut r = round_half_up(self.r);
        let s = round_half_up(self.s);

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // Otherwise s is the odd one out, and Hex derives it for us anyway

        Hex::new(q as i32, r as i32)
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self::new(hex.q().into(), hex.r().into(), hex.s().into())
    }
}

/// A trait that denotes any data type that has a singular assigned position in
/// a hex grid. Grids are keyed by this position.
pub trait HasHexPosition {
    fn position(&self) -> Hex;
}

impl HasHexPosition for Hex {
    fn position(&self) -> Hex {
        *self
    }
}
