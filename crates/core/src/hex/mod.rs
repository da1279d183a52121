//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! hexgrid uses two different coordinate systems:
//!
//! ### Cube Coordinates
//!
//! Cube coordinates (AKA axial coordinates, when we only write down two of
//! them) are the primary way to address a hex. The system is the [cube
//! coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any hex, all
//! three components are integers and `q + r + s = 0`.** Because of that
//! constraint, [Hex] only stores `q` and `r` and derives `s` on demand. Pairs
//! of `(q, r)` are what we call axial coordinates.
//!
//! Distance, rounding and interpolation are all defined in cube space, because
//! the math is symmetric across all three axes there. During line traversal,
//! hexes are temporarily widened into [FractionalHex]es, which hold all three
//! components as floats and do NOT have to be integral. A fractional hex is
//! only ever an intermediate value; [FractionalHex::round] snaps it back onto
//! the nearest real hex.
//!
//! ### Cartesian (Offset) Coordinates
//!
//! The second system is the familiar column/row grid, where every other row
//! (or column, for flat-topped hexes) is shoved half a hex to one side. These
//! coordinates are what you'd use to lay hexes out in a rectangle, so the
//! rectangle shape is defined in terms of them. See [Layout] for the exact
//! conversion. The mapping is a bijection for integral hexes, but neighbor and
//! distance math in this space is awkward, so we only ever use it for
//! addressing.
//!
//! [Layout]: crate::Layout

mod data_structure;
mod direction;
mod unit;

pub use self::{data_structure::*, direction::*, unit::*};
