//! hexgrid is a coordinate and topology engine for hexagon grids. It models
//! hexes in cube/axial coordinates, builds grids of common shapes, and answers
//! geometric queries against them: lookup, straight lines between two hexes,
//! and neighbors (orthogonal and diagonal).
//!
//! ```
//! use hexgrid::{Grid, Hex, HexagonConfig};
//!
//! let grid = Grid::hexagon(&HexagonConfig {
//!     radius: 2,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! // A line from edge to edge, through the center
//! let line = grid.hexes_between(Hex::new(-2, 0), Hex::new(2, 0));
//! assert_eq!(line.len(), 5);
//!
//! // Neighbors that fall off the edge of the grid are left out
//! assert_eq!(grid.neighbors_of(Hex::new(2, 0), false).len(), 3);
//! ```
//!
//! See [Hex] for a description of the coordinate system, and [Grid] for how
//! grids are stored. The queries are also exposed as free functions (see
//! [hexes_between], [neighbor_of] and [neighbors_of]) that work on anything
//! implementing [HexLookup].

mod config;
mod grid;
mod hex;
mod util;

pub use crate::{
    config::{
        HexagonConfig, Layout, Offset, Orientation, ParallelogramConfig,
        RectangleConfig, ShapeConfig, TriangleConfig,
    },
    grid::{
        get, hexes_between, neighbor_of, neighbor_of_query, neighbors_of,
        neighbors_of_query, Grid, HexLookup, NeighborQuery, NeighborsQuery,
    },
    hex::{
        direction_vector, normalize_direction, CartesianPoint, Direction,
        FractionalHex, HasHexPosition, Hex, HexIndexMap, HexMap, HexSet,
        HexVector, DIAGONAL_VECTORS, ORTHOGONAL_VECTORS,
    },
    util::{hexagon_len, triangle_len},
};
