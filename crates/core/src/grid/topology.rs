//! Geometric queries that can be run against any grid: lookup, straight lines
//! and neighbors. All of these are pure reads, so they can be run
//! concurrently against the same grid.

use crate::{
    grid::HexLookup,
    hex::{direction_vector, Hex, ORTHOGONAL_VECTORS},
};
use anyhow::anyhow;
use log::trace;
use serde::{Deserialize, Serialize};

/// Look up a hex in the grid by its coordinates. Returns the grid's stored
/// cell, or `None` if the grid has nothing at that position.
pub fn get<G: HexLookup + ?Sized>(grid: &G, hex: Hex) -> Option<&G::Cell> {
    grid.lookup(hex)
}

/// Get every cell in a straight line from `first` to `last`, inclusive of both
/// ends. The result always has exactly `first.distance_to(last) + 1` entries,
/// one per step along the line. If a step falls on a hex that isn't in the
/// grid, its entry is `None`; gaps are kept rather than skipped, so index `i`
/// of the output is always `i` steps along the line.
///
/// https://www.redblobgames.com/grids/hexagons/#line-drawing
pub fn hexes_between<G: HexLookup + ?Sized>(
    grid: &G,
    first: Hex,
    last: Hex,
) -> Vec<Option<&G::Cell>> {
    let distance = first.distance_to(last);
    trace!("Tracing line {} -> {} ({} steps)", first, last, distance);

    // Sampling exactly on the line can land right on the edge between two
    // hexes, and then the rounding could go either way. Shifting both ends by
    // the same tiny amount moves the whole line off of those edges.
    let nudged_first = first.nudge();
    let nudged_last = last.nudge();

    (0..=distance)
        .map(|step| {
            // Zero distance means a single sample at the start. Without this
            // we'd divide 0 by 0
            let t = if distance == 0 {
                0.0
            } else {
                step as f64 / distance as f64
            };
            let sample = nudged_first.lerp(nudged_last, t).round();
            grid.lookup(sample)
        })
        .collect()
}

/// Get the neighbor of a hex in a single direction. The direction is an index
/// into [ORTHOGONAL_VECTORS] (or [DIAGONAL_VECTORS](crate::DIAGONAL_VECTORS)
/// if `diagonal` is set). Any integer is accepted, and out of range values
/// are wrapped, so `6` is the same as `0` and `-1` is the same as `5`.
///
/// Returns `None` if the neighbor isn't in the grid, or if it would fall
/// outside the range of representable coordinates.
pub fn neighbor_of<G: HexLookup + ?Sized>(
    grid: &G,
    hex: Hex,
    direction: i32,
    diagonal: bool,
) -> Option<&G::Cell> {
    // A hex at the edge of the coordinate range has no neighbor past it
    let target = hex.checked_add(direction_vector(direction, diagonal))?;
    trace!(
        "Neighbor of {} in direction {} (diagonal: {}) is {}",
        hex,
        direction,
        diagonal,
        target
    );
    grid.lookup(target)
}

/// Get all neighbors of a hex, either orthogonal or diagonal. Neighbors that
/// aren't in the grid are left out, so the result can have anywhere from 0 to
/// 6 cells. The ones that are present are always in direction index order.
pub fn neighbors_of<G: HexLookup + ?Sized>(
    grid: &G,
    hex: Hex,
    diagonal: bool,
) -> Vec<&G::Cell> {
    (0..ORTHOGONAL_VECTORS.len() as i32)
        .filter_map(|direction| neighbor_of(grid, hex, direction, diagonal))
        .collect()
}

/// All the parameters for [neighbor_of], bundled up. Useful when the query
/// is built up somewhere else (e.g. deserialized), in which case the hex
/// might not be known. Any missing fields fall back to the defaults:
/// direction 0, not diagonal.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct NeighborQuery {
    pub hex: Option<Hex>,
    pub direction: i32,
    pub diagonal: bool,
}

impl From<Hex> for NeighborQuery {
    fn from(hex: Hex) -> Self {
        Self {
            hex: Some(hex),
            ..Default::default()
        }
    }
}

/// All the parameters for [neighbors_of], bundled up. See [NeighborQuery].
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct NeighborsQuery {
    pub hex: Option<Hex>,
    pub diagonal: bool,
}

impl From<Hex> for NeighborsQuery {
    fn from(hex: Hex) -> Self {
        Self {
            hex: Some(hex),
            ..Default::default()
        }
    }
}

/// Run [neighbor_of] from a bundled query. Returns an error if the query
/// doesn't have a hex.
pub fn neighbor_of_query<G: HexLookup + ?Sized>(
    grid: &G,
    query: NeighborQuery,
) -> anyhow::Result<Option<&G::Cell>> {
    let hex = query.hex.ok_or_else(|| {
        anyhow!("Cannot find neighbor of hex: {:?}", query.hex)
    })?;
    Ok(neighbor_of(grid, hex, query.direction, query.diagonal))
}

/// Run [neighbors_of] from a bundled query. Returns an error if the query
/// doesn't have a hex.
pub fn neighbors_of_query<G: HexLookup + ?Sized>(
    grid: &G,
    query: NeighborsQuery,
) -> anyhow::Result<Vec<&G::Cell>> {
    let hex = query.hex.ok_or_else(|| {
        anyhow!("Cannot find neighbors of hex: {:?}", query.hex)
    })?;
    Ok(neighbors_of(grid, hex, query.diagonal))
}
