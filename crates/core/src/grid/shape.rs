//! Factories for grids of a particular shape. Each shape is defined by a
//! config, and each one enumerates its hexes in a fixed order so that indexing
//! into the resulting grid is predictable.

use crate::{
    config::{
        HexagonConfig, ParallelogramConfig, RectangleConfig, ShapeConfig,
        TriangleConfig,
    },
    grid::Grid,
    hex::{CartesianPoint, Hex, HexVector},
    timed,
    util::{hexagon_len, triangle_len},
};
use anyhow::Context;
use log::debug;
use std::cmp;
use validator::Validate;

impl Grid<Hex> {
    /// Build a grid of any supported shape. Returns an error if the config is
    /// invalid.
    pub fn from_shape(config: &ShapeConfig) -> anyhow::Result<Self> {
        match config {
            ShapeConfig::Rectangle(config) => Self::rectangle(config),
            ShapeConfig::Hexagon(config) => Self::hexagon(config),
            ShapeConfig::Parallelogram(config) => Self::parallelogram(config),
            ShapeConfig::Triangle(config) => Self::triangle(config),
        }
    }

    /// Build a rectangular grid. The rectangle is defined in column/row space
    /// (see [Layout](crate::Layout)), starting from the column/row of
    /// `config.start`. Hexes are enumerated row by row, left to right.
    pub fn rectangle(config: &RectangleConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;

        let RectangleConfig {
            width,
            height,
            start,
            layout,
        } = *config;
        let origin = start.to_cartesian(layout);
        let grid: Self = timed!(
            "Rectangle construction",
            (0..i32::from(height))
                .flat_map(|row| {
                    (0..i32::from(width)).map(move |col| {
                        let point =
                            CartesianPoint::new(origin.x + col, origin.y + row);
                        Hex::from_cartesian(point, layout)
                    })
                })
                .collect()
        );
        debug_assert_eq!(grid.len(), width as usize * height as usize);

        debug!(
            "Built {}x{} rectangle grid starting at {}",
            width, height, start
        );
        Ok(grid)
    }

    /// Build a grid in the shape of a larger hexagon. For a radius `r`, every
    /// hex is at most `r` steps from the center. Hexes are enumerated column
    /// by column (increasing `q`), and within each column by increasing `r`.
    pub fn hexagon(config: &HexagonConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;

        let HexagonConfig { radius, center } = *config;
        let r = i32::from(radius);
        let grid: Self = timed!(
            "Hexagon construction",
            (-r..=r)
                .flat_map(|dq| {
                    // If we just do [-r,r] for dr as well, then we end up with
                    // a diamond pattern instead of a hexagon
                    // https://www.redblobgames.com/grids/hexagons/#range
                    let dr_min = cmp::max(-r, -dq - r);
                    let dr_max = cmp::min(r, -dq + r);
                    (dr_min..=dr_max)
                        .map(move |dr| center + HexVector::new(dq, dr))
                })
                .collect()
        );
        debug_assert_eq!(grid.len(), hexagon_len(radius), "expected 3r²+3r+1");

        debug!("Built hexagon grid of radius {} around {}", radius, center);
        Ok(grid)
    }

    /// Build a grid in the shape of a parallelogram, with sides running along
    /// the `q` and `r` axes. Hexes are enumerated by increasing `q`, then by
    /// increasing `r`.
    pub fn parallelogram(config: &ParallelogramConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;

        let ParallelogramConfig {
            width,
            height,
            start,
        } = *config;
        let grid: Self = timed!(
            "Parallelogram construction",
            (0..i32::from(width))
                .flat_map(|dq| {
                    (0..i32::from(height))
                        .map(move |dr| start + HexVector::new(dq, dr))
                })
                .collect()
        );
        debug_assert_eq!(grid.len(), width as usize * height as usize);

        debug!(
            "Built {}x{} parallelogram grid starting at {}",
            width, height, start
        );
        Ok(grid)
    }

    /// Build a grid in the shape of a triangle. Two sides run along the `q` and
    /// `r` axes from `start`, and the third side is the line where
    /// `q + r = size - 1`. Hexes are enumerated by increasing `q`, then by
    /// increasing `r`.
    pub fn triangle(config: &TriangleConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;

        let TriangleConfig { size, start } = *config;
        let size = i32::from(size);
        let grid: Self = timed!(
            "Triangle construction",
            (0..size)
                .flat_map(|dq| {
                    (0..size - dq).map(move |dr| start + HexVector::new(dq, dr))
                })
                .collect()
        );
        debug_assert_eq!(grid.len(), triangle_len(config.size));

        debug!("Built triangle grid of size {} at {}", size, start);
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Layout, Offset, Orientation},
        hex::HexSet,
    };
    use validator::ValidationErrors;

    fn hexes(coords: &[(i32, i32)]) -> Vec<Hex> {
        coords.iter().map(|&(q, r)| Hex::new(q, r)).collect()
    }

    fn positions(grid: &Grid) -> Vec<Hex> {
        grid.positions().collect()
    }

    #[test]
    fn test_rectangle() {
        let grid = Grid::rectangle(&RectangleConfig {
            width: 4,
            height: 2,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            positions(&grid),
            hexes(&[
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 0),
                (0, 1),
                (1, 1),
                (2, 1),
                (3, 1),
            ])
        );

        // Third row gets pulled back in axial space, since it isn't shoved
        let grid = Grid::rectangle(&RectangleConfig {
            width: 2,
            height: 3,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            positions(&grid),
            hexes(&[(0, 0), (1, 0), (0, 1), (1, 1), (-1, 2), (0, 2)])
        );
    }

    #[test]
    fn test_rectangle_start_and_layout() {
        // Starting on an odd row keeps the rectangle rectangular in column/row
        // space
        let layout = Layout::default();
        let start = Hex::new(1, 1);
        let grid = Grid::rectangle(&RectangleConfig {
            width: 2,
            height: 2,
            start,
            layout,
        })
        .unwrap();
        let points: Vec<CartesianPoint> =
            grid.iter().map(|hex| hex.to_cartesian(layout)).collect();
        assert_eq!(
            points,
            vec![
                CartesianPoint::new(1, 1),
                CartesianPoint::new(2, 1),
                CartesianPoint::new(1, 2),
                CartesianPoint::new(2, 2),
            ]
        );
        assert_eq!(grid[0], start);

        let flat = Layout {
            orientation: Orientation::Flat,
            offset: Offset::Even,
        };
        let grid = Grid::rectangle(&RectangleConfig {
            width: 2,
            height: 2,
            layout: flat,
            ..Default::default()
        })
        .unwrap();
        // Even columns are shoved down, so odd columns are pulled up in
        // axial space
        assert_eq!(
            positions(&grid),
            hexes(&[(0, 0), (1, -1), (0, 1), (1, 0)])
        );
    }

    #[test]
    fn test_hexagon() {
        let grid = Grid::hexagon(&HexagonConfig {
            radius: 1,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            positions(&grid),
            hexes(&[
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 0),
                (0, 1),
                (1, -1),
                (1, 0),
            ])
        );

        let center = Hex::new(5, -3);
        let grid = Grid::hexagon(&HexagonConfig { radius: 3, center })
            .unwrap();
        assert_eq!(grid.len(), 37);
        assert!(grid.iter().all(|hex| hex.distance_to(center) <= 3));

        let grid = Grid::hexagon(&HexagonConfig {
            radius: 0,
            center,
        })
        .unwrap();
        assert_eq!(positions(&grid), vec![center]);
    }

    #[test]
    fn test_parallelogram() {
        let grid = Grid::parallelogram(&ParallelogramConfig {
            width: 2,
            height: 3,
            start: Hex::new(-1, 0),
        })
        .unwrap();
        assert_eq!(
            positions(&grid),
            hexes(&[(-1, 0), (-1, 1), (-1, 2), (0, 0), (0, 1), (0, 2)])
        );
    }

    #[test]
    fn test_triangle() {
        let grid = Grid::triangle(&TriangleConfig {
            size: 3,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            positions(&grid),
            hexes(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0)])
        );

        let grid = Grid::triangle(&TriangleConfig {
            size: 0,
            ..Default::default()
        })
        .unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_from_shape() {
        let grid =
            Grid::from_shape(&ShapeConfig::Hexagon(HexagonConfig::default()))
                .unwrap();
        assert_eq!(grid.len(), hexagon_len(HexagonConfig::default().radius));
        let unique: HexSet = grid.positions().collect();
        assert_eq!(unique.len(), grid.len());

        let err = Grid::from_shape(&ShapeConfig::Triangle(TriangleConfig {
            size: 10001,
            ..Default::default()
        }))
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid grid config");
        assert!(err.downcast_ref::<ValidationErrors>().is_some());
    }
}
