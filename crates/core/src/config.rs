use crate::Hex;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use validator::{Validate, ValidationErrors};

/// Configuration for how hexes map onto a column/row grid. This is the only
/// place where the visual orientation of the hexes matters to this crate;
/// everything else is done in cube coordinates. See [Hex::to_cartesian] for
/// the actual conversion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Which way the hexes point. This decides whether rows or columns are
    /// the ones that get shoved over.
    pub orientation: Orientation,
    /// Which rows (or columns) get shoved over by half a hex.
    pub offset: Offset,
}

/// The two ways a hexagon can sit on a grid.
///
/// https://www.redblobgames.com/grids/hexagons/#basics
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// A vertex points straight up. Hexes line up in rows, and every other
    /// row is offset.
    Pointy,
    /// An edge lies flat on top. Hexes line up in columns, and every other
    /// column is offset.
    Flat,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Pointy
    }
}

/// Which half of the rows (or columns) is shifted in an offset layout.
///
/// https://www.redblobgames.com/grids/hexagons/#coordinates-offset
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Offset {
    /// Odd rows are shoved right (or odd columns shoved down)
    Odd,
    /// Even rows are shoved right (or even columns shoved down)
    Even,
}

impl Offset {
    /// The sign used in the conversion formulas. Odd offsets subtract the
    /// parity bit, even offsets add it.
    pub fn sign(self) -> i32 {
        match self {
            Self::Odd => -1,
            Self::Even => 1,
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::Odd
    }
}

/// Config for a rectangular grid. The rectangle is laid out in cartesian
/// (column/row) space, so its actual shape depends on the [Layout].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RectangleConfig {
    /// Number of columns
    #[validate(range(min = 0, max = 10000))]
    pub width: u16,
    /// Number of rows
    #[validate(range(min = 0, max = 10000))]
    pub height: u16,
    /// The hex in the top-left corner. Every other hex is offset from here.
    pub start: Hex,
    pub layout: Layout,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            start: Hex::ORIGIN,
            layout: Layout::default(),
        }
    }
}

/// Config for a grid in the shape of a larger hexagon
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HexagonConfig {
    /// Distance from the center to the edge, in all directions. 0 means a
    /// grid of 1 hex, 1 is 7 hexes, 2 => 19, etc.
    #[validate(range(min = 0, max = 10000))]
    pub radius: u16,
    pub center: Hex,
}

impl Default for HexagonConfig {
    fn default() -> Self {
        Self {
            radius: 5,
            center: Hex::ORIGIN,
        }
    }
}

/// Config for a grid in the shape of a parallelogram, with sides running along
/// the `q` and `r` axes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ParallelogramConfig {
    /// Length of the sides along the `q` axis
    #[validate(range(min = 0, max = 10000))]
    pub width: u16,
    /// Length of the sides along the `r` axis
    #[validate(range(min = 0, max = 10000))]
    pub height: u16,
    pub start: Hex,
}

impl Default for ParallelogramConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            start: Hex::ORIGIN,
        }
    }
}

/// Config for a grid in the shape of a triangle. The triangle's right angle
/// (in axial space) sits at `start`, and the hypotenuse faces `+q+r`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TriangleConfig {
    /// Number of hexes along each side
    #[validate(range(min = 0, max = 10000))]
    pub size: u16,
    pub start: Hex,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            size: 10,
            start: Hex::ORIGIN,
        }
    }
}

/// Config for any of the supported grid shapes. This makes it possible to
/// pick a shape from an external config file, e.g.:
///
/// ```toml
/// shape = "hexagon"
/// radius = 3
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeConfig {
    Rectangle(RectangleConfig),
    Hexagon(HexagonConfig),
    Parallelogram(ParallelogramConfig),
    Triangle(TriangleConfig),
}

// The derive macro doesn't support enums
impl Validate for ShapeConfig {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Self::Rectangle(config) => config.validate(),
            Self::Hexagon(config) => config.validate(),
            Self::Parallelogram(config) => config.validate(),
            Self::Triangle(config) => config.validate(),
        }
    }
}
