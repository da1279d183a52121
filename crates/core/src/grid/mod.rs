//! Grids are collections of cells, keyed by hex. A grid doesn't care what
//! shape it is: the [shape](self::shape) factories just decide which hexes go
//! in it. Once a grid is built, it's only ever read from.

mod shape;
mod topology;

pub use self::topology::*;

use crate::hex::{HasHexPosition, Hex, HexIndexMap, HexMap};
use std::{iter, ops};

/// Anything that can resolve a hex coordinate to a stored cell. This is the
/// only thing the topology operations need from a grid, so they're written
/// against this trait rather than [Grid] directly. That means they work just
/// as well on a plain [HexMap].
pub trait HexLookup {
    /// The type of value stored at each hex
    type Cell;

    /// Get the cell at the given position, or `None` if the position isn't
    /// occupied. Must never fabricate a cell.
    fn lookup(&self, hex: Hex) -> Option<&Self::Cell>;
}

/// An ordered collection of cells, each at a unique hex. Cells are enumerated
/// in the order they were inserted, which for the shape factories is a fixed,
/// documented order. Lookup by hex is O(1).
///
/// The grid may be sparse: there's no requirement that its hexes are
/// contiguous or form any particular shape.
#[derive(Clone, Debug)]
pub struct Grid<T = Hex> {
    /// Each cell, keyed by its position
    cells: HexIndexMap<T>,
}

impl<T> Grid<T> {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: HexIndexMap::default(),
        }
    }

    /// Get the cell stored at the given position. The returned reference
    /// points at the grid's own instance, not a copy.
    pub fn get(&self, hex: Hex) -> Option<&T> {
        self.cells.get(&hex)
    }

    /// Is there a cell at the given position?
    pub fn contains(&self, hex: Hex) -> bool {
        self.cells.contains_key(&hex)
    }

    /// Get the cell at the given position in enumeration order
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.cells.get_index(index).map(|(_, cell)| cell)
    }

    /// Get the number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all cells, in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.values()
    }

    /// Iterate over the positions of all cells, in enumeration order
    pub fn positions(&self) -> impl Iterator<Item = Hex> + '_ {
        self.cells.keys().copied()
    }

    /// Get every cell in a straight line from `first` to `last`, inclusive.
    /// See [hexes_between].
    pub fn hexes_between(&self, first: Hex, last: Hex) -> Vec<Option<&T>> {
        topology::hexes_between(self, first, last)
    }

    /// Get the neighbor of a hex in one direction. See [neighbor_of].
    pub fn neighbor_of(
        &self,
        hex: Hex,
        direction: i32,
        diagonal: bool,
    ) -> Option<&T> {
        topology::neighbor_of(self, hex, direction, diagonal)
    }

    /// Get all neighbors of a hex that are in this grid. See [neighbors_of].
    pub fn neighbors_of(&self, hex: Hex, diagonal: bool) -> Vec<&T> {
        topology::neighbors_of(self, hex, diagonal)
    }
}

impl<T: HasHexPosition> Grid<T> {
    /// Build a grid out of an arbitrary set of cells. Each cell is keyed by its
    /// own position. If two cells share a position, the later one wins.
    pub fn from_cells(cells: impl IntoIterator<Item = T>) -> Self {
        cells.into_iter().collect()
    }

    /// Add a cell to the grid. If there was already a cell at the same
    /// position, it's replaced (but keeps its spot in enumeration order) and
    /// returned.
    pub fn insert(&mut self, cell: T) -> Option<T> {
        self.cells.insert(cell.position(), cell)
    }

    /// Map this grid into a new grid by applying the given mapping function
    /// over each cell. Cells are re-keyed by their new position, and keep
    /// their relative order.
    pub fn map<U: HasHexPosition>(self, f: impl FnMut(T) -> U) -> Grid<U> {
        self.into_iter().map(f).collect()
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HexLookup for Grid<T> {
    type Cell = T;

    fn lookup(&self, hex: Hex) -> Option<&T> {
        self.get(hex)
    }
}

impl<T> HexLookup for HexMap<T> {
    type Cell = T;

    fn lookup(&self, hex: Hex) -> Option<&T> {
        self.get(&hex)
    }
}

impl<T> ops::Index<usize> for Grid<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get_index(index) {
            Some(cell) => cell,
            None => panic!(
                "index {} out of bounds for grid of {} cells",
                index,
                self.len()
            ),
        }
    }
}

impl<T: HasHexPosition> iter::FromIterator<T> for Grid<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|cell| (cell.position(), cell))
                .collect(),
        }
    }
}

impl<T: HasHexPosition> Extend<T> for Grid<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.cells
            .extend(iter.into_iter().map(|cell| (cell.position(), cell)));
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = T;
    #[allow(clippy::type_complexity)]
    type IntoIter = iter::Map<
        <HexIndexMap<T> as IntoIterator>::IntoIter,
        fn((Hex, T)) -> T,
    >;

    fn into_iter(self) -> Self::IntoIter {
        let value: fn((Hex, T)) -> T = |(_, cell)| cell;
        self.cells.into_iter().map(value)
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, Hex, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A cell that carries some data along with its position, to make sure
    /// the grid hands back the stored instance rather than an equal one
    #[derive(Clone, Debug, PartialEq)]
    struct Tile {
        position: Hex,
        label: &'static str,
    }

    impl HasHexPosition for Tile {
        fn position(&self) -> Hex {
            self.position
        }
    }

    #[test]
    fn test_get() {
        let target = Hex::new(3, -2);
        let grid = Grid::from_cells(vec![target]);

        let result = grid.get(Hex::new(3, -2)).unwrap();
        assert!(std::ptr::eq(result, &grid[0]));
        assert_eq!(*result, target);
        assert_eq!(grid.get(Hex::ORIGIN), None);
        assert!(grid.contains(target));
        assert!(!grid.contains(Hex::ORIGIN));
    }

    #[test]
    fn test_enumeration_order() {
        let hexes = vec![Hex::new(2, 0), Hex::new(-1, 1), Hex::new(0, 0)];
        let grid = Grid::from_cells(hexes.clone());

        assert_eq!(grid.len(), 3);
        assert!(!grid.is_empty());
        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), hexes);
        assert_eq!(grid.positions().collect::<Vec<_>>(), hexes);
        assert_eq!((&grid).into_iter().count(), 3);
        assert_eq!(grid.get_index(1), Some(&Hex::new(-1, 1)));
        assert_eq!(grid.get_index(3), None);
        assert_eq!(grid.into_iter().collect::<Vec<_>>(), hexes);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut grid = Grid::from_cells(vec![
            Tile {
                position: Hex::new(0, 0),
                label: "a",
            },
            Tile {
                position: Hex::new(1, 0),
                label: "b",
            },
        ]);
        let replaced = grid.insert(Tile {
            position: Hex::new(0, 0),
            label: "c",
        });

        assert_eq!(replaced.map(|tile| tile.label), Some("a"));
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].label, "c");
        assert_eq!(grid[1].label, "b");

        grid.extend(vec![Tile {
            position: Hex::new(0, 1),
            label: "d",
        }]);
        assert_eq!(grid[2].label, "d");
    }

    #[test]
    fn test_map() {
        let grid = Grid::from_cells(vec![Hex::new(0, 0), Hex::new(1, -1)]);
        let tiles = grid.map(|position| Tile {
            position,
            label: "tile",
        });

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles.get(Hex::new(1, -1)).unwrap().label, "tile");
        assert_eq!(tiles[0].position, Hex::new(0, 0));
    }

    #[test]
    fn test_empty() {
        let grid: Grid = Grid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.get(Hex::ORIGIN), None);
        assert_eq!(grid.get_index(0), None);
    }

    #[test]
    #[should_panic(expected = "index 1 out of bounds for grid of 1 cells")]
    fn test_index_out_of_bounds() {
        let grid = Grid::from_cells(vec![Hex::ORIGIN]);
        let _ = grid[1];
    }
}
