//! Sparse board representation for Game of Life

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single cell position on the grid
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The set of live cells on a grid
///
/// Only live cells are stored; every coordinate not present is dead. This
/// keeps stepping proportional to the population rather than the grid area.
/// Boards are value-semantic: stepping never mutates the input board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: HashSet<Coordinate>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from an iterator of live cell positions
    pub fn from_cells<I: IntoIterator<Item = Coordinate>>(cells: I) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Mark a cell as live
    pub fn insert(&mut self, cell: Coordinate) -> bool {
        self.cells.insert(cell)
    }

    /// Check whether a cell is live
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells.contains(&cell)
    }

    /// Iterate over all live cells in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the board has no live cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Live cells sorted by (x, y), for deterministic listings
    pub fn sorted_cells(&self) -> Vec<Coordinate> {
        self.cells.iter().copied().sorted().collect()
    }
}

impl FromIterator<Coordinate> for Board {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

impl Extend<Coordinate> for Board {
    fn extend<I: IntoIterator<Item = Coordinate>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_equality() {
        assert_eq!(Coordinate::new(2, 3), Coordinate::new(2, 3));
        assert_ne!(Coordinate::new(2, 3), Coordinate::new(3, 2));
    }

    #[test]
    fn test_board_membership() {
        let mut board = Board::new();
        assert!(board.is_empty());

        assert!(board.insert(Coordinate::new(1, 1)));
        assert!(!board.insert(Coordinate::new(1, 1)));

        assert!(board.contains(Coordinate::new(1, 1)));
        assert!(!board.contains(Coordinate::new(1, 2)));
        assert_eq!(board.population(), 1);
    }

    #[test]
    fn test_board_from_cells() {
        let board = Board::from_cells([
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(0, 0),
        ]);
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn test_sorted_cells() {
        let board = Board::from_cells([
            Coordinate::new(2, 0),
            Coordinate::new(0, 1),
            Coordinate::new(0, 0),
        ]);
        assert_eq!(
            board.sorted_cells(),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(2, 0),
            ]
        );
    }
}
