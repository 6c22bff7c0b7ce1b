//! The warehouse grid: a rectangular array of cell kinds and the handful of
//! read-only queries the rest of the crate needs over it.

use crate::error::SchedulerError;

/// A single grid cell kind.
///
/// Closed set, total pattern matching throughout the crate — no
/// string-backed "is_valid" checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Obstacle,
    Robot,
    Box,
    Ramp,
    Slope,
    ChargingStation,
}

impl Cell {
    /// Whether a robot may ever step onto this cell, independent of which
    /// leg of the plan is being computed. `Box` is handled separately by
    /// the pathfinder since its traversability also depends on whether the
    /// cell is the current leg's goal.
    pub fn is_obstacle(&self) -> bool {
        matches!(self, Cell::Obstacle)
    }
}

/// An immutable `(row, col)` indexed cell array.
///
/// Row-major storage; `(row, col)` throughout, never `(x, y)` — see
/// spec.md §9 for why that distinction matters here.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

/// The 4-orthogonal step directions, in a fixed enumeration order so that
/// neighbor iteration (and therefore A* tie-breaking) is deterministic.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

impl Grid {
    /// Builds an empty (`Cell::Empty`-filled) grid of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self, SchedulerError> {
        if width == 0 || height == 0 {
            return Err(SchedulerError::InvalidGridDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    /// Builds a grid from a fully-populated row-major cell matrix.
    ///
    /// `cells[row][col]`. Every row must have length `width`.
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Result<Self, SchedulerError> {
        let height = cells.len();
        let width = cells.first().map_or(0, |row| row.len());
        if width == 0 || height == 0 || cells.iter().any(|row| row.len() != width) {
            return Err(SchedulerError::InvalidGridDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Bounds-checked cell lookup.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Sets a single cell, used only while building a grid up-front.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), SchedulerError> {
        if row >= self.height || col >= self.width {
            return Err(SchedulerError::CellIndexOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// The 4 in-bounds orthogonal neighbors of `(row, col)`, with their
    /// cell kind, in a fixed deterministic order.
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize, Cell)> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if self.in_bounds(nr, nc) {
                    let nr = nr as usize;
                    let nc = nc as usize;
                    Some((nr, nc, self.cells[nr][nc]))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Every `ChargingStation` cell, in row-major enumeration order.
    pub fn charging_stations(&self) -> Vec<(usize, usize)> {
        let mut stations = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[row][col] == Cell::ChargingStation {
                    stations.push((row, col));
                }
            }
        }
        stations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn neighbors_are_in_bounds_and_orthogonal() {
        let grid = Grid::new(3, 3).unwrap();
        let corner = grid.neighbors(0, 0);
        assert_eq!(corner.len(), 2);
        let center = grid.neighbors(1, 1);
        assert_eq!(center.len(), 4);
    }

    #[test]
    fn charging_stations_are_enumerated_in_row_major_order() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_cell(1, 2, Cell::ChargingStation).unwrap();
        grid.set_cell(0, 0, Cell::ChargingStation).unwrap();
        assert_eq!(grid.charging_stations(), vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn set_cell_out_of_bounds_errors() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.set_cell(5, 0, Cell::Obstacle).is_err());
    }
}
