//! Per-cell traversal cost, doubled while the robot carries a box.

use crate::grid::Cell;

/// Base cost of entering a cell, before the carrying multiplier.
///
/// `None` means the cell can never be entered (`Obstacle`).
fn base_cost(cell: Cell) -> Option<u32> {
    match cell {
        Cell::Empty | Cell::ChargingStation | Cell::Box => Some(1),
        Cell::Ramp => Some(2),
        Cell::Slope => Some(3),
        // Robot-occupied cells are a rendering concern, not a traversal
        // concern — see spec.md §9 ("Robot-on-grid cell").
        Cell::Robot => Some(1),
        Cell::Obstacle => None,
    }
}

/// Cost of entering `cell`, doubled if the robot is carrying a box.
///
/// Returns `None` for `Obstacle`, which is never traversable regardless of
/// the carrying flag.
pub fn entry_cost(cell: Cell, carrying: bool) -> Option<u32> {
    base_cost(cell).map(|cost| if carrying { cost * 2 } else { cost })
}
