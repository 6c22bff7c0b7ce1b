//! Error taxonomy for the scheduler crate.
//!
//! The core scheduling pipeline (`Scheduler::schedule`) never fails — per
//! spec.md §7 it either returns a complete optimal mapping (possibly empty)
//! or does not return. Fallibility in this crate is limited to a handful of
//! construction-time checks on the inputs the caller builds before handing
//! them to the scheduler.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// A grid was constructed with a zero width or height.
    InvalidGridDimensions { width: usize, height: usize },
    /// A cell mutation targeted an index outside the grid's bounds.
    CellIndexOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::InvalidGridDimensions { width, height } => write!(
                f,
                "grid dimensions must be positive, got width={width} height={height}"
            ),
            SchedulerError::CellIndexOutOfBounds {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "cell index ({row}, {col}) out of bounds for a {width}x{height} grid"
            ),
        }
    }
}

impl std::error::Error for SchedulerError {}
