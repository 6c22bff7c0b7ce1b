//! The task domain type and its closed type enumeration.

use crate::robot::Shift;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    Standard,
    Heavy,
    Fragile,
}

/// A pickup-and-delivery task, as handed to the scheduler by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    pub id: String,
    pub task_type: TaskType,
    pub shift: Shift,
    pub pickup: (usize, usize),
    pub dropoff: (usize, usize),
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        task_type: TaskType,
        shift: Shift,
        pickup: (usize, usize),
        dropoff: (usize, usize),
    ) -> Self {
        Task {
            id: id.into(),
            task_type,
            shift,
            pickup,
            dropoff,
        }
    }
}
