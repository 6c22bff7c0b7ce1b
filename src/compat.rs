//! Type- and shift-compatibility predicates between a robot and a task.
//!
//! Both predicates are pure and total over the closed enums in
//! [`crate::robot`] and [`crate::task`].

use crate::robot::{RobotType, Shift};
use crate::task::TaskType;

/// Whether `robot_type` is permitted to serve `task_type`.
///
/// | Robot type | Permitted task types |
/// |---|---|
/// | `General` | `Standard`, `Heavy`, `Fragile` |
/// | `Standard` | `Standard` |
/// | `Fragile` | `Fragile` |
///
/// No robot type serves `Heavy` tasks except `General`.
pub fn is_type_compatible(robot_type: RobotType, task_type: TaskType) -> bool {
    match robot_type {
        RobotType::General => true,
        RobotType::Standard => task_type == TaskType::Standard,
        RobotType::Fragile => task_type == TaskType::Fragile,
    }
}

/// Whether `robot_shift` may serve a task on `task_shift`.
pub fn is_shift_compatible(robot_shift: Shift, task_shift: Shift) -> bool {
    robot_shift == Shift::AllHours || robot_shift == task_shift
}

/// Both predicates at once — the gate a (task, robot) pair must clear
/// before the feasibility evaluator attempts any path planning.
pub fn is_compatible(robot_type: RobotType, robot_shift: Shift, task_type: TaskType, task_shift: Shift) -> bool {
    is_type_compatible(robot_type, task_type) && is_shift_compatible(robot_shift, task_shift)
}
