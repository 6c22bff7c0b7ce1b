//! The robot domain type and its closed type/shift enumerations.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RobotType {
    General,
    Standard,
    Fragile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Day,
    Night,
    AllHours,
}

/// A robot, as handed to the scheduler by the caller.
///
/// Robots are read-only inputs: the feasibility evaluator works against
/// cheap value copies (see [`crate::feasibility`]) and never mutates the
/// caller's `Robot`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Robot {
    pub id: String,
    pub robot_type: RobotType,
    pub shift: Shift,
    pub battery_level: u32,
    pub carrying_box: bool,
    pub position: (usize, usize),
}

impl Robot {
    /// Battery level defaults to 100 when not specified by the caller,
    /// matching the HTTP surface's documented default (spec.md §6).
    pub fn new(id: impl Into<String>, robot_type: RobotType, shift: Shift, position: (usize, usize)) -> Self {
        Robot {
            id: id.into(),
            robot_type,
            shift,
            battery_level: 100,
            carrying_box: false,
            position,
        }
    }

    pub fn with_battery_level(mut self, battery_level: u32) -> Self {
        self.battery_level = battery_level;
        self
    }
}
