//! For each compatible (task, robot) pair, attempt a direct plan; on
//! battery shortfall, attempt a recharge-first plan.

use crate::compat::is_compatible;
use crate::grid::Grid;
use crate::pathfinder::{Coord, Path, find_path};
use crate::robot::Robot;
use crate::task::Task;

const FULL_BATTERY: u32 = 100;

/// A feasible plan for one (task, robot) pair: the cost the solver should
/// minimize, plus the three legs the scheduler hands back to the caller.
#[derive(Debug, Clone)]
pub struct PairPlan {
    pub total_cost: u32,
    pub path_to_pickup: Vec<Coord>,
    pub path_to_dropoff: Vec<Coord>,
    pub path_to_charge: Option<Vec<Coord>>,
}

/// Attempts the direct (no recharge) plan: unloaded to pickup, loaded to
/// dropoff, from the given starting position and battery.
fn direct_plan(grid: &Grid, start: Coord, pickup: Coord, dropoff: Coord, battery: u32) -> Option<PairPlan> {
    let to_pickup = find_path(grid, start, pickup, false)?;
    let to_dropoff = find_path(grid, pickup, dropoff, true)?;
    let total_cost = to_pickup.cost + to_dropoff.cost;
    if total_cost > battery {
        return None;
    }
    Some(PairPlan {
        total_cost,
        path_to_pickup: to_pickup.cells,
        path_to_dropoff: to_dropoff.cells,
        path_to_charge: None,
    })
}

/// Evaluates a single (task, robot) pair, returning `None` if it is
/// infeasible. Robots are read-only: all "what if the robot were here with
/// this battery" reasoning happens on local copies of the path/cost
/// results, never on the caller's `Robot`.
pub fn evaluate_pair(grid: &Grid, task: &Task, robot: &Robot) -> Option<PairPlan> {
    if !is_compatible(robot.robot_type, robot.shift, task.task_type, task.shift) {
        return None;
    }

    if let Some(plan) = direct_plan(grid, robot.position, task.pickup, task.dropoff, robot.battery_level) {
        return Some(plan);
    }

    // Direct attempt failed: try recharging first, first viable station wins.
    for station in grid.charging_stations() {
        let Some(to_charge) = find_path(grid, robot.position, station, false) else {
            continue;
        };
        if to_charge.cost > robot.battery_level {
            continue;
        }
        if let Some(mut plan) = direct_plan(grid, station, task.pickup, task.dropoff, FULL_BATTERY) {
            plan.path_to_charge = Some(to_charge.cells);
            return Some(plan);
        }
        // Per spec.md §4.5: the first station reachable on the original
        // battery stops the search, whether or not the post-recharge plan
        // then succeeds.
        break;
    }

    None
}

#[derive(Debug, Clone)]
pub struct Pair {
    pub task_index: usize,
    pub robot_index: usize,
    pub plan: PairPlan,
}

/// Builds the full feasibility table: one entry per (task, robot) pair that
/// clears compatibility and has an admissible direct or recharge-first plan.
pub fn build_feasibility_table(grid: &Grid, tasks: &[Task], robots: &[Robot]) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for (task_index, task) in tasks.iter().enumerate() {
        for (robot_index, robot) in robots.iter().enumerate() {
            if let Some(plan) = evaluate_pair(grid, task, robot) {
                tracing::debug!(
                    task_id = %task.id,
                    robot_id = %robot.id,
                    cost = plan.total_cost,
                    recharged = plan.path_to_charge.is_some(),
                    "feasible pair found"
                );
                pairs.push(Pair {
                    task_index,
                    robot_index,
                    plan,
                });
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::robot::{RobotType, Shift};
    use crate::task::TaskType;

    fn robot(position: Coord, battery: u32) -> Robot {
        Robot::new("r1", RobotType::Standard, Shift::Day, position).with_battery_level(battery)
    }

    fn task(pickup: Coord, dropoff: Coord) -> Task {
        Task::new("t1", TaskType::Standard, Shift::Day, pickup, dropoff)
    }

    #[test]
    fn direct_plan_succeeds_when_battery_covers_both_legs() {
        let grid = Grid::new(5, 5).unwrap();
        let plan = evaluate_pair(&grid, &task((1, 1), (3, 3)), &robot((0, 0), 100)).unwrap();
        assert_eq!(plan.total_cost, 10); // 2 unloaded + 8 loaded, per spec.md S1
        assert!(plan.path_to_charge.is_none());
    }

    #[test]
    fn incompatible_type_is_infeasible_regardless_of_battery() {
        let grid = Grid::new(5, 5).unwrap();
        let mut t = task((1, 1), (2, 2));
        t.task_type = TaskType::Heavy;
        assert!(evaluate_pair(&grid, &t, &robot((0, 0), 100)).is_none());
    }

    #[test]
    fn recharges_when_direct_attempt_exceeds_battery() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.set_cell(0, 0, Cell::ChargingStation).unwrap();
        let r = robot((1, 1), 3);
        let t = task((2, 2), (3, 3));
        let plan = evaluate_pair(&grid, &t, &r).unwrap();
        assert!(plan.path_to_charge.is_some());
        assert_eq!(plan.path_to_charge.as_ref().unwrap().last(), Some(&(0, 0)));
        // Station (0,0) to pickup (2,2) is 4 steps unloaded (cost 4); pickup
        // to dropoff (3,3) is 2 steps loaded (cost 2 each = 4). Total 8.
        assert_eq!(plan.total_cost, 8);
    }

    #[test]
    fn unreachable_dropoff_is_infeasible() {
        let grid = Grid::new(5, 5).unwrap();
        let t = task((1, 1), (20, 20));
        assert!(evaluate_pair(&grid, &t, &robot((0, 0), 100)).is_none());
    }
}
