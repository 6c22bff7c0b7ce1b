//! The scheduler facade: a single pure function tying together the grid,
//! feasibility evaluator, and assignment solver.

use std::collections::HashMap;

use crate::feasibility::build_feasibility_table;
use crate::grid::Grid;
use crate::pathfinder::Coord;
use crate::robot::Robot;
use crate::solver::solve;
use crate::task::Task;

/// The scheduler's output for one covered task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAssignment {
    pub robot_id: String,
    pub estimated_battery_cost: u32,
    pub path_to_pickup: Vec<Coord>,
    pub path_to_dropoff: Vec<Coord>,
    pub path_to_charge: Option<Vec<Coord>>,
}

/// Task-id-keyed assignment result. Tasks absent from the map are
/// unassigned.
pub type AssignmentResult = HashMap<String, TaskAssignment>;

/// Plans task-to-robot assignments over a static snapshot of the warehouse.
///
/// Pure function of its inputs: `grid`, `robots`, and `tasks` are never
/// mutated, and calling this twice on the same snapshot yields the same
/// coverage and total cost (spec.md §8, property 7).
pub fn schedule(grid: &Grid, robots: &[Robot], tasks: &[Task]) -> AssignmentResult {
    tracing::info!(
        num_robots = robots.len(),
        num_tasks = tasks.len(),
        "scheduling pass started"
    );

    let pairs = build_feasibility_table(grid, tasks, robots);
    let assignments = solve(tasks.len(), robots.len(), pairs);

    let mut result = AssignmentResult::with_capacity(assignments.len());
    for assignment in &assignments {
        let task = &tasks[assignment.task_index];
        let robot = &robots[assignment.robot_index];
        tracing::info!(
            task_id = %task.id,
            robot_id = %robot.id,
            cost = assignment.plan.total_cost,
            recharged = assignment.plan.path_to_charge.is_some(),
            "task assigned"
        );
        result.insert(
            task.id.clone(),
            TaskAssignment {
                robot_id: robot.id.clone(),
                estimated_battery_cost: assignment.plan.total_cost,
                path_to_pickup: assignment.plan.path_to_pickup.clone(),
                path_to_dropoff: assignment.plan.path_to_dropoff.clone(),
                path_to_charge: assignment.plan.path_to_charge.clone(),
            },
        );
    }

    tracing::info!(assigned = result.len(), total_tasks = tasks.len(), "scheduling pass finished");
    result
}
