//! Runs one illustrative scheduling pass and prints the resulting
//! assignment. No HTTP, no JSON — just the library's in-process API, the
//! way `mazest`'s own `src/bin/profile.rs` drives its maze library without
//! going through the interactive terminal app.

use warehouse_scheduler::grid::{Cell, Grid};
use warehouse_scheduler::robot::{Robot, RobotType, Shift};
use warehouse_scheduler::scheduler::schedule;
use warehouse_scheduler::task::{Task, TaskType};

fn build_scenario() -> (Grid, Vec<Robot>, Vec<Task>) {
    // A 6x6 grid with one charging station, mirroring spec.md's S2 scenario:
    // a low-battery robot that must recharge before it can complete its task.
    let mut grid = Grid::new(6, 6).expect("fixed non-zero dimensions");
    grid.set_cell(0, 0, Cell::ChargingStation).expect("in bounds");

    let robots = vec![
        Robot::new("R1", RobotType::Fragile, Shift::Day, (1, 1)).with_battery_level(3),
        Robot::new("R2", RobotType::General, Shift::AllHours, (5, 5)).with_battery_level(100),
    ];
    let tasks = vec![
        Task::new("pick-fragile-glassware", TaskType::Fragile, Shift::Day, (2, 2), (3, 3)),
        Task::new("move-pallet", TaskType::Standard, Shift::Night, (0, 4), (4, 0)),
    ];

    (grid, robots, tasks)
}

fn main() {
    warehouse_scheduler::logging::init();

    let (grid, robots, tasks) = build_scenario();
    let result = schedule(&grid, &robots, &tasks);

    if result.is_empty() {
        println!("no tasks could be assigned");
        return;
    }

    let mut task_ids: Vec<&String> = result.keys().collect();
    task_ids.sort();
    for task_id in task_ids {
        let assignment = &result[task_id];
        println!("task {task_id} -> robot {}", assignment.robot_id);
        println!("  estimated battery cost: {}", assignment.estimated_battery_cost);
        println!("  pickup path:  {:?}", assignment.path_to_pickup);
        println!("  dropoff path: {:?}", assignment.path_to_dropoff);
        match &assignment.path_to_charge {
            Some(path) => println!("  charge path:  {path:?}"),
            None => println!("  charge path:  none"),
        }
    }
}
