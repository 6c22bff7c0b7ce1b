//! Exact assignment solver: picks at most one feasible (task, robot) pair per
//! task and per robot, maximizing coverage first and minimizing total
//! battery cost among coverage-optimal solutions.
//!
//! Implemented as a maximum-weight bipartite matching (Kuhn–Munkres), the
//! same algorithm and `Weights` trait shape used for batch matching in
//! `examples/other_examples/9cc964bb_dpapukchiev-ride-hailing-simulation__crates-sim_core-src-matching-hungarian.rs.rs`:
//! a `Vec<Vec<i64>>` cost matrix wrapped in a `Weights<i64>` impl, an
//! infeasibility sentinel, and `kuhn_munkres` for the solve itself. Coverage
//! is folded into the weight (`K - cost` for a feasible pair, `K` dominating
//! any achievable total cost) so that maximizing summed weight is exactly
//! the lexicographic (coverage, then cost) objective from spec.md §4.6.
//!
//! Kuhn–Munkres requires a perfect matching on a square matrix. A task or
//! robot going unmatched is modeled with a dedicated zero-weight "stay
//! unassigned" dummy column/row per side, so the solver never has to force
//! a real but infeasible pairing just to complete the matching.

use std::collections::HashMap;

use pathfinding::kuhn_munkres::{Weights, kuhn_munkres};

use crate::feasibility::{Pair, PairPlan};

/// Weight assigned to an infeasible (task, robot) cell: worse than any real
/// pairing or any "stay unassigned" option, but far enough from `i64::MIN`
/// that negating it (`Weights::neg`) or summing a few of them never
/// overflows.
const INFEASIBLE: i64 = i64::MIN / 4;

struct CostMatrix(Vec<Vec<i64>>);

impl Weights<i64> for CostMatrix {
    fn rows(&self) -> usize {
        self.0.len()
    }

    fn columns(&self) -> usize {
        self.0.first().map_or(0, |row| row.len())
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.0[row][col]
    }

    fn neg(&self) -> Self {
        CostMatrix(
            self.0
                .iter()
                .map(|row| row.iter().map(|&w| w.saturating_neg()).collect())
                .collect(),
        )
    }
}

/// A resolved assignment: one feasible pair the solver chose to keep.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub task_index: usize,
    pub robot_index: usize,
    pub plan: PairPlan,
}

/// Solves the assignment problem over the feasibility table for `num_tasks`
/// tasks and `num_robots` robots. Returns one [`Assignment`] per task that
/// ends up covered; tasks with no entry in the returned vector are
/// unassigned.
pub fn solve(num_tasks: usize, num_robots: usize, pairs: Vec<Pair>) -> Vec<Assignment> {
    if num_tasks == 0 || num_robots == 0 || pairs.is_empty() {
        return Vec::new();
    }

    let mut table: HashMap<(usize, usize), PairPlan> = pairs
        .into_iter()
        .map(|pair| ((pair.task_index, pair.robot_index), pair.plan))
        .collect();

    // K dominates the cost of any achievable selection: no selection can
    // cost more than the sum of every feasible pair's cost (spec.md §9's
    // dynamic choice, used instead of a fixed 10000).
    let k: i64 = 1 + table.values().map(|plan| plan.total_cost as i64).sum::<i64>();

    let n = num_tasks;
    let m = num_robots;
    let size = n + m;
    let mut matrix = vec![vec![INFEASIBLE; size]; size];

    for i in 0..n {
        for j in 0..m {
            if let Some(plan) = table.get(&(i, j)) {
                matrix[i][j] = k - plan.total_cost as i64;
            }
        }
        // Task i staying unassigned: its own dedicated dummy column.
        matrix[i][m + i] = 0;
    }
    for j in 0..m {
        // Robot j staying unassigned: its own dedicated dummy row.
        matrix[n + j][j] = 0;
    }
    for dummy_row in 0..m {
        for dummy_col in 0..n {
            // Filler pairing two dummy slots together; never represents a
            // real decision but keeps the matrix a valid square input.
            matrix[n + dummy_row][m + dummy_col] = 0;
        }
    }

    let weights = CostMatrix(matrix);
    let (_total_weight, column_for_row) = kuhn_munkres(&weights);

    let mut assignments = Vec::new();
    for (task_index, &col) in column_for_row.iter().enumerate().take(n) {
        if col < m {
            if let Some(plan) = table.remove(&(task_index, col)) {
                assignments.push(Assignment {
                    task_index,
                    robot_index: col,
                    plan,
                });
            }
        }
    }
    assignments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feasibility::Pair;

    fn plan(cost: u32) -> PairPlan {
        PairPlan {
            total_cost: cost,
            path_to_pickup: vec![],
            path_to_dropoff: vec![],
            path_to_charge: None,
        }
    }

    fn pair(task_index: usize, robot_index: usize, cost: u32) -> Pair {
        Pair {
            task_index,
            robot_index,
            plan: plan(cost),
        }
    }

    #[test]
    fn no_pairs_means_no_assignments() {
        assert!(solve(2, 2, vec![]).is_empty());
    }

    #[test]
    fn single_feasible_pair_is_taken() {
        let assignments = solve(1, 1, vec![pair(0, 0, 5)]);
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].task_index, 0);
        assert_eq!(assignments[0].robot_index, 0);
    }

    #[test]
    fn coverage_beats_lower_cost_for_a_single_pair() {
        // One task, one robot, one feasible (expensive) pair: taking it
        // covers a task, which always outweighs leaving it unassigned.
        let assignments = solve(1, 1, vec![pair(0, 0, 99)]);
        assert_eq!(assignments.len(), 1);
    }

    #[test]
    fn maximizes_coverage_over_minimizing_cost() {
        // Two tasks, one robot: a single cheap pair for task 0 is available,
        // but an even cheaper-looking configuration would leave task 1
        // unassigned either way since there is only one robot. With two
        // robots available, both tasks should be covered even though
        // routing through the "wrong" robot costs more in total.
        let pairs = vec![pair(0, 0, 1), pair(0, 1, 100), pair(1, 1, 1)];
        let assignments = solve(2, 2, pairs);
        assert_eq!(assignments.len(), 2);
        let robots_used: Vec<usize> = assignments.iter().map(|a| a.robot_index).collect();
        assert!(robots_used.contains(&0));
        assert!(robots_used.contains(&1));
    }

    #[test]
    fn among_equal_coverage_picks_cheaper_total_cost() {
        // Both robots can serve the one task; the cheaper pairing wins.
        let pairs = vec![pair(0, 0, 10), pair(0, 1, 3)];
        let assignments = solve(1, 2, pairs);
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].robot_index, 1);
    }

    #[test]
    fn each_robot_and_task_used_at_most_once() {
        let pairs = vec![pair(0, 0, 2), pair(1, 0, 2), pair(0, 1, 2), pair(1, 1, 2)];
        let assignments = solve(2, 2, pairs);
        let mut tasks: Vec<usize> = assignments.iter().map(|a| a.task_index).collect();
        let mut robots: Vec<usize> = assignments.iter().map(|a| a.robot_index).collect();
        tasks.sort();
        robots.sort();
        tasks.dedup();
        robots.dedup();
        assert_eq!(tasks.len(), assignments.len());
        assert_eq!(robots.len(), assignments.len());
    }
}
