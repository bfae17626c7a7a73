//! Local improvement of feasible solutions.

use crate::solution::Solution;

/// Improves a solution without making its score worse.
pub trait Improver: Send + Sync {
    fn improve(&self, solution: Solution) -> Solution;
}

/// Drops every chosen node whose removal keeps the solution covered.
///
/// Nodes are examined once, in ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveRedundant;

impl Improver for RemoveRedundant {
    fn improve(&self, mut solution: Solution) -> Solution {
        for node in solution.removable_nodes().iter() {
            if solution.is_covered_if_removed(node) {
                log::debug!("dropping redundant node {node}");
                solution.remove_node(node);
            }
        }
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use std::sync::Arc;

    #[test]
    fn test_removes_redundant_nodes() {
        let n = 6;
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        let inst = Arc::new(Instance::from_edges("c6", n, &edges).unwrap());
        let mut sol = Solution::new(&inst);
        for node in 0..n {
            sol.add_node(node);
        }
        let improved = RemoveRedundant.improve(sol);
        assert!(improved.is_covered());
        // Ascending scan: 0 and 1 go, 2 must stay (it alone dominates 1), ...
        assert_eq!(improved.chosen().to_vec(), vec![2, 5]);
        assert_eq!(improved.score(), improved.recalculate_score());
    }

    #[test]
    fn test_minimal_solution_is_unchanged() {
        let inst =
            Arc::new(Instance::from_edges("p5", 5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap());
        let mut sol = Solution::new(&inst);
        sol.add_node(2);
        let improved = RemoveRedundant.improve(sol);
        assert_eq!(improved.chosen().to_vec(), vec![1, 3]);
        assert_eq!(improved.score(), 2.0);
    }
}
