//! Greedy constructive method.

use std::iter;

use rand::Rng;

use super::types::Constructive;
use crate::solution::Solution;

/// Adds, one at a time, the node whose closed neighbourhood contains the
/// most undominated nodes. Ties are broken uniformly at random.
///
/// Candidates are the undominated nodes themselves and their configurable,
/// unchosen neighbours.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyConstructive;

impl Constructive for GreedyConstructive {
    fn construct<R: Rng>(&self, mut solution: Solution, rng: &mut R) -> Solution {
        let instance = solution.instance().clone();
        let mut gain = vec![0usize; instance.node_count()];
        let mut touched: Vec<usize> = Vec::new();

        while !solution.is_covered() {
            for u in solution.unobserved().iter() {
                let closed = iter::once(u).chain(instance.neighbors(u).iter().copied());
                for v in closed {
                    if solution.chosen().contains(v) || (v != u && !instance.is_configurable(v)) {
                        continue;
                    }
                    if gain[v] == 0 {
                        touched.push(v);
                    }
                    gain[v] += 1;
                }
            }

            let best = touched.iter().map(|&v| gain[v]).max().unwrap_or(0);
            let ties: Vec<usize> = touched.iter().copied().filter(|&v| gain[v] == best).collect();
            for v in touched.drain(..) {
                gain[v] = 0;
            }

            let node = ties[rng.random_range(0..ties.len())];
            solution.add_node(node);
        }
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    #[test]
    fn test_greedy_picks_hub() {
        // No leaves; node 0 is adjacent to every node but 3.
        let inst = Arc::new(
            Instance::from_edges(
                "hub",
                7,
                &[(0, 1), (0, 2), (1, 3), (2, 3), (0, 4), (0, 5), (0, 6), (4, 5), (5, 6)],
            )
            .unwrap(),
        );
        let sol = GreedyConstructive.construct(Solution::new(&inst), &mut StdRng::seed_from_u64(0));
        assert!(sol.is_covered());
        assert!(sol.chosen().contains(0), "0 dominates 6 of 7 nodes");
        assert_eq!(sol.score(), 2.0);
    }

    #[test]
    fn test_greedy_on_cycle_is_feasible_and_tight() {
        let n = 9;
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        let inst = Arc::new(Instance::from_edges("c9", n, &edges).unwrap());
        let sol = GreedyConstructive.construct(Solution::new(&inst), &mut StdRng::seed_from_u64(5));
        assert!(sol.is_covered());
        // γ(C9) = 3; greedy never needs more than 4 here.
        assert!(sol.score() <= 4.0, "got {}", sol.score());
        assert_eq!(sol.score(), sol.recalculate_score());
    }

    #[test]
    fn test_greedy_repairs_partial_solution() {
        let n = 8;
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        let inst = Arc::new(Instance::from_edges("c8", n, &edges).unwrap());
        let mut partial = Solution::new(&inst);
        partial.add_node(1);
        let sol = GreedyConstructive.reconstruct(partial, &mut StdRng::seed_from_u64(9));
        assert!(sol.is_covered());
        assert!(sol.chosen().contains(1));
    }
}
