//! Random constructive method.

use rand::Rng;

use super::types::Constructive;
use crate::node_set::NodeSet;
use crate::solution::Solution;

/// Adds uniformly random undominated nodes until the solution is feasible.
///
/// Every node it adds was undominated, so it never adds a redundant node,
/// but the result is usually far from minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomConstructive;

fn pick<R: Rng>(set: &NodeSet, rng: &mut R) -> Option<usize> {
    if set.is_empty() {
        return None;
    }
    let k = rng.random_range(0..set.len());
    set.iter().nth(k)
}

impl Constructive for RandomConstructive {
    fn construct<R: Rng>(&self, mut solution: Solution, rng: &mut R) -> Solution {
        while let Some(node) = pick(solution.unobserved(), rng) {
            solution.add_node(node);
        }
        solution
    }
}
