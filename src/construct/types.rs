//! Core trait for constructive methods.

use rand::Rng;

use crate::solution::Solution;

/// Completes a (usually reference-seeded) solution until it is feasible.
///
/// Implementations must only add configurable nodes and must return a
/// solution with no undominated node.
pub trait Constructive: Send + Sync {
    /// Builds a feasible solution starting from `solution`.
    fn construct<R: Rng>(&self, solution: Solution, rng: &mut R) -> Solution;

    /// Repairs a possibly infeasible solution.
    ///
    /// The default is the same as [`construct`](Self::construct).
    fn reconstruct<R: Rng>(&self, solution: Solution, rng: &mut R) -> Solution {
        self.construct(solution, rng)
    }
}
