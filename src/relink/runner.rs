//! Path relinking engine.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;

use super::config::RelinkConfig;
use super::pool::SolutionPool;
use crate::construct::{Constructive, GreedyConstructive};
use crate::control::TimeBudget;
use crate::improve::{Improver, RemoveRedundant};
use crate::solution::Solution;

/// Solution combinator walking from an origin towards a reference solution.
///
/// `C` repairs infeasible intermediate solutions, `I` strips what the repair
/// made redundant.
#[derive(Debug, Clone)]
pub struct PathRelinking<C, I> {
    reconstructive: C,
    improver: I,
    config: RelinkConfig,
}

impl Default for PathRelinking<GreedyConstructive, RemoveRedundant> {
    fn default() -> Self {
        Self::new(GreedyConstructive, RemoveRedundant, RelinkConfig::default())
    }
}

impl<C: Constructive, I: Improver> PathRelinking<C, I> {
    /// # Panics
    /// Panics if `config` fails [`RelinkConfig::validate`].
    pub fn new(reconstructive: C, improver: I, config: RelinkConfig) -> Self {
        config.validate().expect("invalid RelinkConfig");
        Self {
            reconstructive,
            improver,
            config,
        }
    }

    pub fn config(&self) -> &RelinkConfig {
        &self.config
    }

    /// Walks a copy of `origin` towards `reference`, calling `on_step` after
    /// every removal, addition or swap, and returns the final copy.
    ///
    /// Only configurable nodes move: on return the copy's removable nodes
    /// equal those of `reference`.
    ///
    /// # Panics
    /// Panics if the two solutions belong to different instances.
    pub fn walk<F>(&self, origin: &Solution, reference: &Solution, mut on_step: F) -> Solution
    where
        F: FnMut(&Solution),
    {
        assert!(
            Arc::ptr_eq(origin.instance(), reference.instance()),
            "PathRelinking: origin and reference belong to different instances"
        );

        let in_origin = origin.removable_nodes();
        let in_reference = reference.removable_nodes();
        let mut to_add = in_reference.difference(&in_origin);
        let mut to_remove = in_origin.difference(&in_reference);

        let mut current = origin.clone();

        while to_remove.len() > to_add.len() {
            if let Some(node) = to_remove.pop_first() {
                current.remove_node(node);
                on_step(&current);
            }
        }

        while to_add.len() > to_remove.len() {
            if let Some(node) = to_add.pop_first() {
                current.add_node(node);
                on_step(&current);
            }
        }

        while let (Some(removed), Some(added)) = (to_remove.pop_first(), to_add.pop_first()) {
            current.remove_node(removed);
            current.add_node(added);
            on_step(&current);
        }

        debug_assert!(to_add.is_empty() && to_remove.is_empty());
        current
    }

    /// Relinks `origin` to `reference`, returning the harvested solutions
    /// best first.
    ///
    /// Every intermediate solution is cloned, repaired, improved and offered
    /// to a pool of [`RelinkConfig::pool_capacity`] solutions.
    pub fn relink<R: Rng>(
        &self,
        origin: &Solution,
        reference: &Solution,
        rng: &mut R,
    ) -> Vec<Solution> {
        let mut pool = SolutionPool::new(self.config.pool_capacity);
        self.walk(origin, reference, |step| {
            let repaired = self.reconstructive.reconstruct(step.clone(), &mut *rng);
            pool.insert(self.improver.improve(repaired));
        });
        pool.into_ranked()
    }

    /// Relinks every new solution to every solution of the current set and
    /// gathers the distinct harvested solutions.
    ///
    /// The time budget is polled before each pair; once it is up the
    /// solutions gathered so far are returned.
    pub fn combine<R, B>(
        &self,
        current_set: &[Solution],
        new_solutions: &[Solution],
        budget: &B,
        rng: &mut R,
    ) -> Vec<Solution>
    where
        R: Rng,
        B: TimeBudget + ?Sized,
    {
        let mut seen: HashSet<Solution> = HashSet::new();
        let mut combined: Vec<Solution> = Vec::new();
        for solution in new_solutions {
            for reference in current_set {
                if budget.is_time_up() {
                    log::warn!(
                        "path relinking stopped by time budget with {} solutions",
                        combined.len()
                    );
                    return combined;
                }
                for harvested in self.relink(solution, reference, &mut *rng) {
                    if seen.insert(harvested.clone()) {
                        combined.push(harvested);
                    }
                }
            }
        }
        combined
    }
}
