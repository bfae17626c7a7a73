//! Incrementally maintained dominating-set solution.
//!
//! A [`Solution`] tracks, for every node, how many times it is dominated
//! (itself chosen, plus each chosen neighbour). The set of undominated
//! ("unobserved") nodes and the cached score are kept in lockstep with those
//! counters by the only two mutation entry points, [`Solution::add_node`] and
//! [`Solution::remove_node`], each O(degree).
//!
//! Infeasibility is data: an infeasible solution scores [`INFEASIBLE`].

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::instance::Instance;
use crate::node_set::NodeSet;

/// Score of a solution that leaves at least one node undominated.
pub const INFEASIBLE: f64 = f64::INFINITY;

/// Score of a solution with `chosen` selected nodes and `unobserved`
/// undominated nodes.
#[inline]
pub fn score_of(chosen: usize, unobserved: usize) -> f64 {
    if unobserved == 0 {
        chosen as f64
    } else {
        INFEASIBLE
    }
}

/// A (possibly infeasible) selection of nodes over an [`Instance`].
///
/// `Clone` is a deep copy of all mutable state; the instance itself is
/// shared.
#[derive(Debug, Clone)]
pub struct Solution {
    instance: Arc<Instance>,
    chosen: NodeSet,
    domination: Vec<u32>,
    unobserved: NodeSet,
    score: f64,
    last_added: Vec<u64>,
    last_removed: Vec<u64>,
}

impl Solution {
    /// Creates a solution seeded with the instance's reference solution
    /// (every support node chosen).
    pub fn new(instance: &Arc<Instance>) -> Self {
        let seed = instance.reference();
        let n = instance.node_count();
        Self {
            instance: Arc::clone(instance),
            chosen: seed.chosen.clone(),
            domination: seed.domination.clone(),
            unobserved: seed.unobserved.clone(),
            score: score_of(seed.chosen.len(), seed.unobserved.len()),
            last_added: vec![0; n],
            last_removed: vec![0; n],
        }
    }

    /// Creates a solution with nothing chosen, bypassing the reference seed.
    pub fn empty(instance: &Arc<Instance>) -> Self {
        let n = instance.node_count();
        Self {
            instance: Arc::clone(instance),
            chosen: NodeSet::new(n),
            domination: vec![0; n],
            unobserved: NodeSet::full(n),
            score: score_of(0, n),
            last_added: vec![0; n],
            last_removed: vec![0; n],
        }
    }

    pub fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    /// Cached score: `|chosen|` when feasible, [`INFEASIBLE`] otherwise.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// `true` when every node is dominated.
    #[inline]
    pub fn is_covered(&self) -> bool {
        self.unobserved.is_empty()
    }

    pub fn chosen(&self) -> &NodeSet {
        &self.chosen
    }

    pub fn unobserved(&self) -> &NodeSet {
        &self.unobserved
    }

    /// Number of domination incidences of `node`.
    #[inline]
    pub fn domination(&self, node: usize) -> u32 {
        self.domination[node]
    }

    /// Iteration at which `node` last entered the solution (0 if never or
    /// if it has since been removed).
    #[inline]
    pub fn last_added(&self, node: usize) -> u64 {
        self.last_added[node]
    }

    /// Iteration at which `node` last left the solution (0 if never or if it
    /// has since been re-added).
    #[inline]
    pub fn last_removed(&self, node: usize) -> u64 {
        self.last_removed[node]
    }

    /// Chooses `node`.
    ///
    /// # Panics
    /// Panics if `node` is already chosen.
    pub fn add_node(&mut self, node: usize) {
        assert!(
            !self.chosen.contains(node),
            "add_node: node {node} is already in the solution"
        );

        self.chosen.insert(node);
        self.domination[node] += 1;
        self.unobserved.remove(node);
        for &neighbor in self.instance.neighbors(node) {
            self.domination[neighbor] += 1;
            self.unobserved.remove(neighbor);
        }
        self.score = score_of(self.chosen.len(), self.unobserved.len());
    }

    /// Chooses `node`, recording `iteration` for long-term memory.
    pub fn add_node_at(&mut self, node: usize, iteration: u64) {
        self.last_added[node] = iteration;
        self.last_removed[node] = 0;
        self.add_node(node);
    }

    /// Drops `node`. The result may be infeasible.
    ///
    /// # Panics
    /// Panics if `node` is not chosen or is not configurable.
    pub fn remove_node(&mut self, node: usize) {
        assert!(
            self.chosen.contains(node),
            "remove_node: node {node} is not in the solution"
        );
        assert!(
            self.instance.is_configurable(node),
            "remove_node: node {node} is not configurable"
        );

        self.chosen.remove(node);
        self.domination[node] -= 1;
        if self.domination[node] == 0 {
            self.unobserved.insert(node);
        }
        for &neighbor in self.instance.neighbors(node) {
            self.domination[neighbor] -= 1;
            if self.domination[neighbor] == 0 {
                self.unobserved.insert(neighbor);
            }
        }
        self.score = score_of(self.chosen.len(), self.unobserved.len());
    }

    /// Drops `node`, recording `iteration` for long-term memory.
    pub fn remove_node_at(&mut self, node: usize, iteration: u64) {
        self.last_added[node] = 0;
        self.last_removed[node] = iteration;
        self.remove_node(node);
    }

    /// Whether dropping `node` would keep it and all its neighbours
    /// dominated. Does not look at the rest of the graph.
    pub fn is_covered_if_removed(&self, node: usize) -> bool {
        self.domination[node] != 1
            && self
                .instance
                .neighbors(node)
                .iter()
                .all(|&neighbor| self.domination[neighbor] != 1)
    }

    /// Score rebuilt from scratch out of the chosen set.
    ///
    /// Always equal to [`score`](Self::score); use it to validate the
    /// incremental bookkeeping.
    pub fn recalculate_score(&self) -> f64 {
        let mut fresh = Solution::empty(&self.instance);
        for node in self.chosen.iter() {
            fresh.add_node(node);
        }
        fresh.score()
    }

    /// Configurable nodes not yet chosen.
    pub fn addable_nodes(&self) -> NodeSet {
        self.instance.configurable_nodes().difference(&self.chosen)
    }

    /// Chosen nodes that may be dropped.
    pub fn removable_nodes(&self) -> NodeSet {
        self.instance.configurable_nodes().intersection(&self.chosen)
    }

    /// Neighbours of `node` that are not chosen and are dominated at most
    /// once.
    pub fn adjacent_not_dominated(&self, node: usize) -> u64 {
        self.instance
            .neighbors(node)
            .iter()
            .filter(|&&n| !self.chosen.contains(n) && self.domination[n] <= 1)
            .count() as u64
    }

    /// Sum of the domination counts of the neighbours of `node`.
    pub fn neighbor_domination(&self, node: usize) -> u64 {
        self.instance
            .neighbors(node)
            .iter()
            .map(|&n| u64::from(self.domination[n]))
            .sum()
    }

    /// `true` if `self` is feasible and strictly smaller than `other`.
    pub fn is_better_than(&self, other: &Solution) -> bool {
        self.score < other.score
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance) && self.chosen == other.chosen
    }
}

impl Eq for Solution {}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chosen.hash(state);
    }
}
