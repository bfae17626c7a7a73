//! Bounded best-first solution pool.

use crate::solution::Solution;

/// Solutions ordered by ascending score, at most `capacity` of them.
///
/// Solutions with an identical chosen set are stored once. Among equal
/// scores, earlier insertions rank first.
#[derive(Debug, Clone)]
pub struct SolutionPool {
    capacity: usize,
    solutions: Vec<Solution>,
}

impl SolutionPool {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "SolutionPool capacity must be positive");
        Self {
            capacity,
            solutions: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Best (lowest score) solution.
    pub fn best(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    /// Worst (highest score) solution.
    pub fn worst(&self) -> Option<&Solution> {
        self.solutions.last()
    }

    /// Whether a solution with the same chosen set is stored.
    pub fn contains(&self, solution: &Solution) -> bool {
        self.solutions.contains(solution)
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    /// Solutions in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    /// Inserts `solution` if there is room, or if it is strictly better than
    /// the worst member, which is then evicted. Returns whether it was kept.
    pub fn insert(&mut self, solution: Solution) -> bool {
        if self.contains(&solution) {
            return false;
        }
        if self.solutions.len() >= self.capacity {
            match self.solutions.last() {
                Some(worst) if solution.score() < worst.score() => {
                    log::debug!(
                        "pool full: evicting score {} for {}",
                        worst.score(),
                        solution.score()
                    );
                    self.solutions.pop();
                }
                _ => return false,
            }
        }
        let score = solution.score();
        let at = self.solutions.partition_point(|s| s.score() <= score);
        self.solutions.insert(at, solution);
        true
    }

    /// Consumes the pool, returning its solutions best first.
    pub fn into_ranked(self) -> Vec<Solution> {
        self.solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use std::sync::Arc;

    fn k4_solutions() -> (Arc<Instance>, Vec<Solution>) {
        let inst = Arc::new(
            Instance::from_edges("k4", 4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
                .unwrap(),
        );
        let with = |nodes: &[usize]| {
            let mut sol = Solution::new(&inst);
            for &node in nodes {
                sol.add_node(node);
            }
            sol
        };
        let sols = vec![with(&[0, 1, 2]), with(&[0]), with(&[1, 2]), with(&[3])];
        (inst, sols)
    }

    #[test]
    fn test_ranked_by_score() {
        let (_inst, sols) = k4_solutions();
        let mut pool = SolutionPool::new(10);
        for sol in sols {
            assert!(pool.insert(sol));
        }
        let scores: Vec<f64> = pool.iter().map(|s| s.score()).collect();
        assert_eq!(scores, vec![1.0, 1.0, 2.0, 3.0]);
        // Stable among equal scores.
        assert_eq!(pool.best().unwrap().chosen().to_vec(), vec![0]);
        let ranked = pool.into_ranked();
        assert_eq!(ranked[1].chosen().to_vec(), vec![3]);
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let (_inst, sols) = k4_solutions();
        let mut pool = SolutionPool::new(10);
        assert!(pool.insert(sols[1].clone()));
        assert!(!pool.insert(sols[1].clone()));
        assert_eq!(pool.len(), 1);
        assert!(pool.contains(&sols[1]));
        assert!(!pool.contains(&sols[3]));
    }

    #[test]
    fn test_full_pool_evicts_worst() {
        let (_inst, sols) = k4_solutions();
        let mut pool = SolutionPool::new(2);
        assert!(pool.insert(sols[0].clone())); // 3
        assert!(pool.insert(sols[2].clone())); // 2
        assert_eq!(pool.worst().unwrap().score(), 3.0);

        assert!(pool.insert(sols[1].clone())); // 1 evicts 3
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.worst().unwrap().score(), 2.0);

        // Equal to the worst is not strictly better.
        let mut two = sols[2].clone();
        two.remove_node(2);
        two.add_node(3);
        assert_eq!(two.score(), 2.0);
        assert!(!pool.insert(two));
        assert_eq!(pool.capacity(), 2);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        SolutionPool::new(0);
    }
}
