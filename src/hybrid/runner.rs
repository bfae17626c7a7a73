//! Multi-start tabu search and tabu search with path relinking.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::HybridConfig;
use crate::construct::{Constructive, GreedyConstructive, RandomConstructive};
use crate::control::{MetricSink, NoMetrics, TimeBudget, Unlimited};
use crate::improve::RemoveRedundant;
use crate::instance::Instance;
use crate::relink::{PathRelinking, SolutionPool};
use crate::solution::Solution;
use crate::tabu::{TabuResult, TabuRunner};

/// Independent tabu searches from consecutive seeds.
pub struct MultiStart;

impl MultiStart {
    /// Runs `population_size` tabu searches from random constructions.
    ///
    /// # Panics
    /// Panics if `config` fails [`HybridConfig::validate`].
    pub fn run(instance: &Arc<Instance>, config: &HybridConfig) -> Vec<TabuResult> {
        Self::run_with(instance, config, &RandomConstructive, &Unlimited, &NoMetrics)
    }

    /// Runs `population_size` tabu searches; run `i` is seeded with
    /// `seed + i`. Results are ranked by best score, ties in seed order.
    ///
    /// Each run owns its solution and tabu list; only the instance and the
    /// collaborators are shared.
    pub fn run_with<C, B, M>(
        instance: &Arc<Instance>,
        config: &HybridConfig,
        constructive: &C,
        budget: &B,
        sink: &M,
    ) -> Vec<TabuResult>
    where
        C: Constructive,
        B: TimeBudget + ?Sized,
        M: MetricSink + ?Sized,
    {
        config.validate().expect("invalid HybridConfig");

        let base = config.seed.unwrap_or(42);
        let seeds: Vec<u64> = (0..config.population_size as u64)
            .map(|i| base.wrapping_add(i))
            .collect();
        let run_one = |seed: u64| {
            let tabu = config.tabu.clone().with_seed(seed);
            TabuRunner::run_with(instance, &tabu, constructive, budget, sink)
        };

        #[cfg(feature = "parallel")]
        let mut results: Vec<TabuResult> = if config.parallel {
            seeds.par_iter().map(|&seed| run_one(seed)).collect()
        } else {
            seeds.iter().map(|&seed| run_one(seed)).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let mut results: Vec<TabuResult> = seeds.iter().map(|&seed| run_one(seed)).collect();

        results.sort_by(|a, b| a.best_score.total_cmp(&b.best_score));
        results
    }
}

/// Result of a [`TabuRelinkRunner`] run.
#[derive(Debug, Clone)]
pub struct HybridResult {
    /// Best solution of the final reference set.
    pub best: Solution,
    /// Score of the best solution.
    pub best_score: f64,
    /// Final reference set, best first.
    pub reference_set: Vec<Solution>,
    /// Relinking rounds executed.
    pub rounds: usize,
    /// Whether the time budget ended the run.
    pub time_up: bool,
}

/// Forwards only scores that beat every score seen so far, so concurrent
/// runs report one monotone stream.
struct GlobalBest<'a, M: ?Sized> {
    inner: &'a M,
    best: Mutex<f64>,
}

impl<'a, M: MetricSink + ?Sized> GlobalBest<'a, M> {
    fn new(inner: &'a M) -> Self {
        Self {
            inner,
            best: Mutex::new(f64::INFINITY),
        }
    }
}

impl<M: MetricSink + ?Sized> MetricSink for GlobalBest<'_, M> {
    fn best_improved(&self, objective: f64) {
        let mut best = self.best.lock().unwrap_or_else(|p| p.into_inner());
        if objective < *best {
            *best = objective;
            self.inner.best_improved(objective);
        }
    }
}

/// Tabu search followed by path relinking over a reference set.
pub struct TabuRelinkRunner;

impl TabuRelinkRunner {
    /// Runs without a time limit.
    ///
    /// # Panics
    /// Panics if `config` fails [`HybridConfig::validate`].
    pub fn run(instance: &Arc<Instance>, config: &HybridConfig) -> HybridResult {
        Self::run_with(instance, config, &Unlimited, &NoMetrics)
    }

    /// Builds a population with [`MultiStart`], keeps the best distinct
    /// solutions as the reference set, then relinks newly admitted solutions
    /// against the whole set until a round admits nothing or the budget is up.
    ///
    /// A solution is admitted if it is not already present and the set has
    /// room or it beats the worst member.
    pub fn run_with<B, M>(
        instance: &Arc<Instance>,
        config: &HybridConfig,
        budget: &B,
        sink: &M,
    ) -> HybridResult
    where
        B: TimeBudget + ?Sized,
        M: MetricSink + ?Sized,
    {
        config.validate().expect("invalid HybridConfig");

        let sink = GlobalBest::new(sink);
        let relinking =
            PathRelinking::new(GreedyConstructive, RemoveRedundant, config.relink.clone());
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(42));

        let population = MultiStart::run_with(instance, config, &RandomConstructive, budget, &sink);
        let mut reference_set = SolutionPool::new(config.reference_set_size);
        for result in population {
            reference_set.insert(result.best);
        }

        let mut new_solutions = reference_set.as_slice().to_vec();
        let mut rounds = 0;
        while !new_solutions.is_empty() && !budget.is_time_up() {
            rounds += 1;
            let combined =
                relinking.combine(reference_set.as_slice(), &new_solutions, budget, &mut rng);
            let generated = combined.len();

            new_solutions = combined
                .into_iter()
                .filter(|solution| reference_set.insert(solution.clone()))
                .collect();
            new_solutions.retain(|solution| reference_set.contains(solution));

            if let Some(best) = reference_set.best() {
                sink.best_improved(best.score());
            }
            log::info!(
                "relinking round {rounds} on '{}': {generated} generated, {} admitted, best {}",
                instance.name(),
                new_solutions.len(),
                reference_set.best().map_or(f64::INFINITY, Solution::score)
            );
        }

        let time_up = budget.is_time_up();
        let reference_set = reference_set.into_ranked();
        let best = match reference_set.first() {
            Some(best) => best.clone(),
            None => Solution::new(instance),
        };
        HybridResult {
            best_score: best.score(),
            best,
            reference_set,
            rounds,
            time_up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Deadline, ObjectiveTrace};
    use crate::tabu::TabuConfig;
    use rand::Rng;
    use std::sync::atomic::AtomicBool;

    fn random_graph(seed: u64, n: usize, p: f64) -> Arc<Instance> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.random_bool(p) {
                    edges.push((u, v));
                }
            }
        }
        Arc::new(Instance::from_edges(format!("g{seed}"), n, &edges).unwrap())
    }

    fn small_config() -> HybridConfig {
        HybridConfig::default()
            .with_population_size(4)
            .with_reference_set_size(4)
            .with_tabu(TabuConfig::default().with_max_iterations_rate(1.0))
            .with_seed(5)
    }

    #[test]
    fn test_multistart_ranked_and_feasible() {
        let inst = random_graph(1, 40, 0.1);
        let results = MultiStart::run(&inst, &small_config());
        assert_eq!(results.len(), 4);
        for result in &results {
            assert!(result.best.is_covered());
        }
        for window in results.windows(2) {
            assert!(window[0].best_score <= window[1].best_score);
        }
    }

    #[test]
    fn test_multistart_parallel_matches_sequential() {
        let inst = random_graph(2, 40, 0.1);
        let sequential = MultiStart::run(&inst, &small_config().with_parallel(false));
        let parallel = MultiStart::run(&inst, &small_config().with_parallel(true));
        let scores = |r: &[TabuResult]| r.iter().map(|x| x.best_score).collect::<Vec<_>>();
        assert_eq!(scores(&sequential), scores(&parallel));
    }

    #[test]
    fn test_relinking_never_worse_than_population() {
        let inst = random_graph(3, 50, 0.08);
        let config = small_config();
        let population_best = MultiStart::run(&inst, &config)[0].best_score;
        let result = TabuRelinkRunner::run(&inst, &config);
        assert!(result.best.is_covered());
        assert!(result.best_score <= population_best);
        assert!(result.rounds >= 1);
        assert!(!result.time_up);
        assert!(result.reference_set.len() <= 4);
        assert_eq!(result.best, result.reference_set[0]);
    }

    #[test]
    fn test_sink_stream_is_monotone() {
        let inst = random_graph(4, 50, 0.08);
        let trace = ObjectiveTrace::new();
        let result = TabuRelinkRunner::run_with(&inst, &small_config(), &Unlimited, &trace);
        let objectives = trace.objectives();
        assert_eq!(objectives.last().copied(), Some(result.best_score));
        for window in objectives.windows(2) {
            assert!(window[1] < window[0]);
        }
    }

    #[test]
    fn test_time_up_skips_relinking() {
        let inst = random_graph(6, 30, 0.1);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = TabuRelinkRunner::run_with(&inst, &small_config(), &cancel, &NoMetrics);
        assert!(result.time_up);
        assert_eq!(result.rounds, 0);
        // Runs stop before their first iteration but keep their construction.
        assert!(result.best.is_covered());
    }

    #[test]
    fn test_deadline_is_respected() {
        let inst = random_graph(7, 80, 0.05);
        let deadline = Deadline::after_millis(50);
        let result = TabuRelinkRunner::run_with(&inst, &small_config(), &deadline, &NoMetrics);
        assert!(result.best.is_covered());
    }
}
