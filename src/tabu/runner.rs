//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial solution from the reference seed with a
//!    [`Constructive`] collaborator
//! 2. At each iteration:
//!    a. Purge expired tabu entries
//!    b. Enumerate Add/Drop moves; keep those that are not tabu or satisfy
//!       aspiration
//!    c. Apply the admissible move with the lowest secondary value and make
//!       its node tabu
//!    d. Update the best feasible solution and the oscillation budget
//! 3. Terminate at the iteration cap, when the time budget is up, or when no
//!    move is admissible

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{SearchLimits, TabuConfig};
use super::storage::TabuStorage;
use crate::construct::{Constructive, RandomConstructive};
use crate::control::{MetricSink, NoMetrics, TimeBudget, Unlimited};
use crate::instance::Instance;
use crate::moves::{explore, Move};
use crate::solution::Solution;

const DROP_TENURE_MULTIPLIER: u64 = 2;
const ADD_TENURE_MULTIPLIER: u64 = 1;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The iteration cap was reached.
    IterationLimit,
    /// The time budget ran out.
    TimeUp,
    /// Every move was tabu without meeting aspiration, or none existed.
    NoAvailableMoves,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best feasible solution found.
    pub best: Solution,
    /// Score of the best solution.
    pub best_score: f64,
    /// Moves applied.
    pub iterations: u64,
    /// Iteration at which the best solution was found (0 for the initial one).
    pub best_iteration: u64,
    /// Why the loop ended.
    pub stop_reason: StopReason,
    /// Best score before the first iteration and after each one.
    pub cost_history: Vec<f64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search from a random construction with no time limit.
    ///
    /// # Panics
    /// Panics if `config` fails [`TabuConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use u_domset::instance::Instance;
    /// use u_domset::tabu::{TabuConfig, TabuRunner};
    ///
    /// let path = Instance::from_edges("p5", 5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    /// let result = TabuRunner::run(&Arc::new(path), &TabuConfig::default().with_seed(1));
    /// assert_eq!(result.best_score, 2.0);
    /// ```
    pub fn run(instance: &Arc<Instance>, config: &TabuConfig) -> TabuResult {
        Self::run_with(instance, config, &RandomConstructive, &Unlimited, &NoMetrics)
    }

    /// Runs Tabu Search with caller-supplied collaborators.
    ///
    /// The initial solution is `constructive` applied to the reference seed;
    /// it is reported to `sink` before the first iteration.
    pub fn run_with<C, B, M>(
        instance: &Arc<Instance>,
        config: &TabuConfig,
        constructive: &C,
        budget: &B,
        sink: &M,
    ) -> TabuResult
    where
        C: Constructive,
        B: TimeBudget + ?Sized,
        M: MetricSink + ?Sized,
    {
        config.validate().expect("invalid TabuConfig");

        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or(42));
        let initial = constructive.construct(Solution::new(instance), &mut rng);
        sink.best_improved(initial.score());

        let limits = config.limits(instance.node_count());
        Self::search(initial, TabuStorage::new(limits.tenure), config, budget, sink)
    }

    /// Core loop over an owned context: the starting solution and the tabu
    /// list are consumed, nothing is shared with other runs.
    pub fn search<B, M>(
        initial: Solution,
        mut tabu: TabuStorage,
        config: &TabuConfig,
        budget: &B,
        sink: &M,
    ) -> TabuResult
    where
        B: TimeBudget + ?Sized,
        M: MetricSink + ?Sized,
    {
        let limits = config.limits(initial.instance().node_count());
        log::info!(
            "tabu search on '{}': {} nodes, tenure {}, {} iterations, oscillation budget {}",
            initial.instance().name(),
            initial.instance().node_count(),
            tabu.tenure(),
            limits.max_iterations,
            limits.oscillation_budget
        );

        let mut best = initial.clone();
        let mut current = initial;
        let mut best_iteration = 0;
        let mut oscillation = limits.oscillation_budget;
        let mut completed = 0;

        let mut cost_history = vec![best.score()];

        let mut iteration: u64 = 1;
        let stop_reason = loop {
            if budget.is_time_up() {
                break StopReason::TimeUp;
            }

            tabu.check_expiration(iteration);

            let moves = explore(&current, config.evaluation);
            let (available, improving) =
                admissible_moves(moves, current.score(), best.score(), &tabu);

            let long_term_memory = config.long_term_memory && !improving;
            let allow_infeasible = oscillation > 0;

            let Some(chosen) =
                select_best(&available, iteration, long_term_memory, allow_infeasible)
            else {
                break StopReason::NoAvailableMoves;
            };

            chosen.apply(&mut current, iteration);
            let multiplier = if chosen.is_drop() {
                DROP_TENURE_MULTIPLIER
            } else {
                ADD_TENURE_MULTIPLIER
            };
            tabu.add(chosen.node(), iteration, multiplier);
            completed += 1;

            if current.is_covered() && current.is_better_than(&best) {
                best = current.clone();
                best_iteration = iteration;
                sink.best_improved(best.score());
                log::debug!("iteration {iteration}: new best {}", best.score());
            }

            update_oscillation(&mut oscillation, &limits, allow_infeasible, current.is_covered());
            cost_history.push(best.score());

            if iteration >= limits.max_iterations {
                break StopReason::IterationLimit;
            }
            iteration += 1;
        };

        log::info!(
            "tabu search on '{}' finished: score {} at iteration {}, {completed} iterations, {stop_reason:?}",
            best.instance().name(),
            best.score(),
            best_iteration
        );

        TabuResult {
            best_score: best.score(),
            best,
            iterations: completed,
            best_iteration,
            stop_reason,
            cost_history,
        }
    }
}

/// Keeps moves that satisfy aspiration or are not tabu. The flag reports
/// whether any kept move improves.
fn admissible_moves(
    moves: Vec<Move>,
    current_score: f64,
    best_score: f64,
    tabu: &TabuStorage,
) -> (Vec<Move>, bool) {
    let mut improving = false;
    let available = moves
        .into_iter()
        .filter(|mv| {
            if current_score + mv.value() < best_score {
                improving = true;
                true
            } else if !tabu.contains(&mv.node()) {
                if mv.value() < 0.0 {
                    improving = true;
                }
                true
            } else {
                false
            }
        })
        .collect();
    (available, improving)
}

/// First move with the strictly lowest secondary value.
fn select_best(
    moves: &[Move],
    iteration: u64,
    long_term_memory: bool,
    allow_infeasible: bool,
) -> Option<&Move> {
    let mut best: Option<(&Move, f64)> = None;
    for mv in moves {
        let value = mv.secondary_value(iteration, long_term_memory, allow_infeasible);
        match best {
            Some((_, best_value)) if value >= best_value => {}
            _ => best = Some((mv, value)),
        }
    }
    best.map(|(mv, _)| mv)
}

/// Infeasible phase: spend one unit per iteration. Feasible phase: spend one
/// unit per feasible iteration, recharging once `-initial` is reached.
fn update_oscillation(
    budget: &mut i64,
    limits: &SearchLimits,
    allow_infeasible: bool,
    covered: bool,
) {
    if allow_infeasible {
        *budget -= 1;
    } else if covered && limits.oscillation_budget > 0 {
        *budget -= 1;
        if *budget <= -limits.oscillation_budget {
            *budget = limits.oscillation_budget;
        }
    }
}
