//! Tabu Search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DomsetError;
use crate::moves::Evaluation;

const MIN_TENURE: u64 = 1;
const MIN_ITERATIONS: u64 = 100;
const MIN_OSCILLATION: i64 = 2;

/// Configuration parameters for Tabu Search.
///
/// Tenure and iteration cap are expressed as rates of the instance size and
/// resolved once per run by [`limits`](Self::limits).
///
/// # Examples
///
/// ```
/// use u_domset::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_tenure_rate(0.2)
///     .with_strategic_oscillation(true)
///     .with_seed(7);
/// let limits = config.limits(50);
/// assert_eq!(limits.tenure, 10);
/// assert_eq!(limits.max_iterations, 500);
/// assert_eq!(limits.oscillation_budget, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuConfig {
    /// Tenure as a fraction of the node count.
    pub tenure_rate: f64,
    /// Iteration cap as a multiple of the node count.
    pub max_iterations_rate: f64,
    /// Bias Add moves towards long-excluded nodes when nothing improves.
    pub long_term_memory: bool,
    /// Periodically tolerate infeasible solutions.
    pub strategic_oscillation: bool,
    /// Oscillation budget as a fraction of the iteration cap.
    pub oscillation_rate: f64,
    /// Move cost evaluation strategy.
    pub evaluation: Evaluation,
    /// Random seed for the constructive phase (None for 42).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tenure_rate: 0.1,
            max_iterations_rate: 10.0,
            long_term_memory: false,
            strategic_oscillation: false,
            oscillation_rate: 0.1,
            evaluation: Evaluation::Incremental,
            seed: None,
        }
    }
}

/// Per-run constants derived from a [`TabuConfig`] and the instance size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Base tabu tenure in iterations.
    pub tenure: u64,
    /// Last iteration executed.
    pub max_iterations: u64,
    /// Initial strategic oscillation budget; 0 disables oscillation.
    pub oscillation_budget: i64,
}

impl TabuConfig {
    /// Sets the tenure rate.
    pub fn with_tenure_rate(mut self, rate: f64) -> Self {
        self.tenure_rate = rate;
        self
    }

    /// Sets the iteration cap rate.
    pub fn with_max_iterations_rate(mut self, rate: f64) -> Self {
        self.max_iterations_rate = rate;
        self
    }

    /// Enables or disables long-term memory.
    pub fn with_long_term_memory(mut self, enabled: bool) -> Self {
        self.long_term_memory = enabled;
        self
    }

    /// Enables or disables strategic oscillation.
    pub fn with_strategic_oscillation(mut self, enabled: bool) -> Self {
        self.strategic_oscillation = enabled;
        self
    }

    /// Sets the oscillation rate.
    pub fn with_oscillation_rate(mut self, rate: f64) -> Self {
        self.oscillation_rate = rate;
        self
    }

    /// Sets the move evaluation strategy.
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolves tenure, iteration cap and oscillation budget for an
    /// instance with `node_count` nodes.
    pub fn limits(&self, node_count: usize) -> SearchLimits {
        let n = node_count as f64;
        let tenure = ((n * self.tenure_rate).round() as u64).max(MIN_TENURE);
        let max_iterations = ((n * self.max_iterations_rate).round() as u64).max(MIN_ITERATIONS);
        let oscillation_budget = if self.strategic_oscillation {
            ((max_iterations as f64 * self.oscillation_rate).round() as i64).max(MIN_OSCILLATION)
        } else {
            0
        };
        SearchLimits {
            tenure,
            max_iterations,
            oscillation_budget,
        }
    }

    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<(), DomsetError> {
        if !(self.tenure_rate > 0.0 && self.tenure_rate.is_finite()) {
            return Err(DomsetError::config(format!(
                "tenure_rate must be positive, got {}",
                self.tenure_rate
            )));
        }
        if !(self.max_iterations_rate > 0.0 && self.max_iterations_rate.is_finite()) {
            return Err(DomsetError::config(format!(
                "max_iterations_rate must be positive, got {}",
                self.max_iterations_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.oscillation_rate) {
            return Err(DomsetError::config(format!(
                "oscillation_rate must be in [0, 1], got {}",
                self.oscillation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TabuConfig::default();
        assert_eq!(config.tenure_rate, 0.1);
        assert_eq!(config.max_iterations_rate, 10.0);
        assert!(!config.long_term_memory);
        assert!(!config.strategic_oscillation);
        assert_eq!(config.evaluation, Evaluation::Incremental);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_limits_from_rates() {
        let limits = TabuConfig::default().limits(200);
        assert_eq!(
            limits,
            SearchLimits {
                tenure: 20,
                max_iterations: 2000,
                oscillation_budget: 0,
            }
        );
    }

    #[test]
    fn test_limits_floors() {
        let config = TabuConfig::default()
            .with_tenure_rate(0.01)
            .with_max_iterations_rate(1.0)
            .with_strategic_oscillation(true)
            .with_oscillation_rate(0.0);
        let limits = config.limits(5);
        assert_eq!(limits.tenure, 1);
        assert_eq!(limits.max_iterations, 100);
        assert_eq!(limits.oscillation_budget, 2);
    }

    #[test]
    fn test_validate_bad_rates() {
        assert!(TabuConfig::default()
            .with_tenure_rate(0.0)
            .validate()
            .is_err());
        assert!(TabuConfig::default()
            .with_max_iterations_rate(-1.0)
            .validate()
            .is_err());
        assert!(TabuConfig::default()
            .with_tenure_rate(f64::NAN)
            .validate()
            .is_err());
        let err = TabuConfig::default()
            .with_oscillation_rate(1.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, DomsetError::InvalidConfig(_)));
    }
}
