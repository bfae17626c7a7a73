//! Hybrid driver configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DomsetError;
use crate::relink::RelinkConfig;
use crate::tabu::TabuConfig;

/// Configuration for [`MultiStart`](super::MultiStart) and
/// [`TabuRelinkRunner`](super::TabuRelinkRunner).
///
/// # Examples
///
/// ```
/// use u_domset::hybrid::HybridConfig;
/// use u_domset::tabu::TabuConfig;
///
/// let config = HybridConfig::default()
///     .with_population_size(4)
///     .with_tabu(TabuConfig::default().with_long_term_memory(true))
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HybridConfig {
    /// Number of independent tabu runs.
    pub population_size: usize,
    /// Maximum size of the reference set.
    pub reference_set_size: usize,
    /// Settings of every tabu run; its seed is replaced per run.
    pub tabu: TabuConfig,
    /// Path relinking settings.
    pub relink: RelinkConfig,
    /// Base seed: run `i` uses `seed + i` (None for 42).
    pub seed: Option<u64>,
    /// Run the tabu searches on the rayon pool. Ignored without the
    /// `parallel` feature.
    pub parallel: bool,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            reference_set_size: 10,
            tabu: TabuConfig::default(),
            relink: RelinkConfig::default(),
            seed: None,
            parallel: true,
        }
    }
}

impl HybridConfig {
    /// Sets the number of independent tabu runs.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the reference set size.
    pub fn with_reference_set_size(mut self, n: usize) -> Self {
        self.reference_set_size = n;
        self
    }

    /// Sets the tabu search settings.
    pub fn with_tabu(mut self, tabu: TabuConfig) -> Self {
        self.tabu = tabu;
        self
    }

    /// Sets the path relinking settings.
    pub fn with_relink(mut self, relink: RelinkConfig) -> Self {
        self.relink = relink;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel tabu runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates this configuration and the nested ones.
    pub fn validate(&self) -> Result<(), DomsetError> {
        if self.population_size == 0 {
            return Err(DomsetError::config("population_size must be positive"));
        }
        if self.reference_set_size == 0 {
            return Err(DomsetError::config("reference_set_size must be positive"));
        }
        self.tabu.validate()?;
        self.relink.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HybridConfig::default();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.reference_set_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_sizes() {
        assert!(HybridConfig::default()
            .with_population_size(0)
            .validate()
            .is_err());
        assert!(HybridConfig::default()
            .with_reference_set_size(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_nested() {
        let config = HybridConfig::default()
            .with_relink(RelinkConfig::default().with_pool_capacity(0));
        assert!(config.validate().is_err());
        let config =
            HybridConfig::default().with_tabu(TabuConfig::default().with_oscillation_rate(2.0));
        assert!(config.validate().is_err());
    }
}
