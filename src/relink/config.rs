//! Path relinking configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DomsetError;

/// Configuration parameters for path relinking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelinkConfig {
    /// Maximum number of solutions harvested from a single walk.
    pub pool_capacity: usize,
}

impl Default for RelinkConfig {
    fn default() -> Self {
        Self {
            pool_capacity: 1000,
        }
    }
}

impl RelinkConfig {
    /// Sets the pool capacity.
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<(), DomsetError> {
        if self.pool_capacity == 0 {
            return Err(DomsetError::config("pool_capacity must be positive"));
        }
        Ok(())
    }
}
