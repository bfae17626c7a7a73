//! Expiring short-term memory.

use std::collections::HashMap;
use std::hash::Hash;

/// Tabu list keyed by move attribute (node id by default).
///
/// An entry added at iteration `t` with multiplier `m` expires at
/// `t + tenure * m`; [`check_expiration`](Self::check_expiration) purges
/// every entry whose expiration has been reached.
#[derive(Debug, Clone)]
pub struct TabuStorage<K = usize> {
    expirations: HashMap<K, u64>,
    tenure: u64,
}

impl<K: Hash + Eq> TabuStorage<K> {
    /// Creates an empty list with the given base tenure (in iterations).
    pub fn new(tenure: u64) -> Self {
        Self {
            expirations: HashMap::new(),
            tenure,
        }
    }

    pub fn tenure(&self) -> u64 {
        self.tenure
    }

    /// Whether `key` is currently tabu.
    pub fn contains(&self, key: &K) -> bool {
        self.expirations.contains_key(key)
    }

    /// Makes `key` tabu until `iteration + tenure * multiplier`, replacing
    /// any previous expiration.
    pub fn add(&mut self, key: K, iteration: u64, multiplier: u64) {
        let expiration = iteration.saturating_add(self.tenure.saturating_mul(multiplier));
        self.expirations.insert(key, expiration);
    }

    /// Removes every entry that expires at or before `iteration`.
    pub fn check_expiration(&mut self, iteration: u64) {
        self.expirations.retain(|_, expiration| *expiration > iteration);
    }

    pub fn len(&self) -> usize {
        self.expirations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expirations.is_empty()
    }

    pub fn clear(&mut self) {
        self.expirations.clear();
    }
}
