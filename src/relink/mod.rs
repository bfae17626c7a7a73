//! Path relinking between pairs of feasible solutions.
//!
//! A walk transforms a copy of the origin into the reference one node at a
//! time. Every intermediate solution is repaired, locally improved and kept
//! in a bounded best-first [`SolutionPool`].
//!
//! # References
//!
//! - Glover, F., Laguna, M., Martí, R. (2000). "Fundamentals of Scatter
//!   Search and Path Relinking", *Control and Cybernetics* 29(3), 653-684.

mod config;
mod pool;
mod runner;

pub use config::RelinkConfig;
pub use pool::SolutionPool;
pub use runner::PathRelinking;
