//! Drivers combining independent tabu runs with path relinking.
//!
//! - [`MultiStart`]: independent tabu searches from different seeds,
//!   optionally in parallel.
//! - [`TabuRelinkRunner`]: a reference set seeded by [`MultiStart`] and
//!   improved by relinking newly admitted solutions until nothing new
//!   enters.

mod config;
mod runner;

pub use config::HybridConfig;
pub use runner::{HybridResult, MultiStart, TabuRelinkRunner};
