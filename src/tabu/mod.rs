//! Tabu Search (TS) for the minimum dominating set problem.
//!
//! The search walks the Add/Drop neighbourhood of a single solution, keeping
//! recently moved nodes in an expiring short-term memory. Three mechanisms
//! layer on top of the basic best-admissible-move rule:
//!
//! - **Aspiration**: a tabu move is admitted if it would beat the best score.
//! - **Long-term memory**: when no improving move exists, Add moves are
//!   biased towards nodes that have been out of the solution the longest.
//! - **Strategic oscillation**: a recurring budget of iterations during which
//!   infeasible solutions are tolerated, alternating with an equally long
//!   feasible phase.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod storage;

pub use config::{SearchLimits, TabuConfig};
pub use runner::{StopReason, TabuResult, TabuRunner};
pub use storage::TabuStorage;
