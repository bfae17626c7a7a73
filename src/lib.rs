//! Tabu search and path relinking for the minimum dominating set problem.
//!
//! Given an undirected graph, choose as few nodes as possible so that every
//! node is chosen or adjacent to a chosen node. The crate provides:
//!
//! - **Instances**: adjacency plus the leaf / support / configurable node
//!   classification. Support nodes (neighbours of leaves) are always chosen,
//!   leaves never are.
//! - **Solutions**: incrementally maintained domination counters, so a move
//!   is evaluated in `O(degree)`.
//! - **Tabu Search (TS)**: Add/Drop neighbourhood with aspiration, optional
//!   long-term memory and strategic oscillation.
//! - **Path Relinking (PR)**: walks between pairs of solutions, harvesting
//!   repaired and improved intermediate solutions.
//! - **Hybrid drivers**: multi-start tabu search (parallel with the
//!   `parallel` feature) and tabu search followed by relinking over a
//!   reference set.
//!
//! Infeasibility is data, not an error: an uncovered solution scores
//! [`solution::INFEASIBLE`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use u_domset::instance::Instance;
//! use u_domset::tabu::{TabuConfig, TabuRunner};
//!
//! // Cycle of 9 nodes: 3 nodes dominate it.
//! let edges: Vec<(usize, usize)> = (0..9).map(|i| (i, (i + 1) % 9)).collect();
//! let instance = Arc::new(Instance::from_edges("c9", 9, &edges).unwrap());
//! let result = TabuRunner::run(&instance, &TabuConfig::default().with_seed(1));
//! assert!(result.best.is_covered());
//! assert!(result.best_score >= 3.0);
//! ```

pub mod construct;
pub mod control;
pub mod error;
pub mod hybrid;
pub mod improve;
pub mod instance;
pub mod moves;
pub mod node_set;
pub mod relink;
pub mod solution;
pub mod tabu;

pub use error::DomsetError;
