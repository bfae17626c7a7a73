//! Constructive collaborators: turn a partial solution into a feasible one.
//!
//! - [`RandomConstructive`]: repeatedly adds a random undominated node.
//! - [`GreedyConstructive`]: repeatedly adds the node that dominates the most
//!   undominated nodes.

mod greedy;
mod random;
mod types;

pub use greedy::GreedyConstructive;
pub use random::RandomConstructive;
pub use types::Constructive;
