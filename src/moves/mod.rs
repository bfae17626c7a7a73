//! Add/Drop moves and the neighbourhood that enumerates them.
//!
//! A [`Move`] is a short-lived snapshot of one candidate change to a
//! [`Solution`](crate::solution::Solution): it records the target node, the
//! local statistics the tie-break objective needs, and the primary cost
//! (change in score). The primary cost is computed either by applying the
//! move to a copy ([`Evaluation::Full`]) or from the domination counters in
//! O(degree) ([`Evaluation::Incremental`]); both always agree.

mod neighborhood;
mod types;

pub use neighborhood::explore;
pub use types::{Evaluation, Move, NodeMove};
