//! Move representation and cost evaluation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::solution::{score_of, Solution, INFEASIBLE};

/// How the primary cost of a move is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Evaluation {
    /// Clone the solution, apply the move and read the score. O(n).
    Full,
    /// Derive the new unobserved count from domination counters.
    /// O(degree).
    #[default]
    Incremental,
}

/// Node statistics captured when a move is generated.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMove {
    /// Target node.
    pub node: usize,
    /// Degree of the target node.
    pub degree: usize,
    /// Iteration at which the node last entered the solution.
    pub last_added: u64,
    /// Iteration at which the node last left the solution.
    pub last_removed: u64,
    /// Neighbours that are not chosen and dominated at most once.
    pub adjacent_not_dominated: u64,
    /// Sum of the neighbours' domination counts.
    pub neighbor_domination: u64,
    /// Node count of the instance.
    pub total_nodes: usize,
    /// Primary cost: `+1` / `-1` if the result is feasible, else
    /// [`INFEASIBLE`].
    pub value: f64,
}

impl NodeMove {
    fn capture(solution: &Solution, node: usize) -> Self {
        Self {
            node,
            degree: solution.instance().degree(node),
            last_added: solution.last_added(node),
            last_removed: solution.last_removed(node),
            adjacent_not_dominated: solution.adjacent_not_dominated(node),
            neighbor_domination: solution.neighbor_domination(node),
            total_nodes: solution.instance().node_count(),
            value: INFEASIBLE,
        }
    }
}

/// A candidate change to a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum Move {
    /// Choose a configurable node that is not chosen.
    Add(NodeMove),
    /// Drop a chosen configurable node.
    Drop(NodeMove),
}

impl Move {
    /// Builds an Add move for `node` and evaluates its cost.
    ///
    /// # Panics
    /// Panics if `node` is already chosen.
    pub fn add(solution: &Solution, node: usize, evaluation: Evaluation) -> Self {
        assert!(
            !solution.chosen().contains(node),
            "Move::add: node {node} is already in the solution"
        );
        let mut data = NodeMove::capture(solution, node);
        data.value = match evaluation {
            Evaluation::Full => Self::full_cost(solution, 1.0, |s| s.add_node(node)),
            Evaluation::Incremental => incremental_add_cost(solution, node),
        };
        Move::Add(data)
    }

    /// Builds a Drop move for `node` and evaluates its cost.
    ///
    /// # Panics
    /// Panics if `node` is not chosen.
    pub fn drop(solution: &Solution, node: usize, evaluation: Evaluation) -> Self {
        assert!(
            solution.chosen().contains(node),
            "Move::drop: node {node} is not in the solution"
        );
        let mut data = NodeMove::capture(solution, node);
        data.value = match evaluation {
            Evaluation::Full => Self::full_cost(solution, -1.0, |s| s.remove_node(node)),
            Evaluation::Incremental => incremental_drop_cost(solution, node),
        };
        Move::Drop(data)
    }

    fn full_cost(solution: &Solution, delta: f64, apply: impl FnOnce(&mut Solution)) -> f64 {
        let mut copy = solution.clone();
        apply(&mut copy);
        if copy.score() == INFEASIBLE {
            INFEASIBLE
        } else {
            delta
        }
    }

    /// Captured node statistics.
    pub fn data(&self) -> &NodeMove {
        match self {
            Move::Add(data) | Move::Drop(data) => data,
        }
    }

    #[inline]
    pub fn node(&self) -> usize {
        self.data().node
    }

    /// Primary cost of the move.
    #[inline]
    pub fn value(&self) -> f64 {
        self.data().value
    }

    pub fn is_add(&self) -> bool {
        matches!(self, Move::Add(_))
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, Move::Drop(_))
    }

    /// Tie-break objective; lower is better.
    ///
    /// - Add: `total_nodes - adjacent_not_dominated`, or the primary cost
    ///   when infeasibility is allowed and the add restores feasibility.
    /// - Drop: `-neighbor_domination` when the drop stays feasible or
    ///   infeasibility is allowed, otherwise the primary cost
    ///   ([`INFEASIBLE`]).
    ///
    /// With long-term memory, Add moves are rewarded by the number of
    /// iterations their node has been out of the solution.
    pub fn secondary_value(
        &self,
        iteration: u64,
        long_term_memory: bool,
        allow_infeasible: bool,
    ) -> f64 {
        match self {
            Move::Add(m) => {
                let base = if allow_infeasible && m.value == 1.0 {
                    m.value
                } else {
                    (m.total_nodes as u64 - m.adjacent_not_dominated) as f64
                };
                if long_term_memory {
                    base - iteration.saturating_sub(m.last_removed) as f64
                } else {
                    base
                }
            }
            Move::Drop(m) => {
                if m.value == -1.0 || allow_infeasible {
                    -(m.neighbor_domination as f64)
                } else {
                    m.value
                }
            }
        }
    }

    /// Applies the move, stamping the node with `iteration`.
    pub fn apply(&self, solution: &mut Solution, iteration: u64) {
        match self {
            Move::Add(m) => solution.add_node_at(m.node, iteration),
            Move::Drop(m) => solution.remove_node_at(m.node, iteration),
        }
    }
}

fn incremental_add_cost(solution: &Solution, node: usize) -> f64 {
    if solution.is_covered() {
        return 1.0;
    }

    let mut unobserved = solution.unobserved().len();
    for &neighbor in solution.instance().neighbors(node) {
        if solution.domination(neighbor) == 0 {
            unobserved -= 1;
        }
    }
    if solution.domination(node) == 0 {
        unobserved -= 1;
    }

    if score_of(solution.chosen().len() + 1, unobserved) == INFEASIBLE {
        INFEASIBLE
    } else {
        1.0
    }
}

fn incremental_drop_cost(solution: &Solution, node: usize) -> f64 {
    let mut unobserved = solution.unobserved().len();
    if solution.domination(node) == 1 {
        unobserved += 1;
    }

    // Neighbours only matter while the result could still be feasible.
    if unobserved == 0 {
        for &neighbor in solution.instance().neighbors(node) {
            if solution.domination(neighbor) == 1 {
                unobserved += 1;
            }
        }
    }

    if score_of(solution.chosen().len() - 1, unobserved) == INFEASIBLE {
        INFEASIBLE
    } else {
        -1.0
    }
}
