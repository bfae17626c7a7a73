//! Add/Drop neighbourhood.

use super::types::{Evaluation, Move};
use crate::solution::Solution;

/// Enumerates every legal move of `solution`.
///
/// One Drop per chosen node that is not a support node, followed by one Add
/// per addable node; each group is in ascending node order, so callers
/// that keep the first of equally ranked moves are deterministic.
pub fn explore(solution: &Solution, evaluation: Evaluation) -> Vec<Move> {
    let instance = solution.instance();
    let addable = solution.addable_nodes();
    let mut moves = Vec::with_capacity(solution.chosen().len() + addable.len());

    moves.extend(
        solution
            .chosen()
            .iter()
            .filter(|&node| !instance.is_support(node))
            .map(|node| Move::drop(solution, node, evaluation)),
    );

    for node in addable.iter() {
        debug_assert!(!instance.is_leaf(node), "leaf {node} is addable");
        moves.push(Move::add(solution, node, evaluation));
    }

    moves
}
