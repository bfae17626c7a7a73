//! Error types.

use thiserror::Error;

/// Errors raised while building instances or validating configuration.
///
/// Infeasible solutions are not errors; they carry the
/// [`INFEASIBLE`](crate::solution::INFEASIBLE) score instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomsetError {
    /// The graph is too small to be a meaningful instance.
    #[error("instance '{name}' has {nodes} nodes, at least 3 are required")]
    TooFewNodes { name: String, nodes: usize },

    /// An edge references a node id outside `0..nodes`.
    #[error("edge endpoint {node} is out of range for {nodes} nodes")]
    NodeOutOfRange { node: usize, nodes: usize },

    /// A hyperparameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DomsetError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        DomsetError::InvalidConfig(message.into())
    }
}
