//! Immutable graph instance and static node classification.
//!
//! Building an [`Instance`] classifies every node once:
//!
//! - **leaves**: exactly one neighbour; never selected.
//! - **support nodes**: the neighbour of a leaf; selected in every feasible
//!   solution.
//! - **configurable nodes**: everything else; the only nodes the search may
//!   add or drop.
//!
//! The domination state produced by selecting exactly the support nodes is
//! also computed here and reused as the starting point of every
//! [`Solution`](crate::solution::Solution).

use crate::error::DomsetError;
use crate::node_set::NodeSet;

/// Domination state of the reference solution (all support nodes chosen).
#[derive(Debug, Clone)]
pub(crate) struct ReferenceSeed {
    pub(crate) chosen: NodeSet,
    pub(crate) domination: Vec<u32>,
    pub(crate) unobserved: NodeSet,
}

/// An undirected graph with its node classification.
///
/// Neighbour lists are sorted and deduplicated; self-loops are dropped.
/// The instance is never mutated after construction and is shared
/// read-only (usually behind an `Arc`) by every search run.
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
    leaves: NodeSet,
    support: NodeSet,
    configurable: NodeSet,
    reference: ReferenceSeed,
}

impl Instance {
    /// Builds an instance with `nodes` nodes from an undirected edge list.
    ///
    /// Duplicate edges are merged and self-loops are ignored.
    ///
    /// # Errors
    /// [`DomsetError::TooFewNodes`] if `nodes < 3`,
    /// [`DomsetError::NodeOutOfRange`] if an endpoint is `>= nodes`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_domset::instance::Instance;
    ///
    /// let path = Instance::from_edges("p5", 5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
    /// assert_eq!(path.support_nodes().to_vec(), vec![1, 3]);
    /// assert_eq!(path.configurable_nodes().to_vec(), vec![2]);
    /// ```
    pub fn from_edges(
        name: impl Into<String>,
        nodes: usize,
        edges: &[(usize, usize)],
    ) -> Result<Self, DomsetError> {
        let name = name.into();
        if nodes < 3 {
            return Err(DomsetError::TooFewNodes { name, nodes });
        }

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); nodes];
        let mut self_loops = 0usize;
        for &(u, v) in edges {
            for node in [u, v] {
                if node >= nodes {
                    return Err(DomsetError::NodeOutOfRange { node, nodes });
                }
            }
            if u == v {
                self_loops += 1;
                continue;
            }
            adjacency[u].push(v);
            adjacency[v].push(u);
        }
        if self_loops > 0 {
            log::warn!("instance '{name}': ignored {self_loops} self-loop(s)");
        }

        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        let edge_count = adjacency.iter().map(Vec::len).sum::<usize>() / 2;

        Ok(Self::classify(name, adjacency, edge_count))
    }

    /// Builds an instance from neighbour lists.
    ///
    /// The lists need not be symmetric: an entry `v` in `lists[u]` adds the
    /// undirected edge `{u, v}`.
    pub fn from_adjacency(
        name: impl Into<String>,
        lists: &[Vec<usize>],
    ) -> Result<Self, DomsetError> {
        let edges: Vec<(usize, usize)> = lists
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |&v| (u, v)))
            .collect();
        Self::from_edges(name, lists.len(), &edges)
    }

    fn classify(name: String, adjacency: Vec<Vec<usize>>, edge_count: usize) -> Self {
        let n = adjacency.len();
        let mut leaves = NodeSet::new(n);
        let mut support = NodeSet::new(n);

        // In a two-node component u-v both are leaves; only the neighbour of
        // the first discovered leaf becomes support.
        for (node, neighbors) in adjacency.iter().enumerate() {
            if let [neighbor] = neighbors.as_slice() {
                leaves.insert(node);
                if !leaves.contains(*neighbor) {
                    support.insert(*neighbor);
                }
            }
        }

        let configurable = NodeSet::full(n).difference(&leaves).difference(&support);

        let mut domination = vec![0u32; n];
        for node in support.iter() {
            domination[node] += 1;
            for &neighbor in &adjacency[node] {
                domination[neighbor] += 1;
            }
        }
        let unobserved =
            NodeSet::from_nodes(n, (0..n).filter(|&node| domination[node] == 0));

        let reference = ReferenceSeed {
            chosen: support.clone(),
            domination,
            unobserved,
        };

        Self {
            name,
            adjacency,
            edge_count,
            leaves,
            support,
            configurable,
            reference,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edge density `2m / (n(n-1))`.
    pub fn density(&self) -> f64 {
        let n = self.node_count() as f64;
        2.0 * self.edge_count as f64 / (n * (n - 1.0))
    }

    /// Sorted neighbours of `node`.
    #[inline]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    #[inline]
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    pub fn leaves(&self) -> &NodeSet {
        &self.leaves
    }

    pub fn support_nodes(&self) -> &NodeSet {
        &self.support
    }

    pub fn configurable_nodes(&self) -> &NodeSet {
        &self.configurable
    }

    #[inline]
    pub fn is_leaf(&self, node: usize) -> bool {
        self.leaves.contains(node)
    }

    #[inline]
    pub fn is_support(&self, node: usize) -> bool {
        self.support.contains(node)
    }

    #[inline]
    pub fn is_configurable(&self, node: usize) -> bool {
        self.configurable.contains(node)
    }

    /// Nodes left undominated by the reference solution.
    pub fn reference_unobserved_count(&self) -> usize {
        self.reference.unobserved.len()
    }

    pub(crate) fn reference(&self) -> &ReferenceSeed {
        &self.reference
    }
}
