//! Node Registry
//!
//! The registry owns the mapping from node name to node definition. It is
//! the only mutable piece of the graph, and it only ever grows: nodes are
//! registered once and never updated or removed.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{GraphError, Result};

use super::node::Node;

/// A dependency graph: a registry of named nodes.
///
/// The graph itself performs no evaluation. Pass it to
/// [`compute`](super::compute) together with overrides and the requested
/// output names.
///
/// Registration requires `&mut self` while evaluation borrows `&self`, so
/// the borrow checker rules out registering new nodes while an evaluation
/// of the same graph is in progress.
pub struct Graph<V> {
    /// All nodes, indexed by name, in registration order.
    nodes: IndexMap<String, Node<V>>,
}

impl<V> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Register a node.
    ///
    /// `dependencies` is ordered: dependency i's resolved value becomes
    /// positional argument i of `compute`. Dependency names are not checked
    /// for existence here; they only need to be registered by the time an
    /// evaluation actually reaches them.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if a node with this name is
    /// already registered. The existing node is left intact.
    pub fn register<F>(&mut self, name: &str, compute: F, dependencies: &[&str]) -> Result<()>
    where
        F: Fn(&[V]) -> V + Send + Sync + 'static,
    {
        if self.nodes.contains_key(name) {
            return Err(GraphError::DuplicateNode {
                name: name.to_string(),
            });
        }

        let dependencies: Vec<String> = dependencies.iter().map(|d| d.to_string()).collect();
        debug!(node = name, deps = ?dependencies, "registered node");

        self.nodes
            .insert(name.to_string(), Node::new(name.to_string(), compute, dependencies));
        Ok(())
    }

    /// Get a node by name.
    pub fn node(&self, name: &str) -> Option<&Node<V>> {
        self.nodes.get(name)
    }

    /// Check whether a node with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Get the total number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over node names in registration order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .finish()
    }
}
