//! Graph Nodes
//!
//! This module defines the node type that lives in the dependency graph.

use std::fmt::Debug;
use std::sync::Arc;

/// A named unit of computation in the dependency graph.
///
/// A node binds a name to a compute function and an ordered list of
/// dependency names. The function's arity equals the number of declared
/// dependencies: when the node is evaluated, dependency i's resolved value
/// is passed as positional argument i.
///
/// Nodes are immutable once registered. The registry never updates or
/// removes them.
///
/// # Type Parameters
///
/// - `V`: The value type flowing between nodes. Heterogeneous graphs use a
///   tagged any-type container (such as `serde_json::Value`) as `V`.
pub struct Node<V> {
    /// The node's unique name within its graph.
    name: String,

    /// The computation. Receives the resolved dependency values in
    /// declaration order.
    compute: Arc<dyn Fn(&[V]) -> V + Send + Sync>,

    /// Names of the nodes this node reads from, in positional order.
    /// These need not be registered at the time this node is created.
    dependencies: Vec<String>,
}

impl<V> Node<V> {
    /// Create a new node with the given name, compute function, and
    /// dependency list.
    pub(crate) fn new<F>(name: String, compute: F, dependencies: Vec<String>) -> Self
    where
        F: Fn(&[V]) -> V + Send + Sync + 'static,
    {
        Self {
            name,
            compute: Arc::new(compute),
            dependencies,
        }
    }

    /// Get the node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the node's dependency names in positional order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Get the arity of the compute function, which equals the number of
    /// declared dependencies.
    pub fn arity(&self) -> usize {
        self.dependencies.len()
    }

    /// Invoke the compute function with the resolved dependency values.
    ///
    /// `args` must have one entry per declared dependency, in declaration
    /// order.
    pub(crate) fn invoke(&self, args: &[V]) -> V {
        (self.compute)(args)
    }
}

impl<V> Clone for Node<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            compute: Arc::clone(&self.compute),
            dependencies: self.dependencies.clone(),
        }
    }
}

impl<V> Debug for Node<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("dependencies", &self.dependencies)
            .field("arity", &self.arity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_reports_name_and_dependencies() {
        let node = Node::new(
            "sum".to_string(),
            |args: &[i64]| args.iter().sum(),
            vec!["a".to_string(), "b".to_string()],
        );

        assert_eq!(node.name(), "sum");
        assert_eq!(node.dependencies(), ["a".to_string(), "b".to_string()]);
        assert_eq!(node.arity(), 2);
    }

    #[test]
    fn node_with_no_dependencies_has_zero_arity() {
        let node = Node::new("constant".to_string(), |_: &[i64]| 42, Vec::new());

        assert!(node.dependencies().is_empty());
        assert_eq!(node.arity(), 0);
        assert_eq!(node.invoke(&[]), 42);
    }

    #[test]
    fn invoke_passes_arguments_positionally() {
        let node = Node::new(
            "diff".to_string(),
            |args: &[i64]| args[0] - args[1],
            vec!["minuend".to_string(), "subtrahend".to_string()],
        );

        assert_eq!(node.invoke(&[10, 3]), 7);
        assert_eq!(node.invoke(&[3, 10]), -7);
    }

    #[test]
    fn clone_shares_the_compute_function() {
        let node = Node::new("constant".to_string(), |_: &[i64]| 7, Vec::new());
        let clone = node.clone();

        assert_eq!(clone.name(), node.name());
        assert_eq!(clone.invoke(&[]), node.invoke(&[]));
    }
}
