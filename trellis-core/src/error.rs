//! Error types for graph registration and evaluation.
//!
//! All three failure modes are fatal to the call that triggered them. There
//! is no internal recovery and no partial-result return: errors propagate
//! directly to the caller of `register` or `compute`.

use thiserror::Error;

/// Errors that can occur when building or evaluating a dependency graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this name is already registered.
    #[error("node '{name}' is already registered")]
    DuplicateNode {
        /// Name of the node that was registered twice.
        name: String,
    },

    /// One or more referenced node names are not defined in the graph.
    ///
    /// Raised before evaluation for unknown override or output names, with
    /// every offending name listed. Also raised during evaluation when a
    /// node's declared dependency turns out to be unregistered, in which
    /// case `names` holds that single dependency.
    #[error("nodes {names:?} are not defined in the graph")]
    UndefinedNodes {
        /// The unknown names, sorted for deterministic messages.
        names: Vec<String>,
    },

    /// A node was re-entered while still being resolved.
    ///
    /// The named node is the detection point, which depends on dependency
    /// declaration order rather than any canonical "first" node of the cycle.
    #[error("cycle detected at node '{name}'")]
    CycleDetected {
        /// Node at which the cycle was detected.
        name: String,
    },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_node_message_names_the_offender() {
        let err = GraphError::DuplicateNode {
            name: "price".to_string(),
        };
        assert_eq!(err.to_string(), "node 'price' is already registered");
    }

    #[test]
    fn undefined_nodes_message_lists_all_names() {
        let err = GraphError::UndefinedNodes {
            names: vec!["x".to_string(), "y".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "nodes [\"x\", \"y\"] are not defined in the graph"
        );
    }

    #[test]
    fn cycle_message_names_the_detection_point() {
        let err = GraphError::CycleDetected {
            name: "total".to_string(),
        };
        assert_eq!(err.to_string(), "cycle detected at node 'total'");
    }
}
