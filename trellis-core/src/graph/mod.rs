//! Dependency Graph
//!
//! This module implements the named dependency graph and its evaluator.
//!
//! # Overview
//!
//! The graph is a set of named nodes where:
//!
//! - Each node is bound to a compute function and an ordered list of
//!   dependency names
//! - Dependency order matters: dependency i's resolved value becomes
//!   positional argument i of the compute function
//!
//! Evaluation is pull-based. A caller asks for specific outputs and the
//! evaluator walks the dependency chains depth-first, computing each node at
//! most once per call and never touching nodes that no requested output
//! reaches.
//!
//! # Design Decisions
//!
//! 1. Dependency names are not validated at registration time. A node may
//!    name dependencies that are registered later, or never. Unknown names
//!    only fail when evaluation actually reaches them.
//!
//! 2. The registry is indexed by node name for O(1) lookups and preserves
//!    registration order for deterministic iteration.
//!
//! 3. Per-call evaluation state (value cache and the visiting set used for
//!    cycle detection) lives outside the registry, so concurrent evaluations
//!    of a shared graph cannot interfere with each other.

mod evaluator;
mod node;
mod registry;

pub use evaluator::compute;
pub use node::Node;
pub use registry::Graph;
