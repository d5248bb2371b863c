//! Evaluator
//!
//! The evaluator resolves requested outputs against a graph by walking
//! dependency chains depth-first.
//!
//! # Algorithm
//!
//! Evaluation of a single node follows three steps:
//!
//! 1. If the node's value is already in the per-call cache (seeded from the
//!    caller's overrides, extended as nodes are computed), return it. The
//!    compute function is never re-invoked within one call, no matter how
//!    many paths reach the node.
//! 2. If the node is already on the active recursion path, fail with a
//!    cycle error before repeating any of its dependency work.
//! 3. Otherwise mark the node as visiting, resolve its dependencies in
//!    declaration order, invoke the compute function with the resolved
//!    values as positional arguments, cache the result, and unmark.
//!
//! This is a depth-first traversal with the classic three colors: absent
//! from cache and visiting set means unvisited, in the visiting set means
//! on the active path, in the cache means resolved.
//!
//! Laziness falls out of the pull-based walk: a node that no requested
//! output reaches, directly or transitively, is never evaluated. This also
//! means a dependency name that is never reached is never checked for
//! existence. Only the caller-facing names (overrides and requested
//! outputs) are validated up front.

use std::collections::{BTreeSet, HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::error::{GraphError, Result};

use super::registry::Graph;

/// Evaluate the requested outputs of a graph.
///
/// `overrides` maps node names to pre-computed values that take precedence
/// over computing those nodes, even when a compute function is registered.
/// `outputs` lists the node names to resolve; the returned map holds one
/// entry per requested name, in request order.
///
/// Each call owns its own cache and visiting state, so independent calls
/// against a shared graph do not interact.
///
/// # Errors
///
/// Returns [`GraphError::UndefinedNodes`] if any override or output name is
/// not registered (all offending names are reported, before any evaluation
/// starts) or if an unregistered dependency is reached mid-evaluation.
/// Returns [`GraphError::CycleDetected`] if resolution re-enters a node
/// that is still being resolved.
pub fn compute<V: Clone>(
    graph: &Graph<V>,
    overrides: HashMap<String, V>,
    outputs: &[&str],
) -> Result<IndexMap<String, V>> {
    // Validate caller-facing names before any computation. Dependency names
    // reached only internally are validated lazily, on lookup.
    let unknown: BTreeSet<String> = overrides
        .keys()
        .map(String::as_str)
        .chain(outputs.iter().copied())
        .filter(|name| !graph.contains(name))
        .map(str::to_string)
        .collect();
    if !unknown.is_empty() {
        return Err(GraphError::UndefinedNodes {
            names: unknown.into_iter().collect(),
        });
    }

    let mut evaluation = Evaluation {
        graph,
        cache: overrides,
        visiting: HashSet::new(),
    };

    let mut results = IndexMap::with_capacity(outputs.len());
    for &name in outputs {
        let value = evaluation.resolve(name)?;
        results.insert(name.to_string(), value);
    }

    debug!(
        requested = outputs.len(),
        resolved = evaluation.cache.len(),
        "evaluation complete"
    );
    Ok(results)
}

/// Per-call evaluation state.
///
/// Both maps are scoped to a single `compute` call and discarded when it
/// returns. Nothing here outlives the call or leaks into the graph.
struct Evaluation<'g, V> {
    /// The read-only graph being evaluated.
    graph: &'g Graph<V>,

    /// Resolved values by node name, seeded with the caller's overrides.
    cache: HashMap<String, V>,

    /// Names on the active recursion path. Used solely for cycle detection:
    /// a node is added on entry to its resolution and removed on exit.
    visiting: HashSet<String>,
}

impl<'g, V: Clone> Evaluation<'g, V> {
    /// Resolve one node, recursively resolving its dependencies first.
    fn resolve(&mut self, name: &str) -> Result<V> {
        // Overridden or already computed this call.
        if let Some(value) = self.cache.get(name) {
            trace!(node = name, "cache hit");
            return Ok(value.clone());
        }

        // Re-entering a node still under resolution means the dependency
        // chain loops back on itself.
        if self.visiting.contains(name) {
            return Err(GraphError::CycleDetected {
                name: name.to_string(),
            });
        }

        // Unregistered dependencies surface here, as a plain lookup miss.
        let graph = self.graph;
        let node = graph.node(name).ok_or_else(|| GraphError::UndefinedNodes {
            names: vec![name.to_string()],
        })?;

        self.visiting.insert(name.to_string());

        let mut args = Vec::with_capacity(node.arity());
        for dependency in node.dependencies() {
            args.push(self.resolve(dependency)?);
        }

        let value = node.invoke(&args);
        trace!(node = name, "computed");
        self.cache.insert(name.to_string(), value.clone());
        self.visiting.remove(name);

        Ok(value)
    }
}
