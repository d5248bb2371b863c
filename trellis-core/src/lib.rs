//! Trellis Core
//!
//! This crate provides a minimal in-memory dependency graph evaluator.
//! It implements:
//!
//! - A registry of named computation nodes with explicit dependency lists
//! - Lazy, memoized evaluation of requested outputs
//! - Cycle detection along the active resolution path
//! - Caller-supplied input overrides that preempt computation
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `graph`: the node registry and the recursive evaluator
//! - `error`: the error type shared by registration and evaluation
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use trellis_core::{compute, Graph};
//!
//! let mut graph = Graph::new();
//! graph.register("a", |_| 42, &[]).unwrap();
//! graph.register("doubled", |args: &[i64]| args[0] * 2, &["a"]).unwrap();
//!
//! // Evaluate "doubled" with "a" overridden to 5.
//! let overrides = HashMap::from([("a".to_string(), 5)]);
//! let result = compute(&graph, overrides, &["doubled"]).unwrap();
//! assert_eq!(result["doubled"], 10);
//! ```

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{compute, Graph, Node};
