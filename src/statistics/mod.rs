//! Statistics tracking for graph traversals.
//!
//! This module provides a small tally of work done by a single top-level
//! traversal call: how many distinct nodes were visited and how many edges
//! were followed (or at least considered) along the way.

mod stats;
pub use stats::*;
