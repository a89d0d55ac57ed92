//! Specialized set structures for graph traversal.
//!
//! # Submodules
//!
//! - [`visited`]: Per-call visited-node tracking guaranteeing termination on cyclic graphs

pub mod visited;
