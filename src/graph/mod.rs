//! Caller-constructed graph representations that the traversal operations walk.
//!
//! # Representations
//!
//! - [`Vertex`]: Shared-ownership value-carrying nodes, cycles and self-references allowed
//! - [`Airport`]: Domain nodes exposing their outbound-flight destinations
//! - [`AdjacencyMap`]: Key-to-neighbor-list graphs with no node objects at all

mod adjacency_map;
mod airport;
mod vertex;

pub use adjacency_map::*;
pub use airport::*;
pub use vertex::*;
