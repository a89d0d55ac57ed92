use std::fmt::Display;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    graph::Vertex,
    sets::visited::{IdentitySet, VisitorSet},
    statistics::TraversalStats,
};

/// Collects the values of every vertex reachable from `vertex` (itself
/// included) whose neighbor list contains the vertex itself, in pre-order DFS
/// order. Self-loops are decided by handle identity, so a neighbor carrying an
/// equal value is not a self-loop. A vertex with an empty neighbor list never
/// qualifies.
///
/// Returns an empty vector when `vertex` is `None`.
pub fn self_loopers<T: Clone>(vertex: Option<&Rc<Vertex<T>>>) -> Vec<T> {
    let mut visited = IdentitySet::new();
    let mut stats = TraversalStats::new();
    let mut found = Vec::new();

    if let Some(vertex) = vertex {
        collect_self_loopers(vertex, &mut visited, &mut found, &mut stats);
    }

    debug!(
        nodes_visited = stats.get_nodes_visited(),
        edges_followed = stats.get_edges_followed(),
        loopers = found.len(),
        "self-loop scan finished"
    );
    found
}

fn collect_self_loopers<T: Clone>(
    vertex: &Rc<Vertex<T>>,
    visited: &mut IdentitySet<Vertex<T>>,
    found: &mut Vec<T>,
    stats: &mut TraversalStats,
) {
    if visited.get(vertex) {
        return;
    }
    visited.set(vertex);
    stats.bump_nodes();
    trace!("visiting vertex");

    if Vertex::has_self_loop(vertex) {
        found.push(vertex.value.clone());
    }

    let neighbors = vertex.neighbors();
    stats.bump_edges(neighbors.len());
    for neighbor in neighbors.iter() {
        collect_self_loopers(neighbor, visited, found, stats);
    }
}

/// Prints each value selected by [`self_loopers`] on its own line, preserving
/// the traversal order.
pub fn print_self_loopers<T: Clone + Display>(vertex: Option<&Rc<Vertex<T>>>) {
    for value in self_loopers(vertex) {
        println!("{value}");
    }
}
