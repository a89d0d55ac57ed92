use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    graph::Vertex,
    sets::visited::{IdentitySet, VisitorSet},
    statistics::TraversalStats,
};

/// Collects every distinct reachable word strictly shorter than `k`
/// characters, in pre-order DFS order: a vertex's own word comes before any
/// neighbor's, and neighbors are explored in their listed order. Each vertex
/// contributes at most once, no matter how many edges lead to it.
///
/// Returns an empty vector when `vertex` is `None`; `k == 0` can never admit
/// a word.
///
/// # Examples
///
/// ```
/// use wayfarer::graph::Vertex;
/// use wayfarer::traversal::short_words;
///
/// let cat = Vertex::new("cat".to_string());
/// assert_eq!(short_words(Some(&cat), 4), vec!["cat"]);
/// assert!(short_words(Some(&cat), 0).is_empty());
/// ```
pub fn short_words(vertex: Option<&Rc<Vertex<String>>>, k: usize) -> Vec<String> {
    let mut visited = IdentitySet::new();
    let mut stats = TraversalStats::new();
    let mut found = Vec::new();

    if let Some(vertex) = vertex {
        collect_short_words(vertex, k, &mut visited, &mut found, &mut stats);
    }

    debug!(
        nodes_visited = stats.get_nodes_visited(),
        edges_followed = stats.get_edges_followed(),
        reported = found.len(),
        "short-word scan finished"
    );
    found
}

fn collect_short_words(
    vertex: &Rc<Vertex<String>>,
    k: usize,
    visited: &mut IdentitySet<Vertex<String>>,
    found: &mut Vec<String>,
    stats: &mut TraversalStats,
) {
    if visited.get(vertex) {
        return;
    }
    visited.set(vertex);
    stats.bump_nodes();
    trace!(word = %vertex.value, "visiting vertex");

    if vertex.value.chars().count() < k {
        found.push(vertex.value.clone());
    }

    let neighbors = vertex.neighbors();
    stats.bump_edges(neighbors.len());
    for neighbor in neighbors.iter() {
        collect_short_words(neighbor, k, visited, found, stats);
    }
}

/// Prints each word selected by [`short_words`] on its own line, preserving
/// the traversal order.
pub fn print_short_words(vertex: Option<&Rc<Vertex<String>>>, k: usize) {
    for word in short_words(vertex, k) {
        println!("{word}");
    }
}
