use std::hash::Hash;

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::{
    graph::AdjacencyMap,
    sets::visited::{KeySet, VisitorSet},
    statistics::TraversalStats,
};

/// Returns every key of `graph` that cannot be reached from `starting` by
/// following edges.
///
/// Only the map's own keys are candidates: an edge target that never appears
/// as a key is a leaf the walk passes through, not part of the answer. The
/// starting key trivially reaches itself, so when it is a key of the map it is
/// never in the result. A `None` start reaches nothing, making every key
/// unreachable.
///
/// # Examples
///
/// ```
/// use hashbrown::HashSet;
/// use wayfarer::graph::AdjacencyMap;
/// use wayfarer::traversal::unreachable;
///
/// let graph: AdjacencyMap<u32> =
///     [(1, vec![2]), (2, vec![]), (3, vec![4]), (4, vec![])].into_iter().collect();
///
/// let cut_off = unreachable(&graph, Some(&1));
/// assert_eq!(cut_off, HashSet::from_iter([3, 4]));
/// ```
pub fn unreachable<T>(graph: &AdjacencyMap<T>, starting: Option<&T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let mut visited = KeySet::new();
    let mut stats = TraversalStats::new();

    if let Some(starting) = starting {
        mark_reachable(graph, starting, &mut visited, &mut stats);
    }

    let unreached: HashSet<T> = graph
        .keys()
        .filter(|key| !visited.get(key))
        .cloned()
        .collect();

    debug!(
        nodes_visited = stats.get_nodes_visited(),
        edges_followed = stats.get_edges_followed(),
        unreached = unreached.len(),
        "unreachable-set computation finished"
    );
    unreached
}

fn mark_reachable<T>(
    graph: &AdjacencyMap<T>,
    key: &T,
    visited: &mut KeySet<T>,
    stats: &mut TraversalStats,
) where
    T: Eq + Hash + Clone,
{
    if visited.get(key) {
        return;
    }
    visited.set(key);
    stats.bump_nodes();
    trace!("visiting key");

    let neighbors = graph.neighbors(key);
    stats.bump_edges(neighbors.len());
    for neighbor in neighbors {
        mark_reachable(graph, neighbor, visited, stats);
    }
}
