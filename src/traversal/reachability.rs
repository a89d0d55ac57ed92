use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    graph::Airport,
    sets::visited::{IdentitySet, VisitorSet},
    statistics::TraversalStats,
};

/// Returns `true` iff `destination` can be reached from `start` by following
/// zero or more outbound flights.
///
/// The zero-length path counts: when `start` and `destination` are the same
/// airport (handle identity), the answer is `true` without looking at any
/// flight. A `None` start is `false`. This is a purely existential query; no
/// route is reconstructed.
///
/// # Examples
///
/// ```
/// use wayfarer::graph::Airport;
/// use wayfarer::traversal::can_reach;
///
/// let sfo = Airport::new("SFO");
/// let jfk = Airport::new("JFK");
/// sfo.add_outbound_flight(&jfk);
///
/// assert!(can_reach(Some(&sfo), &jfk));
/// assert!(!can_reach(Some(&jfk), &sfo)); // flights are directed
/// ```
pub fn can_reach(start: Option<&Rc<Airport>>, destination: &Rc<Airport>) -> bool {
    let mut visited = IdentitySet::new();
    let mut stats = TraversalStats::new();

    let reached = match start {
        Some(start) => search(start, destination, &mut visited, &mut stats),
        None => false,
    };

    debug!(
        nodes_visited = stats.get_nodes_visited(),
        edges_followed = stats.get_edges_followed(),
        destination = %destination.code,
        reached,
        "reachability check finished"
    );
    reached
}

fn search(
    location: &Rc<Airport>,
    destination: &Rc<Airport>,
    visited: &mut IdentitySet<Airport>,
    stats: &mut TraversalStats,
) -> bool {
    if visited.get(location) {
        return false;
    }
    if Rc::ptr_eq(location, destination) {
        return true;
    }
    visited.set(location);
    stats.bump_nodes();
    trace!(code = %location.code, "visiting airport");

    let flights = location.outbound_flights();
    stats.bump_edges(flights.len());
    for next in flights.iter() {
        if search(next, destination, visited, stats) {
            return true;
        }
    }

    false
}
