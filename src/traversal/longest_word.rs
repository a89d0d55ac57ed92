use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    graph::Vertex,
    sets::visited::{IdentitySet, VisitorSet},
    statistics::TraversalStats,
};

/// Returns the longest word reachable from `vertex`, including the start's
/// own word, or the empty string for `None`.
///
/// Length is measured in characters. When several reachable words share the
/// maximum length, the one encountered earliest in the pre-order traversal
/// wins: the best-so-far word is passed down into each neighbor call and only
/// a *strictly* longer word ever replaces it, so later equal-length words can
/// never displace an earlier find. By induction over the DFS tree this yields
/// the true global maximum regardless of which branch holds it.
///
/// # Examples
///
/// ```
/// use wayfarer::graph::Vertex;
/// use wayfarer::traversal::longest_word;
///
/// let a = Vertex::new("a".to_string());
/// let long = Vertex::new("longword".to_string());
/// let x = Vertex::new("x".to_string());
/// a.add_neighbor(&long);
/// long.add_neighbor(&x);
///
/// assert_eq!(longest_word(Some(&a)), "longword");
/// assert_eq!(longest_word(None), "");
/// ```
pub fn longest_word(vertex: Option<&Rc<Vertex<String>>>) -> String {
    let mut visited = IdentitySet::new();
    let mut stats = TraversalStats::new();

    let longest = match vertex {
        Some(vertex) => find_longest(vertex, String::new(), &mut visited, &mut stats),
        None => String::new(),
    };

    debug!(
        nodes_visited = stats.get_nodes_visited(),
        edges_followed = stats.get_edges_followed(),
        longest = %longest,
        "longest-word search finished"
    );
    longest
}

fn find_longest(
    vertex: &Rc<Vertex<String>>,
    mut longest: String,
    visited: &mut IdentitySet<Vertex<String>>,
    stats: &mut TraversalStats,
) -> String {
    if visited.get(vertex) {
        return longest;
    }
    visited.set(vertex);
    stats.bump_nodes();
    trace!(word = %vertex.value, "visiting vertex");

    if vertex.value.chars().count() > longest.chars().count() {
        longest = vertex.value.clone();
    }

    let neighbors = vertex.neighbors();
    stats.bump_edges(neighbors.len());
    for neighbor in neighbors.iter() {
        // each branch starts from the current best and hands back its merge
        longest = find_longest(neighbor, longest, visited, stats);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_test_logging;

    #[test]
    fn none_vertex_yields_empty_string() {
        init_test_logging();
        assert_eq!(longest_word(None), "");
    }

    #[test]
    fn single_vertex_returns_its_own_word() {
        init_test_logging();
        let only = Vertex::new("solo".to_string());
        assert_eq!(longest_word(Some(&only)), "solo");
    }

    #[test]
    fn longest_found_through_a_chain() {
        init_test_logging();
        // a -> longword -> x
        let a = Vertex::new("a".to_string());
        let long = Vertex::new("longword".to_string());
        let x = Vertex::new("x".to_string());
        a.add_neighbor(&long);
        long.add_neighbor(&x);

        assert_eq!(longest_word(Some(&a)), "longword");
    }

    #[test]
    fn longest_in_a_later_sibling_branch_is_found() {
        init_test_logging();
        // root -> short, root -> deeper -> longestword
        let root = Vertex::new("root".to_string());
        let short = Vertex::new("s".to_string());
        let deeper = Vertex::new("deeper".to_string());
        let winner = Vertex::new("longestword".to_string());
        root.add_neighbor(&short);
        root.add_neighbor(&deeper);
        deeper.add_neighbor(&winner);

        assert_eq!(longest_word(Some(&root)), "longestword");
    }

    #[test]
    fn ties_resolve_to_first_found_in_preorder() {
        init_test_logging();
        // Two equal-length candidates in different branches: "alpha" sits in
        // the first branch and is met before "bravo" in the second.
        let root = Vertex::new("r".to_string());
        let left = Vertex::new("alpha".to_string());
        let right = Vertex::new("bravo".to_string());
        root.add_neighbor(&left);
        root.add_neighbor(&right);

        assert_eq!(longest_word(Some(&root)), "alpha");

        // Swap the branch order and the other candidate is met first.
        let root2 = Vertex::new("r".to_string());
        root2.add_neighbor(&right);
        root2.add_neighbor(&left);
        assert_eq!(longest_word(Some(&root2)), "bravo");
    }

    #[test]
    fn cycles_terminate() {
        init_test_logging();
        let a = Vertex::new("spin".to_string());
        let b = Vertex::new("around".to_string());
        a.add_neighbor(&b);
        b.add_neighbor(&a);
        b.add_neighbor(&b);

        assert_eq!(longest_word(Some(&a)), "around");
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        init_test_logging();
        // "héé" is 3 characters / 5 bytes; "four" has 4 characters
        let root = Vertex::new("héé".to_string());
        let four = Vertex::new("four".to_string());
        root.add_neighbor(&four);
        assert_eq!(longest_word(Some(&root)), "four");
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        init_test_logging();
        let a = Vertex::new("aa".to_string());
        let b = Vertex::new("bbb".to_string());
        a.add_neighbor(&b);
        b.add_neighbor(&a);

        assert_eq!(longest_word(Some(&a)), longest_word(Some(&a)));
    }
}
