pub struct TraversalStats {
    nodes_visited: usize,
    edges_followed: usize,
}

impl TraversalStats {
    pub fn new() -> Self {
        TraversalStats {
            nodes_visited: 0,
            edges_followed: 0,
        }
    }

    /// Record that a previously unseen node was visited.
    pub fn bump_nodes(&mut self) {
        self.nodes_visited += 1
    }

    /// Record that a node's outgoing edges were taken into consideration
    /// during the exploration.
    pub fn bump_edges(&mut self, edge_amount: usize) {
        self.edges_followed += edge_amount
    }

    pub fn get_nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn get_edges_followed(&self) -> usize {
        self.edges_followed
    }

    /// Combine two tallies, e.g. the same operation run over several graphs.
    pub fn merge(&self, other: &TraversalStats) -> TraversalStats {
        TraversalStats {
            nodes_visited: self.nodes_visited + other.nodes_visited,
            edges_followed: self.edges_followed + other.edges_followed,
        }
    }
}

impl Default for TraversalStats {
    fn default() -> Self {
        TraversalStats::new()
    }
}
