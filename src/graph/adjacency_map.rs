use std::hash::Hash;

use hashbrown::HashMap;

/// A graph expressed purely as a mapping from key to neighbor-key list.
///
/// There are no node objects: a key **is** a node, and identity is value
/// equality on the key type. Keys that appear only as edge targets, never as
/// map entries, are treated as leaves with no outgoing edges rather than as
/// errors.
///
/// # Examples
///
/// ```
/// use wayfarer::graph::AdjacencyMap;
///
/// let graph: AdjacencyMap<u32> = [(1, vec![2]), (2, vec![])].into_iter().collect();
/// assert_eq!(graph.neighbors(&1), &[2]);
/// assert!(graph.neighbors(&99).is_empty()); // absent key: leaf, not error
/// ```
pub struct AdjacencyMap<T> {
    edges: HashMap<T, Vec<T>>,
}

impl<T: Eq + Hash> AdjacencyMap<T> {
    pub fn new() -> Self {
        AdjacencyMap {
            edges: HashMap::new(),
        }
    }

    /// Registers `key` as a node with the given ordered neighbor list,
    /// replacing any previous list for the same key.
    pub fn insert(&mut self, key: T, neighbors: Vec<T>) {
        self.edges.insert(key, neighbors);
    }

    /// The neighbor keys of `key`, in their listed order. Keys without a map
    /// entry have no outgoing edges.
    pub fn neighbors(&self, key: &T) -> &[T] {
        self.edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` is a node of the graph (i.e. a map entry, not merely an
    /// edge target).
    pub fn contains_key(&self, key: &T) -> bool {
        self.edges.contains_key(key)
    }

    /// Iterator over the graph's node keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &T> {
        self.edges.keys()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<T: Eq + Hash> Default for AdjacencyMap<T> {
    fn default() -> Self {
        AdjacencyMap::new()
    }
}

impl<T: Eq + Hash> From<HashMap<T, Vec<T>>> for AdjacencyMap<T> {
    fn from(edges: HashMap<T, Vec<T>>) -> Self {
        AdjacencyMap { edges }
    }
}

impl<T: Eq + Hash> FromIterator<(T, Vec<T>)> for AdjacencyMap<T> {
    fn from_iter<I: IntoIterator<Item = (T, Vec<T>)>>(iter: I) -> Self {
        AdjacencyMap {
            edges: iter.into_iter().collect(),
        }
    }
}
