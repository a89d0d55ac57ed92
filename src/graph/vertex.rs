use std::cell::{Ref, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

/// A graph node owning a value and an ordered list of neighbor handles.
///
/// Vertices are handed around as `Rc<Vertex<T>>` so that several nodes can
/// point at the same neighbor, including mutually and including a vertex
/// pointing at itself. Node identity is handle identity ([`Rc::ptr_eq`]), not
/// value equality: two distinct vertices may carry equal data.
///
/// Neighbors live behind a `RefCell` so that edges (and therefore cycles) can
/// be wired up after the vertices exist. Traversals only ever read.
///
/// # Examples
///
/// ```
/// use wayfarer::graph::Vertex;
///
/// let a = Vertex::new("a".to_string());
/// let b = Vertex::new("b".to_string());
/// a.add_neighbor(&b);
/// b.add_neighbor(&a); // cycle, allowed
///
/// assert_eq!(a.neighbors().len(), 1);
/// ```
pub struct Vertex<T> {
    pub value: T,
    neighbors: RefCell<Vec<Rc<Vertex<T>>>>,
}

impl<T> Vertex<T> {
    /// Creates a vertex with the given value and no neighbors, already wrapped
    /// in the shared handle every traversal expects.
    pub fn new(value: T) -> Rc<Self> {
        Rc::new(Vertex {
            value,
            neighbors: RefCell::new(Vec::new()),
        })
    }

    /// Appends `neighbor` to this vertex's neighbor list. Listed order is
    /// visit order; duplicates and self-references are legal.
    pub fn add_neighbor(&self, neighbor: &Rc<Vertex<T>>) {
        self.neighbors.borrow_mut().push(Rc::clone(neighbor));
    }

    /// Read-only view of the neighbor list, in insertion order.
    pub fn neighbors(&self) -> Ref<'_, Vec<Rc<Vertex<T>>>> {
        self.neighbors.borrow()
    }

    /// Whether this vertex's own neighbor list contains itself. Takes the
    /// handle rather than `&self` because a self-loop is a question of
    /// identity, like [`Rc::ptr_eq`].
    pub fn has_self_loop(this: &Rc<Self>) -> bool {
        this.neighbors
            .borrow()
            .iter()
            .any(|neighbor| Rc::ptr_eq(neighbor, this))
    }
}

impl<T: Debug> Debug for Vertex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // neighbors are printed by value only; recursing into handles would
        // not terminate on cyclic graphs.
        f.debug_struct("Vertex")
            .field("value", &self.value)
            .field(
                "neighbors",
                &self
                    .neighbors
                    .borrow()
                    .iter()
                    .map(|n| &n.value)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_has_no_neighbors() {
        let v = Vertex::new(42);
        assert!(v.neighbors().is_empty());
        assert!(!Vertex::has_self_loop(&v));
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        let c = Vertex::new("c");
        a.add_neighbor(&b);
        a.add_neighbor(&c);

        let neighbors = a.neighbors();
        assert_eq!(neighbors.len(), 2);
        assert!(Rc::ptr_eq(&neighbors[0], &b));
        assert!(Rc::ptr_eq(&neighbors[1], &c));
    }

    #[test]
    fn self_loop_is_detected_by_identity() {
        let a = Vertex::new("same");
        let twin = Vertex::new("same");
        a.add_neighbor(&twin);
        // equal value, different node: not a self-loop
        assert!(!Vertex::has_self_loop(&a));

        a.add_neighbor(&a);
        assert!(Vertex::has_self_loop(&a));
    }

    #[test]
    fn debug_terminates_on_cycles() {
        let a = Vertex::new("a");
        let b = Vertex::new("b");
        a.add_neighbor(&b);
        b.add_neighbor(&a);
        a.add_neighbor(&a);

        let rendered = format!("{:?}", a);
        assert!(rendered.contains("\"a\""));
        assert!(rendered.contains("\"b\""));
    }
}
