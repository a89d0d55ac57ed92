use std::rc::Rc;

use hashbrown::HashSet;

use crate::sets::visited::VisitorSet;

/// A visited set keyed on node *identity* rather than node value.
///
/// Membership is decided by the address behind the `Rc` handle, so two
/// distinct nodes carrying equal data are tracked separately, and the same
/// node reached through different handles is recognized as already seen.
///
/// The stored addresses are only ever used as identity tokens; they are valid
/// for the lifetime of the traversal because the caller's graph outlives the
/// per-call set.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use wayfarer::sets::visited::{IdentitySet, VisitorSet};
///
/// let node = Rc::new("n");
/// let twin = Rc::new("n");
///
/// let mut visited = IdentitySet::new();
/// visited.set(&node);
/// assert!(visited.get(&node));
/// assert!(!visited.get(&twin)); // equal value, different node
/// ```
pub struct IdentitySet<N> {
    seen: HashSet<*const N>,
}

impl<N> IdentitySet<N> {
    pub fn new() -> Self {
        IdentitySet {
            seen: HashSet::new(),
        }
    }

    /// Number of distinct nodes visited so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<N> Default for IdentitySet<N> {
    fn default() -> Self {
        IdentitySet::new()
    }
}

impl<N> VisitorSet<Rc<N>> for IdentitySet<N> {
    fn get(&self, node: &Rc<N>) -> bool {
        self.seen.contains(&Rc::as_ptr(node))
    }

    fn set(&mut self, node: &Rc<N>) {
        self.seen.insert(Rc::as_ptr(node));
    }
}
