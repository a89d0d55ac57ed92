use std::hash::Hash;

use hashbrown::HashSet;

use crate::sets::visited::VisitorSet;

/// A visited set keyed on node value, for graphs whose nodes are map keys
/// rather than heap objects.
pub struct KeySet<T> {
    seen: HashSet<T>,
}

impl<T: Eq + Hash> KeySet<T> {
    pub fn new() -> Self {
        KeySet {
            seen: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<T: Eq + Hash> Default for KeySet<T> {
    fn default() -> Self {
        KeySet::new()
    }
}

impl<T: Eq + Hash + Clone> VisitorSet<T> for KeySet<T> {
    fn get(&self, key: &T) -> bool {
        self.seen.contains(key)
    }

    fn set(&mut self, key: &T) {
        self.seen.insert(key.clone());
    }
}
