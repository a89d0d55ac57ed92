/// Visited-node tracking for a single traversal.
///
/// Every top-level traversal owns one fresh implementor and threads it through
/// the recursion; `get` before descending into a node and `set` on first visit
/// together guarantee termination on any finite graph, cycles included.
pub trait VisitorSet<I: ?Sized> {
    fn get(&self, id: &I) -> bool;
    fn set(&mut self, id: &I);
}
