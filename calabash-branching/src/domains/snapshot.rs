use std::rc::Rc;

use crate::basic_types::HashMap;
use crate::domains::Domain;

/// The dependency-cloning context used to snapshot a search node for parallel or speculative
/// exploration.
///
/// Several components of a branching strategy (the variable order and the value order of a
/// [`Split`][crate::branching::branchers::Split], for instance) share one reference-counted
/// handle to the same domain store. Cloning each component must not produce one store copy per
/// component: all components which shared a handle before the clone must share a single *cloned*
/// handle afterwards. The context memoises clones by handle identity to guarantee this.
pub struct SnapshotContext<A> {
    cloned: HashMap<*const A, Rc<A>>,
}

impl<A> std::fmt::Debug for SnapshotContext<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotContext")
            .field("num_cloned", &self.cloned.len())
            .finish()
    }
}

impl<A> SnapshotContext<A> {
    pub fn new() -> Self {
        SnapshotContext {
            cloned: HashMap::default(),
        }
    }
}

impl<A: Domain> SnapshotContext<A> {
    /// Returns a handle to an independent deep copy of the store behind `handle`, deferring to
    /// [`Domain::snapshot`] the first time a given store is seen and to the memo table afterwards.
    pub fn clone_handle(&mut self, handle: &Rc<A>) -> Rc<A> {
        let cloned = self
            .cloned
            .entry(Rc::as_ptr(handle))
            .or_insert_with(|| Rc::new(handle.snapshot()));
        Rc::clone(cloned)
    }
}

impl<A> Default for SnapshotContext<A> {
    fn default() -> Self {
        SnapshotContext::new()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::test_helper::IntervalBox;

    #[test]
    fn handles_to_the_same_store_clone_to_one_shared_store() {
        let store = IntervalBox::create_for_testing(vec![(0, 10)]);
        let alias = Rc::clone(&store);

        let mut context = SnapshotContext::new();
        let first = context.clone_handle(&store);
        let second = context.clone_handle(&alias);

        assert!(Rc::ptr_eq(&first, &second));
        assert!(!Rc::ptr_eq(&first, &store));
    }

    #[test]
    fn distinct_stores_clone_to_distinct_stores() {
        let store_a = IntervalBox::create_for_testing(vec![(0, 10)]);
        let store_b = IntervalBox::create_for_testing(vec![(0, 10)]);

        let mut context = SnapshotContext::new();
        let cloned_a = context.clone_handle(&store_a);
        let cloned_b = context.clone_handle(&store_b);

        assert!(!Rc::ptr_eq(&cloned_a, &cloned_b));
    }
}
