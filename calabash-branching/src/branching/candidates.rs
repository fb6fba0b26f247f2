use std::rc::Rc;

use crate::basic_types::AVar;
use crate::domains::Domain;
use crate::domains::SnapshotContext;

/// The state shared by every variable-order strategy: a shared, read-only handle to the domain
/// store together with the cached, ordered list of candidate variables materialized from the
/// store's environment.
pub struct Candidates<A> {
    domain: Rc<A>,
    vars: Vec<AVar>,
}

impl<A> std::fmt::Debug for Candidates<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidates").field("vars", &self.vars).finish()
    }
}

impl<A: Domain> Candidates<A> {
    pub fn new(domain: Rc<A>) -> Self {
        Candidates {
            domain,
            vars: Vec::new(),
        }
    }

    /// Pulls the domain's current environment and rebuilds the cached candidate list in
    /// environment order, but only when the cached length diverges from the environment's current
    /// size (i.e. new variables were introduced). A no-op otherwise, so calling this repeatedly
    /// is cheap; allocation is confined to the rebuild.
    pub fn interpret(&mut self) {
        let num_variables = self.domain.num_variables();
        if self.vars.len() != num_variables {
            self.vars.clear();
            self.vars.reserve(num_variables);
            self.vars
                .extend((0..num_variables).filter_map(|i| self.domain.to_avar(i)));
        }
    }

    /// Forwards the domain's global-inconsistency test; a `true` result means the subtree is dead
    /// and callers must stop refining.
    pub fn is_top(&self) -> bool {
        self.domain.is_top()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<AVar> {
        self.vars.get(index).copied()
    }

    pub fn domain(&self) -> &A {
        &self.domain
    }

    /// An independent copy bound to the cloned domain reachable through `context`, with the
    /// cached candidate list copied by value.
    pub fn snapshot(&self, context: &mut SnapshotContext<A>) -> Self {
        Candidates {
            domain: context.clone_handle(&self.domain),
            vars: self.vars.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::IntervalBox;

    #[test]
    fn interpret_materializes_candidates_in_environment_order() {
        let store = IntervalBox::create_for_testing(vec![(0, 10), (5, 20), (1, 1)]);
        let mut candidates = Candidates::new(Rc::clone(&store));
        assert!(candidates.is_empty());

        candidates.interpret();

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates.get(0), store.to_avar(0));
        assert_eq!(candidates.get(1), store.to_avar(1));
        assert_eq!(candidates.get(2), store.to_avar(2));
        assert_eq!(candidates.get(3), None);
    }

    #[test]
    fn interpret_is_idempotent_while_the_environment_is_unchanged() {
        let store = IntervalBox::create_for_testing(vec![(0, 10), (5, 20)]);
        let mut candidates = Candidates::new(Rc::clone(&store));

        candidates.interpret();
        let before: Vec<_> = (0..candidates.len()).map(|i| candidates.get(i)).collect();
        candidates.interpret();
        let after: Vec<_> = (0..candidates.len()).map(|i| candidates.get(i)).collect();

        assert_eq!(before, after);
    }

    #[test]
    fn interpret_picks_up_newly_declared_variables() {
        let store = IntervalBox::create_for_testing(vec![(0, 10)]);
        let mut candidates = Candidates::new(Rc::clone(&store));
        candidates.interpret();
        assert_eq!(candidates.len(), 1);

        let new_var = store.declare(3, 7);
        candidates.interpret();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates.get(1), Some(new_var));
    }

    #[test]
    fn is_top_forwards_the_domain_test() {
        let store = IntervalBox::create_for_testing(vec![(0, 10)]);
        let candidates = Candidates::new(Rc::clone(&store));
        assert!(!candidates.is_top());

        store.mark_top();
        assert!(candidates.is_top());
    }
}
