use std::rc::Rc;

use log::warn;

use crate::basic_types::AVar;
use crate::basic_types::Decreasing;
use crate::branching::variable_selection::VariableOrder;
use crate::branching::Candidates;
use crate::calabash_assert_moderate;
use crate::domains::Domain;
use crate::domains::SnapshotContext;
use crate::domains::Universe;

/// A [`VariableOrder`] which selects the first variable which is not yet fixed, in environment
/// order. This deterministic left-to-right heuristic is useful as a default and as a baseline for
/// comparison with more sophisticated orders.
pub struct InputOrder<A> {
    candidates: Candidates<A>,
    smallest: Decreasing<usize>,
}

impl<A> std::fmt::Debug for InputOrder<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputOrder")
            .field("candidates", &self.candidates)
            .field("smallest", &self.smallest)
            .finish()
    }
}

impl<A: Domain> InputOrder<A> {
    pub fn new(domain: Rc<A>) -> Self {
        if domain.num_variables() == 0 {
            warn!("The InputOrder variable order was created over an empty environment");
        }
        InputOrder {
            candidates: Candidates::new(domain),
            smallest: Decreasing::bottom(),
        }
    }
}

impl<A: Domain> VariableOrder<A> for InputOrder<A> {
    fn interpret(&mut self) {
        self.candidates.interpret();
    }

    fn is_top(&self) -> bool {
        self.candidates.is_top()
    }

    fn num_refinements(&self) -> usize {
        self.candidates.len()
    }

    fn refine(&mut self, i: usize) -> bool {
        calabash_assert_moderate!(
            i < self.candidates.len(),
            "refine was called with index {i} but there are only {} candidate variables",
            self.candidates.len()
        );
        let Some(var) = self.candidates.get(i) else {
            return false;
        };
        if self.candidates.is_top() {
            return false;
        }
        let x = self.candidates.domain().project(var);
        // Monotone under the assumption that the bounds of `var` are not narrowed between two
        // invocations of refine within the same round.
        if x.lb() < x.ub() {
            self.smallest.tighten(i)
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.smallest.reset();
    }

    fn project(&self) -> Option<AVar> {
        self.smallest.get().and_then(|i| self.candidates.get(i))
    }

    fn snapshot(&self, context: &mut SnapshotContext<A>) -> Self {
        InputOrder {
            candidates: self.candidates.snapshot(context),
            smallest: self.smallest,
        }
    }
}
