use std::rc::Rc;

use log::warn;
use num::traits::PrimInt;

use crate::basic_types::AVar;
use crate::basic_types::Decreasing;
use crate::branching::variable_selection::VariableOrder;
use crate::branching::Candidates;
use crate::calabash_assert_moderate;
use crate::domains::BoundOf;
use crate::domains::Domain;
use crate::domains::SnapshotContext;
use crate::domains::Universe;

/// A [`VariableOrder`] which selects the unfixed variable with the smallest bound-width (based on
/// the lower and upper bound, disregarding holes), breaking ties towards the smallest index.
///
/// The width/index pairs are joined into the accumulator lexicographically, so the refinement
/// loop has the same monotonicity, commutativity and reset contract as
/// [`InputOrder`][crate::branching::variable_selection::InputOrder].
pub struct FirstFail<A: Domain> {
    candidates: Candidates<A>,
    smallest: Decreasing<(BoundOf<A>, usize)>,
}

impl<A: Domain> std::fmt::Debug for FirstFail<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstFail")
            .field("candidates", &self.candidates)
            .finish()
    }
}

impl<A: Domain> FirstFail<A> {
    pub fn new(domain: Rc<A>) -> Self {
        if domain.num_variables() == 0 {
            warn!("The FirstFail variable order was created over an empty environment");
        }
        FirstFail {
            candidates: Candidates::new(domain),
            smallest: Decreasing::bottom(),
        }
    }
}

impl<A: Domain> VariableOrder<A> for FirstFail<A>
where
    BoundOf<A>: PrimInt,
{
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
        let (lb, ub) = (x.lb(), x.ub());
        if lb < ub {
            self.smallest.tighten((ub - lb, i))
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.smallest.reset();
    }

    fn project(&self) -> Option<AVar> {
        self.smallest
            .get()
            .and_then(|(_, i)| self.candidates.get(i))
    }

    fn snapshot(&self, context: &mut SnapshotContext<A>) -> Self {
        FirstFail {
            candidates: self.candidates.snapshot(context),
            smallest: self.smallest,
        }
    }
}
