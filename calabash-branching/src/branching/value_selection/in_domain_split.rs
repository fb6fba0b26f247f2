use std::rc::Rc;

use num::traits::PrimInt;
use num::One;

use crate::basic_types::AVar;
use crate::basic_types::Branch;
use crate::basic_types::Predicate;
use crate::branching::value_selection::ValueOrder;
use crate::calabash_assert_advanced;
use crate::domains::BoundOf;
use crate::domains::Domain;
use crate::domains::SnapshotContext;
use crate::domains::Universe;

/// A [`ValueOrder`] which splits the domain in half (based on the lower and upper bound,
/// disregarding holes), branching on `[x <= mid] \/ [x >= mid + 1]`.
///
/// Note that this strategy will not necessarily result in an equal split if there are holes in
/// the domain.
pub struct InDomainSplit<A> {
    domain: Rc<A>,
}

impl<A> std::fmt::Debug for InDomainSplit<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InDomainSplit").finish()
    }
}

impl<A: Domain> InDomainSplit<A> {
    pub fn new(domain: Rc<A>) -> Self {
        InDomainSplit { domain }
    }
}

impl<A: Domain> ValueOrder<A> for InDomainSplit<A>
where
    BoundOf<A>: PrimInt,
{
    type Branch = Branch<BoundOf<A>>;

    fn split(&mut self, var: AVar) -> Self::Branch {
        let x = self.domain.project(var);
        let (lb, ub) = (x.lb(), x.ub());
        calabash_assert_advanced!(
            lb < ub,
            "the domain of {var} should have at least 2 values in it, it should have been \
             reported as fixed and not selected"
        );
        let one = <BoundOf<A>>::one();
        let middle = lb + (ub - lb) / (one + one);
        Branch::new(vec![
            Predicate::upper_bound(var, middle),
            Predicate::lower_bound(var, middle + one),
        ])
    }

    fn snapshot(&self, context: &mut SnapshotContext<A>) -> Self {
        InDomainSplit {
            domain: context.clone_handle(&self.domain),
        }
    }
}
