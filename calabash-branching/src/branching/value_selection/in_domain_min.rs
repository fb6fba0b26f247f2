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

/// A [`ValueOrder`] which tries the lower bound of the variable first, branching on
/// `[x == lb] \/ [x >= lb + 1]`.
pub struct InDomainMin<A> {
    domain: Rc<A>,
}

impl<A> std::fmt::Debug for InDomainMin<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InDomainMin").finish()
    }
}

impl<A: Domain> InDomainMin<A> {
    pub fn new(domain: Rc<A>) -> Self {
        InDomainMin { domain }
    }
}

impl<A: Domain> ValueOrder<A> for InDomainMin<A>
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
        Branch::new(vec![
            Predicate::equal(var, lb),
            Predicate::lower_bound(var, lb + <BoundOf<A>>::one()),
        ])
    }

    fn snapshot(&self, context: &mut SnapshotContext<A>) -> Self {
        InDomainMin {
            domain: context.clone_handle(&self.domain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::IntervalBox;

    #[test]
    fn test_returns_correct_branch() {
        let store = IntervalBox::create_for_testing(vec![(3, 7)]);
        let var = store.to_avar(0).unwrap();
        let mut order = InDomainMin::new(Rc::clone(&store));

        let branch = order.split(var);

        assert_eq!(
            branch,
            Branch::new(vec![
                Predicate::equal(var, 3),
                Predicate::lower_bound(var, 4),
            ])
        );
    }
}
