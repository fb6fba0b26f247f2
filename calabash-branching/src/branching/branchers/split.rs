//! A brancher which composes a single [`VariableOrder`] with a single [`ValueOrder`].

use std::marker::PhantomData;

use crate::branching::value_selection::ValueOrder;
use crate::branching::variable_selection::VariableOrder;
use crate::domains::Domain;
use crate::domains::SnapshotContext;

/// Composes a [`VariableOrder`] and a [`ValueOrder`] independently of one another into a complete
/// branching strategy.
///
/// Variable selection and value partitioning are orthogonal axes of a branching heuristic (e.g.
/// a first-fail variable choice versus a bisecting value choice); keeping them behind two
/// independently substitutable strategies, joined only at [`Split::split`], lets the search
/// driver mix and match heuristics without touching the composition.
pub struct Split<A, VarOrder, ValOrder>
where
    A: Domain,
    VarOrder: VariableOrder<A>,
    ValOrder: ValueOrder<A>,
{
    /// The variable order of the [`Split`]; determines which (unfixed) variable to branch on
    /// next.
    variable_order: VarOrder,
    /// The value order of the [`Split`]; determines how the domain of the selected variable is
    /// partitioned.
    value_order: ValOrder,
    /// [`PhantomData`] to ensure that the domain type is bound to the [`Split`].
    domain_type: PhantomData<A>,
}

impl<A, VarOrder, ValOrder> std::fmt::Debug for Split<A, VarOrder, ValOrder>
where
    A: Domain,
    VarOrder: VariableOrder<A>,
    ValOrder: ValueOrder<A>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Split").finish()
    }
}

impl<A, VarOrder, ValOrder> Split<A, VarOrder, ValOrder>
where
    A: Domain,
    VarOrder: VariableOrder<A>,
    ValOrder: ValueOrder<A>,
{
    pub fn new(variable_order: VarOrder, value_order: ValOrder) -> Self {
        Split {
            variable_order,
            value_order,
            domain_type: PhantomData,
        }
    }

    /// Delegates to the variable order; see [`VariableOrder::interpret`].
    pub fn interpret(&mut self) {
        self.variable_order.interpret();
    }

    /// Delegates to the variable order; see [`VariableOrder::is_top`].
    pub fn is_top(&self) -> bool {
        self.variable_order.is_top()
    }

    /// Delegates to the variable order; see [`VariableOrder::num_refinements`].
    pub fn num_refinements(&self) -> usize {
        self.variable_order.num_refinements()
    }

    /// Delegates to the variable order; see [`VariableOrder::refine`]. The [`Split`] itself
    /// carries no refinement state.
    pub fn refine(&mut self, i: usize) -> bool {
        self.variable_order.refine(i)
    }

    /// Delegates to the variable order; see [`VariableOrder::reset`].
    pub fn reset(&mut self) {
        self.variable_order.reset();
    }

    /// The branching decision for this node:
    /// - if the variable order projects a variable, the value order turns it into a disjunctive
    ///   partition of its domain;
    /// - otherwise the empty/default branch is returned, signalling that no further decomposition
    ///   is possible for this node.
    pub fn split(&mut self) -> ValOrder::Branch {
        self.variable_order
            .project()
            .map(|var| self.value_order.split(var))
            .unwrap_or_default()
    }

    /// An independent copy of the whole strategy. Both orders are cloned through the same
    /// `context`, so a variable order and value order which shared a domain keep sharing the
    /// single cloned domain.
    pub fn snapshot(&self, context: &mut SnapshotContext<A>) -> Self {
        Split {
            variable_order: self.variable_order.snapshot(context),
            value_order: self.value_order.snapshot(context),
            domain_type: PhantomData,
        }
    }
}
