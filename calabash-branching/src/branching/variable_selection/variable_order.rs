use crate::basic_types::AVar;
use crate::domains::Domain;
use crate::domains::SnapshotContext;

/// A trait containing the interface for variable-order strategies: the refinement hooks the
/// search driver drives each round, and the projection which yields the selected variable.
///
/// Per round the driver is expected to call [`VariableOrder::reset`], then
/// [`VariableOrder::refine`] for each index in `[0, num_refinements())`, and finally read the
/// selection through [`VariableOrder::project`]. Refinement is monotone under the assumption
/// that no variable's bounds are mutated between successive `refine` calls within the same
/// round; a domain which is narrowed concurrently with refinement yields *a* correct unfixed
/// variable at the time of its own read, but not necessarily a round-consistent optimum.
pub trait VariableOrder<A: Domain> {
    /// Pulls the domain's current environment and rebuilds the cached candidate variables if new
    /// variables were introduced; a no-op otherwise. Must be called before the first
    /// refine/split cycle and again whenever variables may have been added to the domain.
    fn interpret(&mut self);

    /// Forwards the domain's global-inconsistency test; callers must treat a `true` result as
    /// "stop refining, this subtree is dead".
    fn is_top(&self) -> bool;

    /// The number of candidate variables; defines the index range `[0, num_refinements())` the
    /// driver iterates over once per round.
    fn num_refinements(&self) -> usize;

    /// One refinement step for candidate index `i`. Returns `true` if the step changed the
    /// strategy's selection accumulator. Out-of-range indices and refinement on a domain which is
    /// already top are ignored (returning `false`).
    fn refine(&mut self, i: usize) -> bool;

    /// Returns the selection accumulator to bottom ("no candidate"). Must be called exactly once
    /// between consuming a round's result and beginning the next round's `refine` calls.
    fn reset(&mut self);

    /// The variable selected by the refinement round, or [`None`] if no unfixed variable was
    /// observed (the node is a candidate leaf).
    fn project(&self) -> Option<AVar>;

    /// An independent copy of this strategy bound to the cloned domain reachable through
    /// `context`, for snapshotting a search node.
    fn snapshot(&self, context: &mut SnapshotContext<A>) -> Self
    where
        Self: Sized;
}
