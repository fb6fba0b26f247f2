use crate::basic_types::AVar;
use crate::domains::Domain;
use crate::domains::SnapshotContext;

/// A trait containing the interface for value-order strategies: turning one selected variable
/// into a disjunctive partition of its domain (the branch).
pub trait ValueOrder<A: Domain> {
    /// The branch produced by this strategy. The default value must represent "no branch", which
    /// is what [`Split`][crate::branching::branchers::Split] returns when no variable is left to
    /// split.
    type Branch: Default;

    /// Partitions the domain of `var` into a finite disjunction of sub-problems. The domain of
    /// `var` must hold at least 2 values (it would otherwise not have been selected by the
    /// variable order).
    fn split(&mut self, var: AVar) -> Self::Branch;

    /// An independent copy of this strategy bound to the cloned domain reachable through
    /// `context`, for snapshotting a search node.
    fn snapshot(&self, context: &mut SnapshotContext<A>) -> Self
    where
        Self: Sized;
}
