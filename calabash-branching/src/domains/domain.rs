use std::fmt::Debug;

use crate::basic_types::AVar;

/// A per-variable lattice value of an abstract domain, exposing at least its lower and upper
/// bound. A variable is *fixed* when its lower bound is not strictly less than its upper bound
/// under the bound order.
pub trait Universe {
    type Bound: Copy + PartialOrd + Debug;

    fn lb(&self) -> Self::Bound;

    fn ub(&self) -> Self::Bound;
}

/// The bound type of the per-variable lattice values of the domain `A`.
pub type BoundOf<A> = <<A as Domain>::Universe as Universe>::Bound;

/// The capability interface required of an abstract-domain store.
///
/// The branching layer holds a shared, reference-counted handle (`Rc<A>`) to the store and never
/// mutates it; all operations here are read-only probes. Inconsistency of the store is surfaced
/// purely as data through [`Domain::is_top`], and callers must gate further refinement on it.
pub trait Domain {
    type Universe: Universe;

    /// The number of variables currently declared in the domain's environment. Variables may be
    /// added to the environment over the lifetime of a problem; the count never shrinks.
    fn num_variables(&self) -> usize;

    /// The handle of the variable at `index` in the environment's declaration order, or [`None`]
    /// if `index` is out of range.
    fn to_avar(&self, index: usize) -> Option<AVar>;

    /// Reads the current lattice value of `var`.
    fn project(&self, var: AVar) -> Self::Universe;

    /// Whether the domain has reached top, i.e. signals global inconsistency. A `true` result
    /// means the subtree is dead and refinement should stop.
    fn is_top(&self) -> bool;

    /// Produces an independent deep copy of the store. This is the sanctioned mechanism for
    /// giving a parallel search branch its own domain state; it is invoked through a
    /// [`SnapshotContext`][crate::domains::SnapshotContext] so that components sharing one handle
    /// keep sharing one clone.
    fn snapshot(&self) -> Self
    where
        Self: Sized;
}
