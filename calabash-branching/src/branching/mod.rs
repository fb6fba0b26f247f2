//! Provides the structures and traits which define the branching procedure of the solver: which
//! variable to split next ([`variable_selection`]) and how to partition its domain
//! ([`value_selection`]), composed into a single decision point by a
//! [`Split`][branchers::Split].
//!
//! Variable selection runs as an incremental refinement loop driven by the search driver. Per
//! round the driver calls [`reset`][variable_selection::VariableOrder::reset], then
//! [`refine(i)`][variable_selection::VariableOrder::refine] for every `i` in
//! `0..num_refinements()` (in any order; the underlying accumulator join is commutative and
//! idempotent), and finally reads the decision through
//! [`split`][branchers::Split::split]. Covering only a subset of the indices yields a valid but
//! possibly non-minimal candidate. The round is only well-defined while the domain store is not
//! mutated concurrently; refinement must be serialized with propagation.

pub mod branchers;
mod candidates;
pub mod value_selection;
pub mod variable_selection;

pub use candidates::Candidates;
