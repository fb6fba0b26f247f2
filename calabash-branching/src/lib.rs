//! # Calabash branching
//! The branching layer of the Calabash abstract-interpretation constraint solver: given a shared,
//! lattice-ordered store of variable domains, it decides which variable to split next and how to
//! partition its domain in order to drive a branch-and-bound search tree.
//!
//! The layer is built from three components which are composed leaf-to-root:
//! - A [`VariableOrder`][branching::variable_selection::VariableOrder] selects the next variable
//!   to branch on through an incremental refinement loop; [`InputOrder`] and [`FirstFail`] are the
//!   provided implementations.
//! - A [`ValueOrder`][branching::value_selection::ValueOrder] partitions the domain of a single
//!   variable into a disjunctive [`Branch`][basic_types::Branch]; [`InDomainSplit`] and
//!   [`InDomainMin`] are the provided implementations.
//! - A [`Split`][branching::branchers::Split] composes one strategy of each kind into the single
//!   entry point the search driver interacts with.
//!
//! The abstract-domain store itself is an external collaborator; this crate only depends on the
//! capability interfaces in [`domains`]. Constraint propagation, search-tree management and
//! solution optimality are the driver's responsibility.
//!
//! [`InputOrder`]: branching::variable_selection::InputOrder
//! [`FirstFail`]: branching::variable_selection::FirstFail
//! [`InDomainSplit`]: branching::value_selection::InDomainSplit
//! [`InDomainMin`]: branching::value_selection::InDomainMin

pub mod asserts;
pub mod basic_types;
pub mod branching;
pub mod domains;

#[cfg(test)]
pub(crate) mod test_helper;
