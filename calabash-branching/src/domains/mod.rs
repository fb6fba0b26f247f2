//! Capability interfaces required of the abstract-domain store, together with the glue types the
//! store and the branching layer share: the logical-variable [`Environment`] and the
//! dependency-cloning [`SnapshotContext`].
//!
//! The store itself (lattice arithmetic, constraint propagation, fixpoint iteration) is an
//! external collaborator; the branching layer only probes it read-only through [`Domain`].

mod domain;
mod environment;
mod snapshot;

pub use domain::*;
pub use environment::*;
pub use snapshot::SnapshotContext;
