mod avar;
mod branch;
mod decreasing;
mod hash_structures;
mod predicate;

pub use avar::AVar;
pub use branch::Branch;
pub use decreasing::Decreasing;
pub use hash_structures::*;
pub use predicate::Predicate;
