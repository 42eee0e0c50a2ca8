//! Domain logic - pure business rules independent of git operations

pub mod branch;
pub mod tag;

pub use branch::BranchContext;
pub use tag::{Granularity, TagVersion};
