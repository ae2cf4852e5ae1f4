//! Balanced group allocation and assignment metrics.
//!
//! # Algorithm
//!
//! `GroupAllocator` shuffles the employees once, fills every group to its
//! minimum in group order, then places the remaining employees one at a
//! time into a uniformly chosen group that is still below its maximum.
//! Employees left over once every group is full stay unassigned.
//!
//! # Summary
//!
//! `AssignmentSummary` computes occupancy metrics over a finished
//! assignment: assigned/unassigned counts, smallest and largest group,
//! spread, and fill rate.

mod balanced;
mod summary;

pub use balanced::{assign_employees_to_groups, GroupAllocator};
pub use summary::AssignmentSummary;
