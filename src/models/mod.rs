//! Group assignment domain models.
//!
//! Provides the value types exchanged with the allocator: identifiers,
//! occupancy bounds, and the assignment result.
//!
//! # Domain Mappings
//!
//! | mug-seed | Demo seeding | Field service |
//! |----------|--------------|---------------|
//! | Employee | Employee | Technician |
//! | Group | Team | Tour |
//! | GroupBounds | Team size rule | Tour crew size |

mod assignment;
mod bounds;

pub use assignment::{EmployeeAssignment, GroupAssignment, GroupSize};
pub use bounds::GroupBounds;

/// Opaque employee identifier.
pub type EmployeeId = i64;

/// Opaque group identifier (team, tour, ...).
pub type GroupId = i64;
