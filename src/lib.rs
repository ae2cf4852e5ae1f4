//! Balanced group assignment for demo seeding.
//!
//! Distributes employees across groups (teams, tours) so that every group
//! reaches a minimum occupancy before any group grows past it, and no group
//! exceeds a maximum. Randomness is injected, so allocations are
//! reproducible under a fixed source.
//!
//! # Modules
//!
//! - **`models`**: Value types — `GroupBounds`, `GroupAssignment`,
//!   `EmployeeAssignment`, `GroupSize`
//! - **`random`**: `RandomSource` trait, `rand` adapter, deterministic
//!   sources, Fisher-Yates shuffle
//! - **`allocator`**: Two-phase balanced allocator and assignment metrics
//! - **`validation`**: Input checks (duplicate IDs, bound consistency,
//!   population sufficiency)
//! - **`seed`**: JSON-configured seeding runs over several groupings
//!
//! # Example
//!
//! ```
//! use mug_seed::allocator::assign_employees_to_groups;
//! use mug_seed::models::GroupBounds;
//! use mug_seed::random::RngSource;
//!
//! let employees: Vec<i64> = (1..=12).collect();
//! let result = assign_employees_to_groups(
//!     &employees,
//!     &[201, 202, 203],
//!     &GroupBounds::new(1, 3),
//!     &mut RngSource::seeded(42),
//! )
//! .unwrap();
//!
//! // Capacity is 9, so three employees stay unassigned.
//! assert_eq!(result.unassigned_employee_ids.len(), 3);
//! ```

pub mod allocator;
pub mod models;
pub mod random;
pub mod seed;
pub mod validation;
