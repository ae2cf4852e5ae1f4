//! Demo seeding on top of the allocator.
//!
//! A seed configuration names one or more groupings (teams, tours, ...),
//! each with its own group IDs and bounds. The planner runs the allocator
//! once per grouping over the same employee population, sharing a single
//! random source, and collects the results by name.

mod config;
mod planner;

pub use config::{GroupingConfig, SeedConfig};
pub use planner::{SeedError, SeedPlan, SeedPlanner};
