//! Seed planner: runs the allocator for every configured grouping.

use std::collections::HashSet;

use log::info;
use thiserror::Error;

use super::SeedConfig;
use crate::allocator::{AssignmentSummary, GroupAllocator};
use crate::models::{EmployeeId, GroupAssignment};
use crate::random::{RandomSource, RngSource};
use crate::validation::ValidationError;

/// Errors raised while loading or running a seed plan.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse seed config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("grouping '{0}' is configured more than once")]
    DuplicateGrouping(String),
    #[error("grouping '{grouping}' could not be allocated: {source}")]
    Allocation {
        grouping: String,
        #[source]
        source: ValidationError,
    },
}

/// Allocation results keyed by grouping name, in configuration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedPlan {
    /// `(grouping name, assignment)` pairs.
    pub groupings: Vec<(String, GroupAssignment)>,
}

impl SeedPlan {
    /// Result of a grouping by name.
    pub fn get(&self, name: &str) -> Option<&GroupAssignment> {
        self.groupings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    /// Grouping names in configuration order.
    pub fn names(&self) -> Vec<&str> {
        self.groupings.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groupings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groupings.is_empty()
    }
}

/// Runs the allocator once per configured grouping.
///
/// # Example
///
/// ```
/// use mug_seed::models::GroupBounds;
/// use mug_seed::seed::{GroupingConfig, SeedConfig, SeedPlanner};
///
/// let config = SeedConfig::new()
///     .with_seed(42)
///     .with_grouping(GroupingConfig::new("teams", vec![1, 2], GroupBounds::new(2, 3)))
///     .with_grouping(GroupingConfig::new("tours", vec![10, 11, 12], GroupBounds::new(1, 2)));
///
/// let employees: Vec<i64> = (100..106).collect();
/// let plan = SeedPlanner::new(config).plan(&employees).unwrap();
///
/// assert_eq!(plan.names(), vec!["teams", "tours"]);
/// assert!(plan.get("teams").unwrap().is_fully_assigned());
/// ```
#[derive(Debug, Clone)]
pub struct SeedPlanner {
    config: SeedConfig,
}

impl SeedPlanner {
    /// Creates a planner for the given configuration.
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// The configuration this planner runs.
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Plans every grouping with the configured randomness.
    ///
    /// Uses a seeded generator when the configuration has a seed, the
    /// thread-local generator otherwise.
    pub fn plan(&self, employee_ids: &[EmployeeId]) -> Result<SeedPlan, SeedError> {
        match self.config.seed {
            Some(seed) => self.plan_with(employee_ids, &mut RngSource::seeded(seed)),
            None => self.plan_with(employee_ids, &mut RngSource::thread()),
        }
    }

    /// Plans every grouping, drawing from `source`.
    ///
    /// Groupings are allocated in configuration order from the same
    /// source. Stops at the first grouping that fails validation.
    pub fn plan_with<S: RandomSource + ?Sized>(
        &self,
        employee_ids: &[EmployeeId],
        source: &mut S,
    ) -> Result<SeedPlan, SeedError> {
        let mut names = HashSet::new();
        for grouping in &self.config.groupings {
            if !names.insert(grouping.name.as_str()) {
                return Err(SeedError::DuplicateGrouping(grouping.name.clone()));
            }
        }

        let mut plan = SeedPlan::default();
        for grouping in &self.config.groupings {
            let assignment = GroupAllocator::new(grouping.bounds)
                .allocate(employee_ids, &grouping.group_ids, source)
                .map_err(|err| SeedError::Allocation {
                    grouping: grouping.name.clone(),
                    source: err,
                })?;

            let summary = AssignmentSummary::calculate(&assignment);
            info!(
                "seeded grouping '{}': {}/{} employees across {} groups (sizes {}..={})",
                grouping.name,
                summary.assigned,
                summary.total_employees,
                summary.group_count,
                summary.smallest_group.unwrap_or(0),
                summary.largest_group.unwrap_or(0)
            );

            plan.groupings.push((grouping.name.clone(), assignment));
        }

        Ok(plan)
    }
}
