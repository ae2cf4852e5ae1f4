//! Seed configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::SeedError;
use crate::models::{GroupBounds, GroupId};

/// Configuration for a seeding run.
///
/// # Example
///
/// ```
/// use mug_seed::seed::SeedConfig;
///
/// let config = SeedConfig::from_json(r#"{
///     "seed": 42,
///     "groupings": [
///         {"name": "teams", "group_ids": [1, 2], "bounds": {"min_per_group": 1, "max_per_group": 4}}
///     ]
/// }"#).unwrap();
/// assert_eq!(config.groupings[0].name, "teams");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Fixed seed for reproducible runs; thread-local randomness otherwise.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Groupings to allocate, in order.
    #[serde(default)]
    pub groupings: Vec<GroupingConfig>,
}

/// One kind of grouping (e.g. teams) to allocate employees into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupingConfig {
    /// Unique grouping name.
    pub name: String,
    /// Groups of this kind.
    pub group_ids: Vec<GroupId>,
    /// Occupancy bounds applied to every group of this kind.
    pub bounds: GroupBounds,
}

impl SeedConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Adds a grouping.
    pub fn with_grouping(mut self, grouping: GroupingConfig) -> Self {
        self.groupings.push(grouping);
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

impl GroupingConfig {
    /// Creates a grouping.
    pub fn new(name: impl Into<String>, group_ids: Vec<GroupId>, bounds: GroupBounds) -> Self {
        Self {
            name: name.into(),
            group_ids,
            bounds,
        }
    }
}
