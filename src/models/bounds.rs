//! Per-group occupancy bounds.

use serde::{Deserialize, Serialize};

/// Minimum and maximum number of employees per group.
///
/// Bounds are signed so that negative values coming from configuration
/// can be reported by validation instead of being rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBounds {
    /// Every group receives at least this many employees.
    pub min_per_group: i64,
    /// No group receives more than this many employees.
    pub max_per_group: i64,
}

impl GroupBounds {
    /// Creates bounds from a minimum and maximum.
    pub fn new(min_per_group: i64, max_per_group: i64) -> Self {
        Self {
            min_per_group,
            max_per_group,
        }
    }

    /// Bounds that fix every group to exactly `size` employees.
    pub fn exact(size: i64) -> Self {
        Self::new(size, size)
    }

    /// Bounds with no minimum and the given capacity.
    pub fn up_to(max_per_group: i64) -> Self {
        Self::new(0, max_per_group)
    }

    /// Whether both bounds are non-negative and `min <= max`.
    pub fn is_consistent(&self) -> bool {
        self.min_per_group >= 0
            && self.max_per_group >= 0
            && self.max_per_group >= self.min_per_group
    }

    /// Employees needed to bring `group_count` groups to their minimum.
    ///
    /// Saturates instead of overflowing; negative minimums count as zero.
    pub fn required_population(&self, group_count: usize) -> u128 {
        let min = self.min_per_group.max(0) as u128;
        min.saturating_mul(group_count as u128)
    }
}
