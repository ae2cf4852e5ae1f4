//! Assignment quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned | Employees placed in some group |
//! | Unassigned | Employees left out once all groups were full |
//! | Smallest / Largest | Minimum and maximum group size |
//! | Spread | Largest - smallest group size |
//! | Fill Rate | Assigned / total employees |

use serde::{Deserialize, Serialize};

use crate::models::GroupAssignment;

/// Occupancy indicators for a finished assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    /// Number of input employees.
    pub total_employees: usize,
    /// Employees placed in a group.
    pub assigned: usize,
    /// Employees placed in no group.
    pub unassigned: usize,
    /// Number of input groups.
    pub group_count: usize,
    /// Size of the smallest group (`None` without groups).
    pub smallest_group: Option<usize>,
    /// Size of the largest group (`None` without groups).
    pub largest_group: Option<usize>,
    /// Fraction of employees placed (0.0..1.0, 1.0 when there are none).
    pub fill_rate: f64,
}

impl AssignmentSummary {
    /// Computes the summary of an assignment.
    pub fn calculate(assignment: &GroupAssignment) -> Self {
        let total_employees = assignment.employee_count();
        let assigned = assignment.assigned_count();
        let sizes = assignment.group_sizes.iter().map(|g| g.size);

        let fill_rate = if total_employees == 0 {
            1.0
        } else {
            assigned as f64 / total_employees as f64
        };

        Self {
            total_employees,
            assigned,
            unassigned: assignment.unassigned_employee_ids.len(),
            group_count: assignment.group_sizes.len(),
            smallest_group: sizes.clone().min(),
            largest_group: sizes.max(),
            fill_rate,
        }
    }

    /// Difference between the largest and smallest group (0 without groups).
    pub fn spread(&self) -> usize {
        match (self.smallest_group, self.largest_group) {
            (Some(lo), Some(hi)) => hi - lo,
            _ => 0,
        }
    }

    /// Whether no group differs from another by more than `tolerance`.
    pub fn is_balanced(&self, tolerance: usize) -> bool {
        self.spread() <= tolerance
    }
}
