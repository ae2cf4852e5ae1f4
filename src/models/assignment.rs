//! Assignment (allocation result) model.
//!
//! A group assignment maps every input employee to at most one group and
//! records the resulting occupancy of every input group. Both lists keep
//! the caller's input order; employees that could not be placed are also
//! listed separately in the order the allocator reached them.

use serde::{Deserialize, Serialize};

use super::{EmployeeId, GroupId};

/// The result of distributing employees across groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAssignment {
    /// One entry per input employee, in input order.
    pub by_employee_id: Vec<EmployeeAssignment>,
    /// One entry per input group, in input order.
    pub group_sizes: Vec<GroupSize>,
    /// Employees mapped to no group, in allocation order.
    pub unassigned_employee_ids: Vec<EmployeeId>,
}

/// An employee and the group it was placed in, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAssignment {
    /// Employee identifier.
    pub employee_id: EmployeeId,
    /// Assigned group; `None` when the employee is unassigned.
    pub group_id: Option<GroupId>,
}

/// Number of employees placed in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSize {
    /// Group identifier.
    pub group_id: GroupId,
    /// Employees assigned to this group.
    pub size: usize,
}

impl GroupAssignment {
    /// Builds the all-unassigned result for the given inputs.
    ///
    /// Every employee maps to `None`, every group has size 0, and the
    /// unassigned list equals `employee_ids` in input order.
    pub fn unassigned(employee_ids: &[EmployeeId], group_ids: &[GroupId]) -> Self {
        Self {
            by_employee_id: employee_ids
                .iter()
                .map(|&employee_id| EmployeeAssignment {
                    employee_id,
                    group_id: None,
                })
                .collect(),
            group_sizes: group_ids
                .iter()
                .map(|&group_id| GroupSize { group_id, size: 0 })
                .collect(),
            unassigned_employee_ids: employee_ids.to_vec(),
        }
    }

    /// Looks up an employee's group.
    ///
    /// Returns `None` if the employee was not part of the input,
    /// `Some(None)` if it was left unassigned.
    pub fn group_of(&self, employee_id: EmployeeId) -> Option<Option<GroupId>> {
        self.by_employee_id
            .iter()
            .find(|a| a.employee_id == employee_id)
            .map(|a| a.group_id)
    }

    /// Size of a group, or `None` if the group was not part of the input.
    pub fn size_of(&self, group_id: GroupId) -> Option<usize> {
        self.group_sizes
            .iter()
            .find(|g| g.group_id == group_id)
            .map(|g| g.size)
    }

    /// Employees assigned to a group, in input order.
    pub fn members_of(&self, group_id: GroupId) -> Vec<EmployeeId> {
        self.by_employee_id
            .iter()
            .filter(|a| a.group_id == Some(group_id))
            .map(|a| a.employee_id)
            .collect()
    }

    /// Number of employees placed in some group.
    pub fn assigned_count(&self) -> usize {
        self.group_sizes.iter().map(|g| g.size).sum()
    }

    /// Total number of input employees.
    #[inline]
    pub fn employee_count(&self) -> usize {
        self.by_employee_id.len()
    }

    /// Whether every employee was placed.
    pub fn is_fully_assigned(&self) -> bool {
        self.unassigned_employee_ids.is_empty()
    }
}
