//! Two-phase balanced allocator.
//!
//! # Algorithm
//!
//! 1. Shuffle all employee IDs once.
//! 2. Minimum fill: walk the groups in input order and hand each one
//!    `min_per_group` employees from the front of the shuffled queue.
//! 3. Overflow: while employees remain, collect the groups below
//!    `max_per_group`; stop if there are none, otherwise draw one of them
//!    uniformly and give it the next employee.
//! 4. Whatever remains of the queue is unassigned.
//!
//! The overflow draw is uniform over the groups that are still open, so a
//! group's chance of receiving the next employee rises as others fill up.
//!
//! # Complexity
//! O(e * g) where e=employees, g=groups; the open-group set is rebuilt
//! for every overflow placement.

use std::collections::HashMap;

use log::{debug, warn};

use crate::models::{
    EmployeeAssignment, EmployeeId, GroupAssignment, GroupBounds, GroupId, GroupSize,
};
use crate::random::{shuffle, RandomSource};
use crate::validation::{validate_allocation, ValidationError};

/// Distributes employees across groups within per-group bounds.
///
/// # Example
///
/// ```
/// use mug_seed::allocator::GroupAllocator;
/// use mug_seed::models::GroupBounds;
/// use mug_seed::random::LowerBound;
///
/// let allocator = GroupAllocator::new(GroupBounds::new(1, 3));
/// let employees: Vec<i64> = (1..=9).collect();
/// let result = allocator
///     .allocate(&employees, &[101, 102, 103], &mut LowerBound)
///     .unwrap();
///
/// assert!(result.is_fully_assigned());
/// assert_eq!(result.size_of(101), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupAllocator {
    bounds: GroupBounds,
}

impl GroupAllocator {
    /// Creates an allocator for the given bounds.
    pub fn new(bounds: GroupBounds) -> Self {
        Self { bounds }
    }

    /// The bounds this allocator enforces.
    pub fn bounds(&self) -> GroupBounds {
        self.bounds
    }

    /// Assigns each employee to at most one group.
    ///
    /// If either list is empty, returns every employee unassigned and every
    /// group at size 0 without checking the bounds.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found by
    /// [`validate_allocation`]: duplicate IDs, negative or inverted bounds,
    /// or too few employees for every group's minimum.
    pub fn allocate<S: RandomSource + ?Sized>(
        &self,
        employee_ids: &[EmployeeId],
        group_ids: &[GroupId],
        source: &mut S,
    ) -> Result<GroupAssignment, ValidationError> {
        if let Err(mut errors) = validate_allocation(employee_ids, group_ids, &self.bounds) {
            debug!("group allocation rejected with {} error(s)", errors.len());
            if !errors.is_empty() {
                return Err(errors.swap_remove(0));
            }
        }

        if employee_ids.is_empty() || group_ids.is_empty() {
            debug!(
                "nothing to allocate ({} employees, {} groups)",
                employee_ids.len(),
                group_ids.len()
            );
            return Ok(GroupAssignment::unassigned(employee_ids, group_ids));
        }

        // Both bounds are validated non-negative at this point.
        let min = usize::try_from(self.bounds.min_per_group).unwrap_or(usize::MAX);
        let max = usize::try_from(self.bounds.max_per_group).unwrap_or(usize::MAX);

        let queue = shuffle(employee_ids, source);
        let mut sizes = vec![0usize; group_ids.len()];
        let mut placed: HashMap<EmployeeId, GroupId> = HashMap::with_capacity(queue.len());
        let mut cursor = 0;

        // Minimum fill
        for (slot, &group_id) in group_ids.iter().enumerate() {
            for &employee_id in &queue[cursor..cursor + min] {
                placed.insert(employee_id, group_id);
            }
            sizes[slot] += min;
            cursor += min;
        }
        debug!(
            "minimum fill placed {cursor} of {} employees across {} groups",
            queue.len(),
            group_ids.len()
        );

        // Overflow
        while cursor < queue.len() {
            let open: Vec<usize> = (0..group_ids.len()).filter(|&g| sizes[g] < max).collect();
            if open.is_empty() {
                break;
            }
            let last = open.len() - 1;
            let slot = open[source.random_int(0, last).min(last)];
            placed.insert(queue[cursor], group_ids[slot]);
            sizes[slot] += 1;
            cursor += 1;
        }

        let unassigned_employee_ids = queue[cursor..].to_vec();
        if !unassigned_employee_ids.is_empty() {
            warn!(
                "{} of {} employees left unassigned: all {} groups at capacity {max}",
                unassigned_employee_ids.len(),
                queue.len(),
                group_ids.len()
            );
        }

        Ok(GroupAssignment {
            by_employee_id: employee_ids
                .iter()
                .map(|&employee_id| EmployeeAssignment {
                    employee_id,
                    group_id: placed.get(&employee_id).copied(),
                })
                .collect(),
            group_sizes: group_ids
                .iter()
                .zip(sizes)
                .map(|(&group_id, size)| GroupSize { group_id, size })
                .collect(),
            unassigned_employee_ids,
        })
    }
}

/// Assigns employees to groups with a one-off [`GroupAllocator`].
pub fn assign_employees_to_groups<S: RandomSource + ?Sized>(
    employee_ids: &[EmployeeId],
    group_ids: &[GroupId],
    bounds: &GroupBounds,
    source: &mut S,
) -> Result<GroupAssignment, ValidationError> {
    GroupAllocator::new(*bounds).allocate(employee_ids, group_ids, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{LowerBound, RngSource, ScriptedSource};
    use crate::validation::ValidationErrorKind;

    fn employees(range: std::ops::RangeInclusive<i64>) -> Vec<EmployeeId> {
        range.collect()
    }

    fn assert_invariants(result: &GroupAssignment, employee_ids: &[i64], group_ids: &[i64]) {
        // Coverage: one entry per employee, in input order
        let keys: Vec<i64> = result.by_employee_id.iter().map(|a| a.employee_id).collect();
        assert_eq!(keys, employee_ids);
        for a in &result.by_employee_id {
            if let Some(g) = a.group_id {
                assert!(group_ids.contains(&g), "unknown group {g}");
            }
        }

        // Sizes match mapping
        let groups: Vec<i64> = result.group_sizes.iter().map(|g| g.group_id).collect();
        assert_eq!(groups, group_ids);
        for g in &result.group_sizes {
            assert_eq!(result.members_of(g.group_id).len(), g.size);
        }

        // Unassigned list matches None entries
        let mut none: Vec<i64> = result
            .by_employee_id
            .iter()
            .filter(|a| a.group_id.is_none())
            .map(|a| a.employee_id)
            .collect();
        let mut unassigned = result.unassigned_employee_ids.clone();
        none.sort_unstable();
        unassigned.sort_unstable();
        assert_eq!(none, unassigned);

        // Conservation
        assert_eq!(
            result.assigned_count() + result.unassigned_employee_ids.len(),
            employee_ids.len()
        );
    }

    #[test]
    fn test_scenario_all_assigned() {
        let emps = employees(1..=9);
        let groups = [101, 102, 103];
        let result =
            assign_employees_to_groups(&emps, &groups, &GroupBounds::new(1, 3), &mut LowerBound)
                .unwrap();

        assert_invariants(&result, &emps, &groups);
        for g in &result.group_sizes {
            assert!((1..=3).contains(&g.size));
        }
        assert!(result.is_fully_assigned());
    }

    #[test]
    fn test_lower_bound_is_reproducible() {
        // Shuffle under LowerBound yields [2..=9, 1]; minimum fill takes 2, 3, 4;
        // overflow always picks the first open group.
        let emps = employees(1..=9);
        let result = assign_employees_to_groups(
            &emps,
            &[101, 102, 103],
            &GroupBounds::new(1, 3),
            &mut LowerBound,
        )
        .unwrap();

        assert_eq!(result.members_of(101), vec![2, 5, 6]);
        assert_eq!(result.members_of(102), vec![3, 7, 8]);
        assert_eq!(result.members_of(103), vec![1, 4, 9]);

        let again = assign_employees_to_groups(
            &emps,
            &[101, 102, 103],
            &GroupBounds::new(1, 3),
            &mut LowerBound,
        )
        .unwrap();
        assert_eq!(result, again);
    }

    #[test]
    fn test_scenario_saturation() {
        let emps = employees(1..=12);
        let groups = [201, 202, 203];
        let result =
            assign_employees_to_groups(&emps, &groups, &GroupBounds::new(1, 3), &mut LowerBound)
                .unwrap();

        assert_invariants(&result, &emps, &groups);
        for g in &result.group_sizes {
            assert_eq!(g.size, 3);
        }
        assert_eq!(result.unassigned_employee_ids.len(), 3);
        for id in &result.unassigned_employee_ids {
            assert_eq!(result.group_of(*id), Some(None));
        }
        // Cursor order, not input order
        assert_eq!(result.unassigned_employee_ids, vec![11, 12, 1]);
    }

    #[test]
    fn test_scenario_no_employees() {
        let result =
            assign_employees_to_groups(&[], &[1, 2], &GroupBounds::new(4, 9), &mut LowerBound)
                .unwrap();
        assert!(result.by_employee_id.is_empty());
        assert_eq!(result.size_of(1), Some(0));
        assert_eq!(result.size_of(2), Some(0));
        assert!(result.unassigned_employee_ids.is_empty());
    }

    #[test]
    fn test_scenario_inverted_bounds() {
        let err = assign_employees_to_groups(
            &employees(1..=5),
            &[1, 2],
            &GroupBounds::new(2, 1),
            &mut LowerBound,
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InvertedBounds);
    }

    #[test]
    fn test_no_groups_ignores_invalid_bounds() {
        let emps = employees(1..=4);
        let result =
            assign_employees_to_groups(&emps, &[], &GroupBounds::new(3, -1), &mut LowerBound)
                .unwrap();
        assert!(result.group_sizes.is_empty());
        assert_eq!(result.unassigned_employee_ids, emps);
        assert!(result.by_employee_id.iter().all(|a| a.group_id.is_none()));
    }

    #[test]
    fn test_degenerate_path_draws_nothing() {
        let mut source = ScriptedSource::new(vec![0]);
        assign_employees_to_groups(&employees(1..=3), &[], &GroupBounds::new(0, 1), &mut source)
            .unwrap();
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn test_insufficient_population() {
        let err = assign_employees_to_groups(
            &employees(1..=5),
            &[1, 2, 3],
            &GroupBounds::new(2, 4),
            &mut LowerBound,
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::InsufficientPopulation);
    }

    #[test]
    fn test_negative_bound() {
        let err = assign_employees_to_groups(
            &employees(1..=5),
            &[1],
            &GroupBounds::new(-1, 4),
            &mut LowerBound,
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NegativeBound);
    }

    #[test]
    fn test_duplicate_employee_rejected() {
        let err = assign_employees_to_groups(
            &[1, 2, 2],
            &[10],
            &GroupBounds::new(0, 5),
            &mut LowerBound,
        )
        .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_zero_capacity_leaves_everyone_unassigned() {
        let emps = employees(1..=4);
        let result =
            assign_employees_to_groups(&emps, &[1, 2], &GroupBounds::new(0, 0), &mut LowerBound)
                .unwrap();
        assert_invariants(&result, &emps, &[1, 2]);
        assert_eq!(result.assigned_count(), 0);
        assert_eq!(result.unassigned_employee_ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_exact_minimum_uses_no_overflow_draws() {
        let mut draws = 0usize;
        let mut source = |min: usize, _max: usize| {
            draws += 1;
            min
        };
        let emps = employees(1..=6);
        let result =
            assign_employees_to_groups(&emps, &[1, 2, 3], &GroupBounds::exact(2), &mut source)
                .unwrap();
        assert!(result.is_fully_assigned());
        // Only the shuffle draws: len - 1
        assert_eq!(draws, 5);
    }

    #[test]
    fn test_overflow_picks_among_open_groups_only() {
        // Shuffle draws (4 for 5 employees) then overflow draws.
        // Draw 1 on the first overflow picks group 20, which then fills (max 2),
        // leaving a single open group for the next placement.
        let mut draws: Vec<(usize, usize)> = Vec::new();
        let mut script = ScriptedSource::new(vec![0, 0, 0, 0, 1, 0, 0]);
        let mut source = |min: usize, max: usize| {
            draws.push((min, max));
            script.random_int(min, max)
        };
        let emps = employees(1..=5);
        let result =
            assign_employees_to_groups(&emps, &[10, 20], &GroupBounds::new(1, 2), &mut source)
                .unwrap();

        assert_eq!(result.size_of(10), Some(2));
        assert_eq!(result.size_of(20), Some(2));
        assert_eq!(result.unassigned_employee_ids.len(), 1);
        assert_eq!(&draws[4..], &[(0, 1), (0, 0)]);
    }

    #[test]
    fn test_random_inputs_hold_invariants() {
        let mut source = RngSource::seeded(42);
        for round in 0..200i64 {
            let emp_count = round % 23;
            let group_count = round % 5;
            let emps: Vec<i64> = (0..emp_count).map(|i| 1000 + i).collect();
            let groups: Vec<i64> = (0..group_count).map(|i| 10 + i).collect();
            let min = if group_count == 0 {
                0
            } else {
                (round % 3).min(emp_count / group_count)
            };
            let max = min + (round % 4);
            let bounds = GroupBounds::new(min, max);

            let result = assign_employees_to_groups(&emps, &groups, &bounds, &mut source).unwrap();
            assert_invariants(&result, &emps, &groups);
            if !emps.is_empty() {
                for g in &result.group_sizes {
                    assert!(g.size >= min as usize && g.size <= max as usize);
                }
            }
            // Unassigned only when every group is full
            if !result.unassigned_employee_ids.is_empty() && !groups.is_empty() {
                assert!(result.group_sizes.iter().all(|g| g.size == max as usize));
            }
        }
    }

    #[test]
    fn test_allocator_reuse() {
        let allocator = GroupAllocator::new(GroupBounds::new(2, 2));
        assert_eq!(allocator.bounds(), GroupBounds::exact(2));
        let mut source = RngSource::seeded(3);
        let a = allocator.allocate(&[1, 2, 3, 4], &[7, 8], &mut source).unwrap();
        let b = allocator.allocate(&[5, 6], &[9], &mut source).unwrap();
        assert!(a.is_fully_assigned());
        assert!(b.is_fully_assigned());
        assert_eq!(b.members_of(9), vec![5, 6]);
    }
}
