//! Input validation for group allocation.
//!
//! Checks allocation inputs before any randomness is consumed. Detects:
//! - Duplicate employee or group IDs
//! - Negative bounds
//! - Maximum below minimum
//! - Too few employees to give every group its minimum
//!
//! Empty employee or group lists are not validated against the bounds:
//! with nothing to place (or nowhere to place it) the bounds are moot.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{EmployeeId, GroupBounds, GroupId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees or two groups share the same ID.
    DuplicateId,
    /// `min_per_group` or `max_per_group` is negative.
    NegativeBound,
    /// `max_per_group` is less than `min_per_group`.
    InvertedBounds,
    /// Fewer employees than `groups * min_per_group`.
    InsufficientPopulation,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a group allocation.
///
/// Checks:
/// 1. No duplicate employee IDs
/// 2. No duplicate group IDs
/// 3. Both bounds non-negative (only when both lists are non-empty)
/// 4. `max_per_group >= min_per_group` (only when both lists are non-empty)
/// 5. Enough employees for every group's minimum (only when 3 and 4 pass)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_allocation(
    employee_ids: &[EmployeeId],
    group_ids: &[GroupId],
    bounds: &GroupBounds,
) -> ValidationResult {
    let mut errors = Vec::new();

    check_unique(employee_ids, "employee", &mut errors);
    check_unique(group_ids, "group", &mut errors);

    if !employee_ids.is_empty() && !group_ids.is_empty() {
        check_bounds(employee_ids.len(), group_ids.len(), bounds, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_unique(ids: &[i64], entity: &str, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::with_capacity(ids.len());
    let mut reported = HashSet::new();
    for &id in ids {
        if !seen.insert(id) && reported.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
}

fn check_bounds(
    employee_count: usize,
    group_count: usize,
    bounds: &GroupBounds,
    errors: &mut Vec<ValidationError>,
) {
    let GroupBounds {
        min_per_group: min,
        max_per_group: max,
    } = *bounds;

    if min < 0 || max < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeBound,
            format!("Group bounds must be non-negative (min {min}, max {max})"),
        ));
        return;
    }

    if max < min {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedBounds,
            format!("Maximum per group ({max}) is below minimum per group ({min})"),
        ));
        return;
    }

    let required = bounds.required_population(group_count);
    if (employee_count as u128) < required {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientPopulation,
            format!(
                "{employee_count} employees cannot fill {group_count} groups with at least {min} each ({required} required)"
            ),
        ));
    }
}
