//! Input validation for maintenance task records.
//!
//! Checks record integrity before tasks are saved or displayed. Detects:
//! - Duplicate task IDs
//! - Empty descriptions
//! - Missing or unknown equipment references
//! - Due dates that cannot be read
//!
//! Validation is separate from classification: an invalid due date still
//! classifies (as `Unknown`), it just also shows up here.

use chrono::{Offset, Utc};
use std::collections::HashSet;

use crate::models::{parse_calendar_date, MaintenanceTask};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending task ID.
    pub task_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A task has a blank description.
    EmptyDescription,
    /// A task has no equipment reference.
    MissingEquipment,
    /// A task references equipment that doesn't exist.
    UnknownEquipment,
    /// A task's due date is not a recognizable date.
    InvalidDueDate,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, task_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            task_id: task_id.to_string(),
            message: message.into(),
        }
    }
}

/// Validates a collection of tasks against the known equipment IDs.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. Every task has a non-blank description
/// 3. Every task names equipment, and that equipment exists
/// 4. Every due date parses
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[MaintenanceTask], equipment_ids: &[&str]) -> ValidationResult {
    let mut errors = Vec::new();
    let known: HashSet<&str> = equipment_ids.iter().copied().collect();
    let zone = Utc.fix();

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &task.id,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.description.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyDescription,
                &task.id,
                format!("Task '{}' has no description", task.id),
            ));
        }

        if task.equipment_id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingEquipment,
                &task.id,
                format!("Task '{}' has no equipment", task.id),
            ));
        } else if !known.contains(task.equipment_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownEquipment,
                &task.id,
                format!(
                    "Task '{}' references unknown equipment '{}'",
                    task.id, task.equipment_id
                ),
            ));
        }

        if parse_calendar_date(&task.due_date, &zone).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDueDate,
                &task.id,
                format!("Task '{}' has unreadable due date '{}'", task.id, task.due_date),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
