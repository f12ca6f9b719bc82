//! Input validation for scheduling batches.
//!
//! Checks structural integrity of a process batch before any discipline
//! runs. Detects:
//! - Empty batches
//! - Non-positive burst times
//! - Negative arrival times and zero IDs
//! - Duplicate IDs
//! - Schedules whose total length does not fit in `i64`
//!
//! Discipline parameters (the round-robin quantum) are checked by
//! [`Discipline::validate`](crate::disciplines::Discipline::validate).

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The batch is empty or contains a malformed process.
    InvalidBatch,
    /// A discipline parameter is out of range.
    InvalidParameter,
    /// Two processes share the same ID.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process batch.
///
/// Checks:
/// 1. The batch has at least one process
/// 2. Every process has `burst_time > 0`
/// 3. Every process has `arrival_time >= 0`
/// 4. Every process ID is positive
/// 5. No duplicate process IDs
/// 6. `max(arrival_time) + sum(burst_time)` fits in `i64`, which bounds
///    every clock value any discipline reaches
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidBatch,
            "Batch contains no processes",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBatch,
                "Process ID must be positive, got 0",
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBatch,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBatch,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    let latest_arrival = processes.iter().map(|p| p.arrival_time.max(0)).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time.max(0)));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBatch,
            "Total schedule length overflows",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> Vec<Process> {
        vec![
            Process::new(1, 6),
            Process::new(2, 8).with_arrival_time(1),
            Process::new(3, 7).with_priority(2),
        ]
    }

    #[test]
    fn test_valid_batch() {
        assert!(validate_batch(&sample_batch()).is_ok());
    }

    #[test]
    fn test_empty_batch() {
        let errors = validate_batch(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBatch);
    }

    #[test]
    fn test_zero_burst_rejected() {
        let batch = vec![Process::new(1, 5), Process::new(2, 0)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBatch && e.message.contains("burst")));
    }

    #[test]
    fn test_negative_burst_rejected() {
        let errors = validate_batch(&[Process::new(1, -3)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBatch);
    }

    #[test]
    fn test_negative_arrival_rejected() {
        let errors = validate_batch(&[Process::new(1, 3).with_arrival_time(-1)]).unwrap_err();
        assert!(errors[0].message.contains("arrival"));
    }

    #[test]
    fn test_zero_id_rejected() {
        let errors = validate_batch(&[Process::new(0, 3)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBatch);
    }

    #[test]
    fn test_duplicate_id() {
        let batch = vec![Process::new(1, 5), Process::new(1, 2)];
        let errors = validate_batch(&batch).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_overflowing_total_length_rejected() {
        let half = i64::MAX / 2 + 1;
        let errors = validate_batch(&[Process::new(1, half), Process::new(2, half)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBatch);
        assert!(errors[0].message.contains("overflows"));
    }

    #[test]
    fn test_late_arrival_counts_toward_length() {
        let batch = vec![Process::new(1, 10).with_arrival_time(i64::MAX - 5)];
        assert!(validate_batch(&batch).is_err());

        let fits = vec![Process::new(1, 5).with_arrival_time(i64::MAX - 5)];
        assert!(validate_batch(&fits).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate ID + zero burst on the same process
        let batch = vec![Process::new(1, 5), Process::new(1, 0)];
        let errors = validate_batch(&batch).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
