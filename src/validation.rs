//! Input validation for simulation runs.
//!
//! The policies assume well-formed input and never fail; callers run these
//! checks first to reject what the engine would otherwise mis-handle:
//! - Duplicate or empty pids
//! - Negative arrivals
//! - Non-positive bursts
//! - Round Robin quantum below 1, zero step limit

use std::collections::HashSet;
use std::fmt;

use crate::config::SimulationConfig;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// A pid is empty or whitespace.
    EmptyPid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time.
    NonPositiveBurst,
    /// Round Robin quantum below 1.
    InvalidTimeQuantum,
    /// Step limit of zero.
    InvalidStepLimit,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
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

/// Validates a process set.
///
/// Checks:
/// 1. Every pid is non-empty
/// 2. No duplicate pids
/// 3. `arrival >= 0`
/// 4. `burst >= 1`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for (position, p) in processes.iter().enumerate() {
        if p.pid.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPid,
                format!("Process at position {position} has an empty pid"),
            ));
        } else if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' arrives at negative time {}", p.pid, p.arrival),
            ));
        }

        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has burst {} (must be >= 1)", p.pid, p.burst),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates simulation parameters.
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.time_quantum < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeQuantum,
            format!("Time quantum {} must be >= 1", config.time_quantum),
        ));
    }

    if config.step_limit == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidStepLimit,
            "Step limit must be positive",
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

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3).with_priority(2),
            Process::new("P3", 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_pid() {
        let procs = vec![Process::new("P1", 0, 1), Process::new("P1", 2, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicatePid);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_empty_pid() {
        let procs = vec![Process::new("  ", 0, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyPid));
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new("P1", -1, 2)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_non_positive_burst() {
        let procs = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -4)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
                .count(),
            2
        );
    }

    #[test]
    fn test_multiple_errors() {
        let procs = vec![Process::new("", -3, 0), Process::new("P1", 0, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_config_valid() {
        assert!(validate_config(&SimulationConfig::default()).is_ok());
    }

    #[test]
    fn test_config_invalid() {
        let config = SimulationConfig::default()
            .with_time_quantum(0)
            .with_step_limit(0);
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTimeQuantum));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidStepLimit));
    }

    #[test]
    fn test_error_display() {
        let config = SimulationConfig::default().with_time_quantum(-1);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].to_string(), "Time quantum -1 must be >= 1");
    }
}
