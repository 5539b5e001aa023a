//! Input validation for disk scheduling runs.
//!
//! Checks the caller's contract before any engine starts. Detects:
//! - Degenerate cylinder bounds
//! - Head or request positions outside the bounds
//! - Negative or non-finite arrival instants and timing parameters
//! - Duplicate request order numbers
//! - A zero batch size for the N-step policies
//!
//! Nothing is clamped: every violation is reported.

use std::collections::HashSet;

use crate::models::DiskRequest;
use crate::scheduler::{Policy, SimulationConfig};

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
    /// `max_cylinder <= min_cylinder`.
    DegenerateBounds,
    /// The initial head position lies outside the bounds.
    InitialPositionOutOfBounds,
    /// A request targets a cylinder outside the bounds.
    PositionOutOfBounds,
    /// A request's arrival instant is negative, NaN or infinite.
    InvalidArrivalTime,
    /// A timing parameter is negative, NaN or infinite.
    InvalidTiming,
    /// Two requests share the same order number.
    DuplicateOrder,
    /// An N-step policy was given N = 0.
    InvalidBatchSize,
    /// The disk is so wide that total movement could overflow `u64`.
    SpanTooLarge,
}

/// Upper bound on trace steps per serviced request: a pivot, a jump and
/// the service itself.
const MAX_STEPS_PER_REQUEST: u64 = 3;

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation run.
///
/// Checks:
/// 1. `min_cylinder < max_cylinder`
/// 2. Initial position within bounds
/// 3. Timing parameters finite and non-negative
/// 4. Every request within bounds with a finite, non-negative arrival
/// 5. No duplicate order numbers
/// 6. Batch size of N-step policies at least 1
/// 7. Worst-case total movement (`span * 3 * requests`) fits in `u64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    config: &SimulationConfig,
    requests: &[DiskRequest],
    policy: Policy,
) -> ValidationResult {
    let mut errors = Vec::new();
    let (min, max) = (config.min_cylinder, config.max_cylinder);

    let bounds_ok = max > min;
    if !bounds_ok {
        errors.push(ValidationError::new(
            ValidationErrorKind::DegenerateBounds,
            format!("Maximum cylinder ({max}) must exceed minimum cylinder ({min})"),
        ));
    }

    if bounds_ok && !(min..=max).contains(&config.initial_position) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InitialPositionOutOfBounds,
            format!(
                "Initial position {} is outside {min}-{max}",
                config.initial_position
            ),
        ));
    }

    for (name, value) in [
        ("time per cylinder", config.time_per_cylinder),
        ("time per request", config.time_per_request),
    ] {
        if !value.is_finite() || value < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTiming,
                format!("Invalid {name}: {value}"),
            ));
        }
    }

    let mut orders = HashSet::new();
    for req in requests {
        if bounds_ok && !(min..=max).contains(&req.position) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PositionOutOfBounds,
                format!(
                    "Request #{} targets cylinder {} outside {min}-{max}",
                    req.order, req.position
                ),
            ));
        }

        if !req.arrival_time.is_finite() || req.arrival_time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!(
                    "Request #{} has invalid arrival time {}",
                    req.order, req.arrival_time
                ),
            ));
        }

        if !orders.insert(req.order) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateOrder,
                format!("Duplicate request order: {}", req.order),
            ));
        }
    }

    if bounds_ok {
        let span = max.abs_diff(min);
        let steps = (requests.len() as u64).saturating_mul(MAX_STEPS_PER_REQUEST);
        if span.checked_mul(steps).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SpanTooLarge,
                format!(
                    "Cylinder span {span} is too wide for {} requests",
                    requests.len()
                ),
            ));
        }
    }

    if policy.batch_size() == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBatchSize,
            format!("{} requires a batch size of at least 1", policy.name()),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
