//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulator.
///
/// Normal scheduling outcomes (nothing ahead, empty queues) are handled
/// inside the engines. Only malformed input reaches the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("invalid simulation input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SimulationError {
    /// Validation problems carried by this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
