//! Simulation result model.

use serde::{Deserialize, Serialize};

use super::{Direction, Step, StepKind, TraceEvent};
use crate::scheduler::Policy;

/// Outcome of one policy run.
///
/// Created once by the trace recorder when an engine finishes and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Head position at t=0.
    pub initial_position: i64,
    /// Sweep direction at t=0.
    pub initial_direction: Direction,
    /// Every head movement, in emission order.
    pub trace: Vec<Step>,
    /// Informational log (idling, reversals, batches, interceptions).
    pub events: Vec<TraceEvent>,
    /// Serviced cylinders, in service order.
    pub processing_order: Vec<i64>,
    /// `order` of each serviced request, parallel to `processing_order`.
    pub service_order: Vec<usize>,
    /// Sum of step distances, including pivots and jumps.
    pub total_movement: u64,
    /// Completion time of the last step.
    pub elapsed_time: f64,
    /// `total_movement / serviced requests` (0 if none were serviced).
    pub average_seek: f64,
}

impl SimulationResult {
    /// Number of serviced requests.
    pub fn serviced_count(&self) -> usize {
        self.processing_order.len()
    }

    /// Number of trace steps (servicing or not).
    pub fn step_count(&self) -> usize {
        self.trace.len()
    }

    /// Servicing steps only.
    pub fn servicing_steps(&self) -> impl Iterator<Item = &Step> {
        self.trace.iter().filter(|s| s.is_servicing())
    }

    /// Number of boundary pivots.
    pub fn pivot_count(&self) -> usize {
        self.trace
            .iter()
            .filter(|s| s.kind == StepKind::Pivot)
            .count()
    }

    /// Number of circular jumps.
    pub fn jump_count(&self) -> usize {
        self.trace.iter().filter(|s| s.kind == StepKind::Jump).count()
    }

    /// Whether the run serviced nothing.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }
}
