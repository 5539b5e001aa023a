//! Simulation quality metrics (KPIs).
//!
//! Computes standard disk-scheduling performance indicators from a
//! completed simulation result.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Response time | completion - request arrival |
//! | Wait time | head arrival at cylinder - request arrival |
//! | Throughput | serviced requests / elapsed time |
//! | Interceptions | services that cut a planned move short |
//! | Pivots / Jumps | non-servicing boundary and circular moves |
//!
//! # Reference
//! Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 11.5

use serde::{Deserialize, Serialize};

use crate::models::{SimulationResult, StepKind};

/// Simulation performance indicators.
///
/// Time values are in the simulation's time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Number of serviced requests.
    pub serviced: usize,
    /// Mean response time over serviced requests.
    pub avg_response_time: f64,
    /// Largest response time of any single request.
    pub max_response_time: f64,
    /// Mean wait before the head reached the request's cylinder.
    pub avg_wait_time: f64,
    /// Serviced requests per time unit (0 when no time elapsed).
    pub throughput: f64,
    /// Services reached by interception.
    pub interceptions: usize,
    /// Boundary moves.
    pub pivots: usize,
    /// Circular relocations.
    pub jumps: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    pub fn calculate(result: &SimulationResult) -> Self {
        let mut serviced: usize = 0;
        let mut total_response: f64 = 0.0;
        let mut max_response: f64 = 0.0;
        let mut total_wait: f64 = 0.0;
        let mut interceptions: usize = 0;

        for step in &result.trace {
            if let StepKind::Service {
                request_arrival,
                intercepted,
                ..
            } = step.kind
            {
                serviced += 1;
                let response = step.completion_time - request_arrival;
                total_response += response;
                max_response = max_response.max(response);
                total_wait += step.arrival_time - request_arrival;
                if intercepted {
                    interceptions += 1;
                }
            }
        }

        let (avg_response_time, avg_wait_time) = if serviced == 0 {
            (0.0, 0.0)
        } else {
            (
                total_response / serviced as f64,
                total_wait / serviced as f64,
            )
        };

        let throughput = if result.elapsed_time > 0.0 {
            serviced as f64 / result.elapsed_time
        } else {
            0.0
        };

        Self {
            serviced,
            avg_response_time,
            max_response_time: max_response,
            avg_wait_time,
            throughput,
            interceptions,
            pivots: result.pivot_count(),
            jumps: result.jump_count(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_response: f64, min_throughput: f64) -> bool {
        self.max_response_time <= max_response && self.throughput >= min_throughput
    }
}
