//! Trace accumulation and summary metrics.
//!
//! The recorder is the only writer of a run's trace. Engines append steps
//! and events as they go; [`TraceRecorder::finish`] derives the summary:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total movement | Σ step distance (pivots and jumps included) |
//! | Elapsed time | completion time of the last step |
//! | Average seek | total movement / serviced requests |
//! | Processing order | servicing steps' `to`, in emission order |

use crate::models::{Direction, EventKind, SimulationResult, Step, StepKind, TraceEvent};
use crate::scheduler::Policy;

#[derive(Debug, Clone)]
pub(crate) struct TraceRecorder {
    policy: Policy,
    initial_position: i64,
    initial_direction: Direction,
    trace: Vec<Step>,
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new(policy: Policy, initial_position: i64, initial_direction: Direction) -> Self {
        Self {
            policy,
            initial_position,
            initial_direction,
            trace: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn record_step(&mut self, step: Step) {
        log::trace!("{}: {}", self.policy.name(), step);
        self.trace.push(step);
    }

    pub fn record_event(&mut self, time: f64, kind: EventKind) {
        let event = TraceEvent { time, kind };
        log::debug!("{}: {}", self.policy.name(), event);
        self.events.push(event);
    }

    /// Builds the immutable result.
    pub fn finish(self) -> SimulationResult {
        let total_movement: u64 = self.trace.iter().map(|s| s.distance).sum();
        let elapsed_time = self.trace.last().map_or(0.0, |s| s.completion_time);

        let mut processing_order = Vec::new();
        let mut service_order = Vec::new();
        for step in &self.trace {
            if let StepKind::Service { order, .. } = step.kind {
                processing_order.push(step.to);
                service_order.push(order);
            }
        }

        let average_seek = if processing_order.is_empty() {
            0.0
        } else {
            total_movement as f64 / processing_order.len() as f64
        };

        SimulationResult {
            policy: self.policy,
            initial_position: self.initial_position,
            initial_direction: self.initial_direction,
            trace: self.trace,
            events: self.events,
            processing_order,
            service_order,
            total_movement,
            elapsed_time,
            average_seek,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: i64, to: i64, departure: f64, kind: StepKind) -> Step {
        let distance = from.abs_diff(to);
        let arrival = departure + distance as f64;
        Step {
            from,
            to,
            distance,
            departure_time: departure,
            arrival_time: arrival,
            completion_time: arrival,
            kind,
            remaining: Vec::new(),
            buffer: Vec::new(),
        }
    }

    fn service(order: usize) -> StepKind {
        StepKind::Service {
            order,
            request_arrival: 0.0,
            intercepted: false,
        }
    }

    #[test]
    fn test_finish_metrics() {
        let mut rec = TraceRecorder::new(Policy::Scan, 50, Direction::Up);
        rec.record_step(step(50, 82, 0.0, service(1)));
        rec.record_step(step(82, 199, 32.0, StepKind::Pivot));
        rec.record_step(step(199, 43, 149.0, service(2)));

        let result = rec.finish();
        assert_eq!(result.total_movement, 32 + 117 + 156);
        assert_eq!(result.processing_order, vec![82, 43]);
        assert_eq!(result.service_order, vec![1, 2]);
        assert!((result.elapsed_time - 305.0).abs() < 1e-10);
        assert!((result.average_seek - 305.0 / 2.0).abs() < 1e-10);
        assert_eq!(result.pivot_count(), 1);
    }

    #[test]
    fn test_finish_empty() {
        let result = TraceRecorder::new(Policy::Fcfs, 50, Direction::Up).finish();
        assert_eq!(result.total_movement, 0);
        assert!(result.processing_order.is_empty());
        assert_eq!(result.elapsed_time, 0.0);
        assert_eq!(result.average_seek, 0.0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_events_kept_out_of_trace() {
        let mut rec = TraceRecorder::new(Policy::Look, 50, Direction::Up);
        rec.record_event(0.0, EventKind::Idle { until: 10.0 });
        rec.record_event(
            10.0,
            EventKind::Reversed {
                direction: Direction::Down,
            },
        );
        let result = rec.finish();
        assert_eq!(result.events.len(), 2);
        assert_eq!(result.step_count(), 0);
    }
}
