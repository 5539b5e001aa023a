//! Trace records.
//!
//! A trace is the append-only list of head movements produced by one
//! simulation run. Informational events (idling, reversals, batch
//! formation, interceptions) are kept apart from it so they never affect
//! the numeric results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Direction;

/// One head movement.
///
/// Records that the head travelled from `from` to `to`, leaving at
/// `departure_time`. Servicing steps additionally spend the per-request
/// service time at the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Cylinder the head left.
    pub from: i64,
    /// Cylinder the head stopped at.
    pub to: i64,
    /// `|to - from|`.
    pub distance: u64,
    /// Instant the head started moving.
    pub departure_time: f64,
    /// Instant the head reached `to`.
    pub arrival_time: f64,
    /// Instant the head became free again (arrival + service time).
    pub completion_time: f64,
    /// Why the head moved.
    pub kind: StepKind,
    /// Positions left in the working set once this step's target is removed.
    pub remaining: Vec<i64>,
    /// Positions of arrived requests held outside a sealed batch.
    pub buffer: Vec<i64>,
}

/// Classification of head movements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepKind {
    /// Moved to a request and serviced it.
    Service {
        /// `order` of the serviced request.
        order: usize,
        /// Arrival instant of the serviced request.
        request_arrival: f64,
        /// The request flagged the head down on its way elsewhere.
        intercepted: bool,
    },
    /// Non-servicing move to a disk boundary.
    Pivot,
    /// Non-servicing circular relocation (C-SCAN / C-LOOK).
    Jump,
}

impl Step {
    /// Whether this step serviced a request.
    #[inline]
    pub fn is_servicing(&self) -> bool {
        matches!(self.kind, StepKind::Service { .. })
    }

    /// Whether this step serviced an intercepting request.
    #[inline]
    pub fn is_intercept(&self) -> bool {
        matches!(
            self.kind,
            StepKind::Service {
                intercepted: true,
                ..
            }
        )
    }

    /// Travel time only (excludes service time).
    #[inline]
    pub fn travel_time(&self) -> f64 {
        self.arrival_time - self.departure_time
    }

    /// Direction the head moved in, `None` for a zero-distance step.
    pub fn direction(&self) -> Option<Direction> {
        if self.to == self.from {
            None
        } else {
            Some(Direction::of_travel(self.from, self.to))
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T={:.2}: {} -> {} ({})",
            self.departure_time, self.from, self.to, self.distance
        )?;
        match self.kind {
            StepKind::Service {
                intercepted: true, ..
            } => write!(f, " [intercept]"),
            StepKind::Service { .. } => Ok(()),
            StepKind::Pivot => write!(f, " [pivot]"),
            StepKind::Jump => write!(f, " [jump]"),
        }
    }
}

/// An informational log entry. Not part of the numeric trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Simulated instant of the event.
    pub time: f64,
    pub kind: EventKind,
}

/// Classification of informational events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Nothing eligible; the clock jumped forward.
    Idle { until: f64 },
    /// The sweep direction flipped.
    Reversed { direction: Direction },
    /// A frozen or N-step batch was sealed.
    BatchFormed { size: usize },
    /// A pending request overtook the planned target.
    Intercepted {
        order: usize,
        position: i64,
        planned: i64,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T={:.2}: ", self.time)?;
        match &self.kind {
            EventKind::Idle { until } => write!(f, "idle until T={until:.2}"),
            EventKind::Reversed { direction } => write!(f, "reversing to {direction}"),
            EventKind::BatchFormed { size } => write!(f, "batch sealed with {size} requests"),
            EventKind::Intercepted {
                order,
                position,
                planned,
            } => write!(
                f,
                "request #{order} at {position} intercepts move toward {planned}"
            ),
        }
    }
}
