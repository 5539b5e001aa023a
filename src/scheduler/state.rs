//! Mutable state of one simulation run.
//!
//! Owns the head, the queues and the recorder. Every head movement goes
//! through [`EngineState::serve`], [`EngineState::pivot`] or
//! [`EngineState::jump`], so time, position and trace always agree.

use crate::dispatching::{find_intercept, DispatchContext, PlannedMove};
use crate::models::{
    Direction, DiskRequest, EventKind, HeadState, SimulationResult, Step, StepKind,
};
use crate::scheduler::queue::RequestQueues;
use crate::scheduler::recorder::TraceRecorder;
use crate::scheduler::{Policy, SimulationConfig};

pub(crate) struct EngineState {
    pub head: HeadState,
    pub queues: RequestQueues,
    recorder: TraceRecorder,
    min_cylinder: i64,
    max_cylinder: i64,
    time_per_cylinder: f64,
    time_per_request: f64,
    /// Record held-back arrivals in each step's buffer.
    track_buffer: bool,
}

impl EngineState {
    pub fn new(
        policy: Policy,
        config: &SimulationConfig,
        requests: &[DiskRequest],
    ) -> Self {
        Self {
            head: HeadState::new(config.initial_position, config.direction),
            queues: RequestQueues::new(requests),
            recorder: TraceRecorder::new(policy, config.initial_position, config.direction),
            min_cylinder: config.min_cylinder,
            max_cylinder: config.max_cylinder,
            time_per_cylinder: config.time_per_cylinder,
            time_per_request: config.time_per_request,
            track_buffer: false,
        }
    }

    /// Enables the held-back buffer snapshot (frozen and N-step engines).
    pub fn enable_buffer_tracking(&mut self) {
        self.track_buffer = true;
    }

    pub fn context(&self) -> DispatchContext {
        DispatchContext::at(self.head.position, self.head.direction)
            .with_bounds(self.min_cylinder, self.max_cylinder)
    }

    #[inline]
    pub fn is_drained(&self) -> bool {
        self.queues.is_drained()
    }

    /// Admits every request eligible at the current time.
    pub fn admit(&mut self) -> usize {
        self.queues.admit(self.head.time)
    }

    /// Jumps the clock to the next pending arrival if it lies in the future.
    ///
    /// Returns whether time advanced.
    pub fn idle_until_next_arrival(&mut self) -> bool {
        match self.queues.next_arrival() {
            Some(next) if next > self.head.time => {
                self.recorder
                    .record_event(self.head.time, EventKind::Idle { until: next });
                self.head.time = next;
                true
            }
            _ => false,
        }
    }

    /// Flips the sweep direction in place.
    pub fn reverse(&mut self) {
        self.head.reverse();
        self.recorder.record_event(
            self.head.time,
            EventKind::Reversed {
                direction: self.head.direction,
            },
        );
    }

    pub fn note_batch(&mut self, size: usize) {
        self.recorder
            .record_event(self.head.time, EventKind::BatchFormed { size });
    }

    /// Pending request that flags the head down on its way to `to`.
    ///
    /// Logs the interception when one is found.
    pub fn intercept(&mut self, to: i64, direction: Direction) -> Option<usize> {
        let planned = PlannedMove {
            from: self.head.position,
            to,
            departure_time: self.head.time,
            time_per_cylinder: self.time_per_cylinder,
            direction,
        };
        let hit = find_intercept(self.queues.requests(), self.queues.pending(), &planned)?;
        let req = self.queues.request(hit.index);
        let kind = EventKind::Intercepted {
            order: req.order,
            position: req.position,
            planned: to,
        };
        self.recorder.record_event(self.head.time, kind);
        Some(hit.index)
    }

    /// Moves to request `idx`, services it and removes it from its queue.
    pub fn serve(&mut self, idx: usize, intercepted: bool) {
        let req = self.queues.request(idx);
        let (to, order, request_arrival) = (req.position, req.order, req.arrival_time);
        let kind = StepKind::Service {
            order,
            request_arrival,
            intercepted,
        };
        let remaining = self.queues.active_positions_except(Some(idx));
        self.travel(to, kind, remaining);
        self.queues.remove(idx);
    }

    /// Non-servicing move to a boundary cylinder.
    pub fn pivot(&mut self, to: i64) {
        let remaining = self.queues.active_positions_except(None);
        self.travel(to, StepKind::Pivot, remaining);
    }

    /// Non-servicing circular relocation.
    pub fn jump(&mut self, to: i64) {
        let remaining = self.queues.active_positions_except(None);
        self.travel(to, StepKind::Jump, remaining);
    }

    fn travel(&mut self, to: i64, kind: StepKind, remaining: Vec<i64>) {
        let from = self.head.position;
        let distance = from.abs_diff(to);
        let departure_time = self.head.time;
        let arrival_time = departure_time + distance as f64 * self.time_per_cylinder;
        let completion_time = match kind {
            StepKind::Service { .. } => arrival_time + self.time_per_request,
            StepKind::Pivot | StepKind::Jump => arrival_time,
        };
        let buffer = if self.track_buffer {
            self.queues.waiting_positions(departure_time)
        } else {
            Vec::new()
        };

        self.recorder.record_step(Step {
            from,
            to,
            distance,
            departure_time,
            arrival_time,
            completion_time,
            kind,
            remaining,
            buffer,
        });

        self.head.position = to;
        self.head.time = completion_time;
    }

    pub fn finish(self) -> SimulationResult {
        self.recorder.finish()
    }
}
