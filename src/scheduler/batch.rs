//! Batch sweep engines: F-SCAN, F-LOOK, SCAN-N and LOOK-N.
//!
//! A batch is sealed whenever the working set drains: every eligible
//! request for the frozen variants, at most N of them for the N-step
//! variants. The sweep then runs over the sealed batch only. Later
//! arrivals wait in the pending queue and never intercept.

use crate::dispatching::{Selection, SweepRule};
use crate::scheduler::state::EngineState;

pub(crate) fn run(state: &mut EngineState, rule: SweepRule, limit: Option<usize>) {
    state.enable_buffer_tracking();

    while !state.is_drained() {
        if state.queues.active().is_empty() {
            state.idle_until_next_arrival();
            let size = state.queues.admit_up_to(state.head.time, limit);
            if size == 0 {
                continue;
            }
            state.note_batch(size);
        }

        let context = state.context();
        let Some(selection) = rule.select(&context, state.queues.requests(), state.queues.active())
        else {
            continue;
        };

        match selection {
            Selection::Service(idx) => state.serve(idx, false),
            Selection::Pivot(edge) => {
                state.pivot(edge);
                if rule.reverses_at_edge() {
                    state.reverse();
                }
            }
            Selection::Jump(to) => state.jump(to),
            Selection::Reverse => state.reverse(),
        }
    }
}
