//! Shortest Seek Time First.
//!
//! Picks the admitted request nearest to the head (first found on ties),
//! then lets a pending request on the way intercept the move.

use crate::dispatching::rules;
use crate::models::Direction;
use crate::scheduler::state::EngineState;

pub(crate) fn run(state: &mut EngineState) {
    while !state.is_drained() {
        state.admit();
        let Some(target) = rules::nearest(
            state.queues.requests(),
            state.queues.active(),
            state.head.position,
        ) else {
            state.idle_until_next_arrival();
            continue;
        };

        let to = state.queues.request(target).position;
        let travel = Direction::of_travel(state.head.position, to);
        match state.intercept(to, travel) {
            Some(idx) => state.serve(idx, true),
            None => state.serve(target, false),
        }
    }
}
