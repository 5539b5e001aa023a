//! Interception of a moving head by pending requests.
//!
//! A request that has not been admitted yet can still "flag down" the head
//! if it sits strictly between the head and its planned target and arrives
//! no later than the instant the head passes over its cylinder.

use crate::models::{Direction, DiskRequest};

/// A pending request that overtakes the planned target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interception {
    /// Index of the intercepting request.
    pub index: usize,
    /// Instant the head reaches the intercepting cylinder.
    pub reach_time: f64,
}

/// A planned head movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedMove {
    pub from: i64,
    pub to: i64,
    pub departure_time: f64,
    pub time_per_cylinder: f64,
    pub direction: Direction,
}

impl PlannedMove {
    /// Whether `position` lies strictly inside the path, in `direction`.
    #[inline]
    fn crosses(&self, position: i64) -> bool {
        match self.direction {
            Direction::Up => position > self.from && position < self.to,
            Direction::Down => position < self.from && position > self.to,
        }
    }
}

/// Finds the pending request that would stop the head first.
///
/// Among in-path candidates that arrive in time, the one nearest to
/// `from` wins; ties go to the lower `order`, then the lower input index.
pub fn find_intercept<I>(
    requests: &[DiskRequest],
    pending: I,
    planned: &PlannedMove,
) -> Option<Interception>
where
    I: IntoIterator<Item = usize>,
{
    let mut best: Option<(Interception, u64)> = None;

    for idx in pending {
        let req = &requests[idx];
        if !planned.crosses(req.position) {
            continue;
        }

        let distance = req.distance_from(planned.from);
        let reach_time = planned.departure_time + distance as f64 * planned.time_per_cylinder;
        if req.arrival_time > reach_time {
            continue;
        }

        let better = match best {
            None => true,
            Some((b, d)) => {
                let other = &requests[b.index];
                (distance, req.order, idx) < (d, other.order, b.index)
            }
        };
        if better {
            best = Some((Interception { index: idx, reach_time }, distance));
        }
    }

    best.map(|(i, _)| i)
}
