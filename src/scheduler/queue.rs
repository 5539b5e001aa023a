//! Pending and active request queues.
//!
//! Requests live in a flat arena copied from the caller's slice. Queues
//! hold arena indices only; servicing a request removes its index from a
//! queue, never the request from the arena.

use std::collections::VecDeque;

use crate::models::DiskRequest;

#[derive(Debug, Clone)]
pub(crate) struct RequestQueues {
    requests: Vec<DiskRequest>,
    /// Not yet admitted, ordered by `(arrival_time, order, index)`.
    pending: VecDeque<usize>,
    /// Admitted working set, in admission order.
    active: Vec<usize>,
}

impl RequestQueues {
    pub fn new(requests: &[DiskRequest]) -> Self {
        let requests = requests.to_vec();
        let mut pending: Vec<usize> = (0..requests.len()).collect();
        pending.sort_by(|&a, &b| {
            let (ra, rb) = (&requests[a], &requests[b]);
            ra.arrival_time
                .total_cmp(&rb.arrival_time)
                .then(ra.order.cmp(&rb.order))
                .then(a.cmp(&b))
        });
        Self {
            requests,
            pending: pending.into(),
            active: Vec::new(),
        }
    }

    #[inline]
    pub fn requests(&self) -> &[DiskRequest] {
        &self.requests
    }

    #[inline]
    pub fn request(&self, idx: usize) -> &DiskRequest {
        &self.requests[idx]
    }

    #[inline]
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    pub fn pending(&self) -> impl Iterator<Item = usize> + '_ {
        self.pending.iter().copied()
    }

    /// Both queues are empty.
    #[inline]
    pub fn is_drained(&self) -> bool {
        self.pending.is_empty() && self.active.is_empty()
    }

    /// Arrival instant of the earliest pending request.
    pub fn next_arrival(&self) -> Option<f64> {
        self.pending
            .front()
            .map(|&idx| self.requests[idx].arrival_time)
    }

    /// Whether a pending request is eligible at `time`.
    pub fn has_eligible(&self, time: f64) -> bool {
        self.next_arrival().is_some_and(|t| t <= time)
    }

    /// Moves every request eligible at `time` into the active set.
    pub fn admit(&mut self, time: f64) -> usize {
        self.admit_up_to(time, None)
    }

    /// Moves at most `limit` eligible requests into the active set.
    pub fn admit_up_to(&mut self, time: f64, limit: Option<usize>) -> usize {
        let mut admitted = 0;
        while limit.map_or(true, |n| admitted < n) && self.has_eligible(time) {
            if let Some(idx) = self.pending.pop_front() {
                self.active.push(idx);
                admitted += 1;
            }
        }
        admitted
    }

    /// Removes `idx` from whichever queue holds it.
    pub fn remove(&mut self, idx: usize) {
        if let Some(pos) = self.active.iter().position(|&i| i == idx) {
            self.active.remove(pos);
        } else if let Some(pos) = self.pending.iter().position(|&i| i == idx) {
            self.pending.remove(pos);
        }
    }

    /// Active positions, skipping `exclude`.
    pub fn active_positions_except(&self, exclude: Option<usize>) -> Vec<i64> {
        self.active
            .iter()
            .filter(|&&i| Some(i) != exclude)
            .map(|&i| self.requests[i].position)
            .collect()
    }

    /// Positions of pending requests already arrived at `time`.
    pub fn waiting_positions(&self, time: f64) -> Vec<i64> {
        self.pending
            .iter()
            .map(|&i| &self.requests[i])
            .take_while(|r| r.arrival_time <= time)
            .map(|r| r.position)
            .collect()
    }
}
