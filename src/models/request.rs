//! Disk request model.
//!
//! A request targets one cylinder and becomes visible to the scheduler at
//! its arrival instant. Requests are identified by their position in the
//! caller's list, never by cylinder: two requests may target the same one.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An I/O request against a single cylinder.
///
/// # Time Representation
/// Arrival times are in the same abstract unit as the simulator's
/// `time_per_cylinder` (milliseconds in the classroom exercises).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskRequest {
    /// Target cylinder.
    pub position: i64,
    /// Stable input sequence number, used for tie-breaking.
    pub order: usize,
    /// Instant at which the request becomes eligible (>= 0).
    pub arrival_time: f64,
}

impl DiskRequest {
    /// Creates a request that is present from t=0.
    pub fn new(position: i64, order: usize) -> Self {
        Self {
            position,
            order,
            arrival_time: 0.0,
        }
    }

    /// Sets the arrival instant.
    pub fn with_arrival_time(mut self, arrival_time: f64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Builds a static workload: every request arrives at t=0,
    /// numbered `1..=n` in input order.
    pub fn from_positions(positions: &[i64]) -> Vec<Self> {
        positions
            .iter()
            .enumerate()
            .map(|(i, &p)| Self::new(p, i + 1))
            .collect()
    }

    /// Distance in cylinders from `head` to this request.
    #[inline]
    pub fn distance_from(&self, head: i64) -> u64 {
        self.position.abs_diff(head)
    }
}

/// Generates a random, valid workload.
///
/// Positions are uniform over `[min_cylinder, max_cylinder]`, arrivals
/// uniform over `[0, max_arrival]` (all zero when `max_arrival` is 0).
/// Orders are assigned `1..=count` in generation order.
pub fn random_requests<R: Rng>(
    rng: &mut R,
    count: usize,
    min_cylinder: i64,
    max_cylinder: i64,
    max_arrival: f64,
) -> Vec<DiskRequest> {
    (1..=count)
        .map(|order| {
            let position = rng.random_range(min_cylinder..=max_cylinder);
            let arrival = if max_arrival > 0.0 {
                // Whole units keep generated exercises readable.
                rng.random_range(0.0..=max_arrival).floor()
            } else {
                0.0
            };
            DiskRequest::new(position, order).with_arrival_time(arrival)
        })
        .collect()
}
