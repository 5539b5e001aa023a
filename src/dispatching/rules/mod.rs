//! Built-in target selection rules.
//!
//! # Categories
//!
//! - **Queue order**: `earliest` (FCFS)
//! - **Distance**: `nearest` (SSTF)
//! - **Sweep**: `nearest_ahead`, `extreme_behind` and [`SweepRule`]
//!   (SCAN, C-SCAN, LOOK, C-LOOK and the batch variants built on them)
//!
//! # Tie Convention
//! Every rule scans the working set in queue order and keeps the first of
//! equally good candidates, so ties resolve by `(arrival_time, order)`.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 11.5

use super::{DispatchContext, Selection};
use crate::models::{Direction, DiskRequest};

/// First request in queue order.
pub fn earliest(active: &[usize]) -> Option<usize> {
    active.first().copied()
}

/// Request with the smallest seek distance from the head.
pub fn nearest(requests: &[DiskRequest], active: &[usize], head: i64) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for &idx in active {
        let distance = requests[idx].distance_from(head);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Nearest request at or beyond the head in `direction`.
pub fn nearest_ahead(
    requests: &[DiskRequest],
    active: &[usize],
    head: i64,
    direction: Direction,
) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for &idx in active {
        let req = &requests[idx];
        if !direction.is_ahead(head, req.position) {
            continue;
        }
        let distance = req.distance_from(head);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Farthest request on the side opposite to `direction`: the lowest
/// cylinder when sweeping up, the highest when sweeping down.
pub fn extreme_behind(
    requests: &[DiskRequest],
    active: &[usize],
    direction: Direction,
) -> Option<usize> {
    let mut best: Option<usize> = None;
    for &idx in active {
        let pos = requests[idx].position;
        let better = match best {
            None => true,
            Some(b) => match direction {
                Direction::Up => pos < requests[b].position,
                Direction::Down => pos > requests[b].position,
            },
        };
        if better {
            best = Some(idx);
        }
    }
    best
}

/// Direction-aware sweep discipline.
///
/// | Rule | Nothing ahead |
/// |------|---------------|
/// | `Scan` | pivot to the far edge, then reverse |
/// | `CScan` | pivot to the far edge, then jump to the near edge |
/// | `Look` | reverse in place |
/// | `CLook` | jump to the farthest request behind the head |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepRule {
    Scan,
    CScan,
    Look,
    CLook,
}

impl SweepRule {
    /// Whether arriving at the far edge flips the direction.
    pub fn reverses_at_edge(&self) -> bool {
        matches!(self, SweepRule::Scan)
    }

    /// Chooses the next head action over the working set.
    ///
    /// Returns `None` only when `active` is empty.
    pub fn select(
        &self,
        context: &DispatchContext,
        requests: &[DiskRequest],
        active: &[usize],
    ) -> Option<Selection> {
        if active.is_empty() {
            return None;
        }

        if let Some(idx) = nearest_ahead(requests, active, context.head, context.direction) {
            return Some(Selection::Service(idx));
        }

        let selection = match self {
            SweepRule::Scan => {
                let edge = context.far_edge();
                if context.head == edge {
                    Selection::Reverse
                } else {
                    Selection::Pivot(edge)
                }
            }
            SweepRule::CScan => {
                let edge = context.far_edge();
                if context.head == edge {
                    Selection::Jump(context.near_edge())
                } else {
                    Selection::Pivot(edge)
                }
            }
            SweepRule::Look => Selection::Reverse,
            SweepRule::CLook => {
                // Non-empty and nothing ahead, so something lies behind.
                let idx = extreme_behind(requests, active, context.direction)?;
                Selection::Jump(requests[idx].position)
            }
        };
        Some(selection)
    }
}
