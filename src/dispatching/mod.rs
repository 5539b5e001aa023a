//! Target selection rules and the interception helper.
//!
//! Every policy engine asks this module one question before each head
//! movement: "where next?". The answer is a [`Selection`]. Sweep policies
//! then ask [`find_intercept`] whether a pending request overtakes it.
//!
//! # Usage
//!
//! ```
//! use disk_sched::dispatching::{DispatchContext, Selection, SweepRule};
//! use disk_sched::models::{Direction, DiskRequest};
//!
//! let requests = DiskRequest::from_positions(&[82, 43]);
//! let active = vec![0, 1];
//! let ctx = DispatchContext::at(50, Direction::Up).with_bounds(0, 199);
//!
//! assert_eq!(
//!     SweepRule::Look.select(&ctx, &requests, &active),
//!     Some(Selection::Service(0))
//! );
//! ```

mod context;
mod intercept;
pub mod rules;

pub use context::DispatchContext;
pub use intercept::{find_intercept, Interception, PlannedMove};
pub use rules::SweepRule;

/// The next head action chosen by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Move to the request at this index and service it.
    Service(usize),
    /// Move to this boundary cylinder without servicing.
    Pivot(i64),
    /// Relocate to this cylinder without servicing (never intercepted).
    Jump(i64),
    /// Flip the sweep direction without moving.
    Reverse,
}
