//! Disk scheduling domain models.
//!
//! Provides the value types that flow through every scheduling policy:
//! the request being scheduled, the head it is scheduled on, and the
//! trace and result a simulation produces.
//!
//! # Domain Mappings
//!
//! | disk-sched | Textbook term | Meaning |
//! |------------|---------------|---------|
//! | DiskRequest | I/O request | cylinder + arrival instant |
//! | HeadState | arm position | cylinder + direction + clock |
//! | Step | seek | one head movement |
//! | SimulationResult | exercise solution | trace + summary metrics |

mod head;
mod request;
mod result;
mod trace;

pub use head::{Direction, HeadState, ParseDirectionError};
pub use request::{random_requests, DiskRequest};
pub use result::SimulationResult;
pub use trace::{EventKind, Step, StepKind, TraceEvent};
