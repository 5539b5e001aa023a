//! Disk-head scheduling simulator.
//!
//! Simulates how a disk arm services a queue of cylinder requests under ten
//! classic policies and records every head movement, so that policies can
//! be compared on total movement, elapsed time and response time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `DiskRequest`, `Direction`, `HeadState`,
//!   `Step`, `TraceEvent`, `SimulationResult`
//! - **`validation`**: Input integrity checks (bounds, arrival times, duplicate orders)
//! - **`dispatching`**: Target selection rules and interception
//! - **`scheduler`**: Policy engines, `simulate`, and KPIs
//!
//! # Example
//!
//! ```
//! use disk_sched::{simulate, DiskRequest, Policy, SimulationConfig};
//!
//! let config = SimulationConfig::new(50, 0, 199);
//! let requests = DiskRequest::from_positions(&[82, 170, 43, 140, 24, 16, 190]);
//!
//! let result = simulate(Policy::Sstf, &config, &requests).unwrap();
//! assert_eq!(result.total_movement, 208);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts"
//! - Stallings (2018), "Operating Systems: Internals and Design Principles"

pub mod dispatching;
mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SimulationError;
pub use models::{Direction, DiskRequest, SimulationResult};
pub use scheduler::{simulate, DiskSimulator, Policy, SimulationConfig};
