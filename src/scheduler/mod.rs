//! Disk-head scheduling engines and KPI evaluation.
//!
//! Provides the ten scheduling policies, the simulator that runs them, and
//! run quality metrics.
//!
//! # Engines
//!
//! | Family | Policies | Interception |
//! |--------|----------|--------------|
//! | Queue order | FCFS | never |
//! | Greedy | SSTF | yes |
//! | Continuous sweep | SCAN, C-SCAN, LOOK, C-LOOK | yes, except on jumps |
//! | Batch sweep | F-SCAN, F-LOOK, SCAN-N, LOOK-N | never |
//!
//! All engines share one request arena, one trace recorder and one idling
//! rule: when nothing is admitted, the clock jumps to the next arrival.
//!
//! # KPI
//!
//! `SimulationKpi` computes response time, wait time, throughput, and move
//! counts from a finished run.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 11

mod batch;
mod fcfs;
mod kpi;
mod policy;
mod queue;
mod recorder;
mod simulator;
mod sstf;
mod state;
mod sweep;

pub use kpi::SimulationKpi;
pub use policy::{Policy, PolicyKind};
pub use simulator::{simulate, DiskSimulator, SimulationConfig};
