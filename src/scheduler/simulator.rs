//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Validate the configuration and requests; reject on any problem.
//! 2. Copy the requests into an index arena ordered by `(arrival, order)`.
//! 3. Drive the policy's engine until both queues drain.
//! 4. Derive the summary metrics from the recorded trace.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2

use serde::{Deserialize, Serialize};

use crate::dispatching::SweepRule;
use crate::error::SimulationError;
use crate::models::{Direction, DiskRequest, SimulationResult};
use crate::scheduler::state::EngineState;
use crate::scheduler::{batch, fcfs, sstf, sweep, Policy};
use crate::validation::validate_input;

/// Parameters of one simulated disk.
///
/// Every engine reads its parameters from here; nothing is defaulted
/// further down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Head cylinder at T=0.
    pub initial_position: i64,
    /// Lowest addressable cylinder.
    pub min_cylinder: i64,
    /// Highest addressable cylinder.
    pub max_cylinder: i64,
    /// Initial sweep direction (ignored by FCFS and SSTF).
    pub direction: Direction,
    /// Time to cross one cylinder.
    pub time_per_cylinder: f64,
    /// Time spent servicing a request once the head is on its cylinder.
    pub time_per_request: f64,
}

impl SimulationConfig {
    /// Creates a configuration sweeping up, one time unit per cylinder,
    /// and instantaneous service.
    pub fn new(initial_position: i64, min_cylinder: i64, max_cylinder: i64) -> Self {
        Self {
            initial_position,
            min_cylinder,
            max_cylinder,
            direction: Direction::Up,
            time_per_cylinder: 1.0,
            time_per_request: 0.0,
        }
    }

    /// Sets the initial sweep direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the time to cross one cylinder.
    pub fn with_time_per_cylinder(mut self, time: f64) -> Self {
        self.time_per_cylinder = time;
        self
    }

    /// Sets the service time per request.
    pub fn with_time_per_request(mut self, time: f64) -> Self {
        self.time_per_request = time;
        self
    }
}

/// Disk-head scheduling simulator.
///
/// Runs any [`Policy`] over a request list and returns the full trace.
/// The caller's requests are never modified.
///
/// # Example
///
/// ```
/// use disk_sched::models::DiskRequest;
/// use disk_sched::scheduler::{DiskSimulator, Policy, SimulationConfig};
///
/// let sim = DiskSimulator::new(SimulationConfig::new(50, 0, 199));
/// let requests = DiskRequest::from_positions(&[82, 170, 43, 140, 24, 16, 190]);
///
/// let result = sim.run(Policy::Look, &requests).unwrap();
/// assert_eq!(result.processing_order, vec![82, 140, 170, 190, 43, 24, 16]);
/// assert_eq!(result.total_movement, 314);
/// ```
#[derive(Debug, Clone)]
pub struct DiskSimulator {
    config: SimulationConfig,
}

impl DiskSimulator {
    /// Creates a simulator for the given disk.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Disk parameters.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `policy` over `requests`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidInput`] listing every validation problem.
    pub fn run(
        &self,
        policy: Policy,
        requests: &[DiskRequest],
    ) -> Result<SimulationResult, SimulationError> {
        if let Err(errors) = validate_input(&self.config, requests, policy) {
            log::warn!("{policy}: rejected input ({} problems)", errors.len());
            return Err(SimulationError::InvalidInput(errors));
        }

        log::debug!(
            "{policy}: simulating {} requests from cylinder {} ({})",
            requests.len(),
            self.config.initial_position,
            self.config.direction
        );

        let mut state = EngineState::new(policy, &self.config, requests);
        match policy {
            Policy::Fcfs => fcfs::run(&mut state),
            Policy::Sstf => sstf::run(&mut state),
            Policy::Scan => sweep::run(&mut state, SweepRule::Scan),
            Policy::CScan => sweep::run(&mut state, SweepRule::CScan),
            Policy::Look => sweep::run(&mut state, SweepRule::Look),
            Policy::CLook => sweep::run(&mut state, SweepRule::CLook),
            Policy::FScan => batch::run(&mut state, SweepRule::Scan, None),
            Policy::FLook => batch::run(&mut state, SweepRule::Look, None),
            Policy::ScanN(n) => batch::run(&mut state, SweepRule::Scan, Some(n)),
            Policy::LookN(n) => batch::run(&mut state, SweepRule::Look, Some(n)),
        }

        let result = state.finish();
        log::debug!(
            "{policy}: finished with {} cylinders moved, T={:.2}",
            result.total_movement,
            result.elapsed_time
        );
        Ok(result)
    }

    /// Simulates every policy in `policies` over the same requests.
    ///
    /// Stops at the first rejected input.
    pub fn run_all(
        &self,
        policies: &[Policy],
        requests: &[DiskRequest],
    ) -> Result<Vec<SimulationResult>, SimulationError> {
        policies
            .iter()
            .map(|&policy| self.run(policy, requests))
            .collect()
    }
}

/// Simulates `policy` over `requests` on the disk described by `config`.
pub fn simulate(
    policy: Policy,
    config: &SimulationConfig,
    requests: &[DiskRequest],
) -> Result<SimulationResult, SimulationError> {
    DiskSimulator::new(config.clone()).run(policy, requests)
}
