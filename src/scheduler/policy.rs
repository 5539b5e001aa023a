//! Scheduling policies.
//!
//! [`Policy`] is the closed set of disciplines the simulator runs.
//! [`PolicyKind`] is its field-less twin, used to look policies up by
//! their display name and to enumerate them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A disk-head scheduling discipline.
///
/// The N-step variants carry their batch size; nothing is defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First Come First Served.
    Fcfs,
    /// Shortest Seek Time First.
    Sstf,
    /// Elevator: sweep to the disk edge, then reverse.
    Scan,
    /// Circular SCAN: sweep one way, jump back to the opposite edge.
    CScan,
    /// SCAN that reverses at the last request instead of the edge.
    Look,
    /// Circular LOOK: jump to the farthest request on the other side.
    CLook,
    /// SCAN over a frozen batch.
    FScan,
    /// LOOK over a frozen batch.
    FLook,
    /// SCAN over batches of at most N requests.
    ScanN(usize),
    /// LOOK over batches of at most N requests.
    LookN(usize),
}

/// Field-less policy identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PolicyKind {
    #[strum(to_string = "FCFS")]
    Fcfs,
    #[strum(to_string = "SSTF")]
    Sstf,
    #[strum(to_string = "SCAN")]
    Scan,
    #[strum(to_string = "C-SCAN", serialize = "CSCAN")]
    CScan,
    #[strum(to_string = "LOOK")]
    Look,
    #[strum(to_string = "C-LOOK", serialize = "CLOOK")]
    CLook,
    #[strum(to_string = "F-SCAN", serialize = "FSCAN")]
    FScan,
    #[strum(to_string = "F-LOOK", serialize = "FLOOK")]
    FLook,
    #[strum(to_string = "SCAN-N", serialize = "SCANN")]
    ScanN,
    #[strum(to_string = "LOOK-N", serialize = "LOOKN")]
    LookN,
}

impl PolicyKind {
    /// Display name (e.g. `"C-SCAN"`).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "Services requests in arrival order",
            PolicyKind::Sstf => "Services the request closest to the head",
            PolicyKind::Scan => "Sweeps to the disk edge servicing requests, then reverses",
            PolicyKind::CScan => {
                "Sweeps in one direction, then jumps to the opposite edge without servicing"
            }
            PolicyKind::Look => "Like SCAN, but reverses at the last request in each direction",
            PolicyKind::CLook => {
                "Like C-SCAN, but jumps only as far as the farthest request on the other side"
            }
            PolicyKind::FScan => "Freezes the queue and runs SCAN over it; arrivals wait",
            PolicyKind::FLook => "Freezes the queue and runs LOOK over it; arrivals wait",
            PolicyKind::ScanN => "Runs SCAN over batches of at most N requests",
            PolicyKind::LookN => "Runs LOOK over batches of at most N requests",
        }
    }

    /// Whether the initial direction affects the result.
    pub fn requires_direction(self) -> bool {
        !matches!(self, PolicyKind::Fcfs | PolicyKind::Sstf)
    }

    /// Whether a batch size must be supplied.
    pub fn requires_batch_size(self) -> bool {
        matches!(self, PolicyKind::ScanN | PolicyKind::LookN)
    }

    /// Builds the policy. `batch_size` is only read by the N-step kinds,
    /// which return `None` when it is missing.
    pub fn to_policy(self, batch_size: Option<usize>) -> Option<Policy> {
        Some(match self {
            PolicyKind::Fcfs => Policy::Fcfs,
            PolicyKind::Sstf => Policy::Sstf,
            PolicyKind::Scan => Policy::Scan,
            PolicyKind::CScan => Policy::CScan,
            PolicyKind::Look => Policy::Look,
            PolicyKind::CLook => Policy::CLook,
            PolicyKind::FScan => Policy::FScan,
            PolicyKind::FLook => Policy::FLook,
            PolicyKind::ScanN => Policy::ScanN(batch_size?),
            PolicyKind::LookN => Policy::LookN(batch_size?),
        })
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Policy {
    /// The field-less identifier of this policy.
    pub fn kind(self) -> PolicyKind {
        match self {
            Policy::Fcfs => PolicyKind::Fcfs,
            Policy::Sstf => PolicyKind::Sstf,
            Policy::Scan => PolicyKind::Scan,
            Policy::CScan => PolicyKind::CScan,
            Policy::Look => PolicyKind::Look,
            Policy::CLook => PolicyKind::CLook,
            Policy::FScan => PolicyKind::FScan,
            Policy::FLook => PolicyKind::FLook,
            Policy::ScanN(_) => PolicyKind::ScanN,
            Policy::LookN(_) => PolicyKind::LookN,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        self.kind().name()
    }

    pub fn requires_direction(self) -> bool {
        self.kind().requires_direction()
    }

    /// Batch size of the N-step variants.
    pub fn batch_size(self) -> Option<usize> {
        match self {
            Policy::ScanN(n) | Policy::LookN(n) => Some(n),
            _ => None,
        }
    }

    /// All ten policies, with `batch_size` for the N-step variants.
    pub fn all(batch_size: usize) -> Vec<Policy> {
        use strum::IntoEnumIterator;
        PolicyKind::iter()
            .filter_map(|k| k.to_policy(Some(batch_size)))
            .collect()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::ScanN(n) | Policy::LookN(n) => write!(f, "{} (N={n})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}
