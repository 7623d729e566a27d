//! Scheduling simulators.
//!
//! Six deterministic, single-processor disciplines over a static process
//! set, each producing a merged execution timeline with derived timing
//! metrics:
//!
//! | Token | Discipline |
//! |-------|-----------|
//! | `fcfs` | First-come-first-served |
//! | `sjf_np` | Shortest-job-first, non-preemptive |
//! | `sjf_p` | Shortest-remaining-time-first (preemptive SJF) |
//! | `rr` | Round robin (quantum-bounded slices) |
//! | `priority` | Static priority, non-preemptive |
//! | `eah` | Energy-aware hybrid (short/long burst classification) |
//!
//! Every simulator is a pure function: it clones the caller's process
//! list, shares no state, and always terminates (burst sums are finite).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod eah;
mod fcfs;
mod metrics;
mod priority;
mod rr;
mod sjf;

pub use eah::energy_aware_hybrid;
pub use fcfs::fcfs;
pub use metrics::MetricsSummary;
pub use priority::priority_nonpreemptive;
pub use rr::round_robin;
pub use sjf::{sjf_nonpreemptive, sjf_preemptive};

use std::fmt;
use std::str::FromStr;

use crate::models::{merge_segments, Process, SchedulingResult, Segment};

/// Selects one of the six scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First-come-first-served.
    Fcfs,
    /// Non-preemptive shortest-job-first.
    SjfNonpreemptive,
    /// Preemptive SJF (shortest-remaining-time-first).
    SjfPreemptive,
    /// Round robin.
    RoundRobin,
    /// Non-preemptive static priority.
    Priority,
    /// Energy-aware hybrid.
    EnergyAwareHybrid,
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fcfs" => Ok(Self::Fcfs),
            "sjf_np" => Ok(Self::SjfNonpreemptive),
            "sjf_p" => Ok(Self::SjfPreemptive),
            "rr" => Ok(Self::RoundRobin),
            "priority" => Ok(Self::Priority),
            "eah" => Ok(Self::EnergyAwareHybrid),
            other => Err(SchedulerError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Fcfs => "fcfs",
            Self::SjfNonpreemptive => "sjf_np",
            Self::SjfPreemptive => "sjf_p",
            Self::RoundRobin => "rr",
            Self::Priority => "priority",
            Self::EnergyAwareHybrid => "eah",
        };
        f.write_str(token)
    }
}

/// Errors from the scheduling entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The algorithm token is not one of the supported disciplines.
    UnknownAlgorithm(String),
    /// Round robin requires a positive quantum to terminate.
    InvalidQuantum(i64),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm(name) => write!(f, "Unknown algorithm: {name}"),
            Self::InvalidQuantum(q) => write!(f, "Quantum must be positive, got {q}"),
        }
    }
}

impl std::error::Error for SchedulerError {}

/// Runs the named discipline over a process set.
///
/// `quantum` is consulted only by round robin and must be positive. The
/// process list is cloned internally; the caller's data is never mutated.
///
/// # Example
///
/// ```
/// use schedsim::models::Process;
/// use schedsim::scheduler::run_scheduler;
///
/// let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let result = run_scheduler("fcfs", &procs, 2).unwrap();
/// assert_eq!(result.total_time, 8);
/// ```
pub fn run_scheduler(
    algorithm: &str,
    processes: &[Process],
    quantum: i64,
) -> Result<SchedulingResult, SchedulerError> {
    match algorithm.parse::<Algorithm>()? {
        Algorithm::Fcfs => Ok(fcfs(processes)),
        Algorithm::SjfNonpreemptive => Ok(sjf_nonpreemptive(processes)),
        Algorithm::SjfPreemptive => Ok(sjf_preemptive(processes)),
        Algorithm::RoundRobin => {
            if quantum <= 0 {
                return Err(SchedulerError::InvalidQuantum(quantum));
            }
            Ok(round_robin(processes, quantum))
        }
        Algorithm::Priority => Ok(priority_nonpreemptive(processes)),
        Algorithm::EnergyAwareHybrid => Ok(energy_aware_hybrid(processes, None)),
    }
}

/// Merges raw segments and assembles the final run record.
pub(crate) fn assemble(
    algorithm: impl Into<String>,
    processes: &[Process],
    raw: Vec<Segment>,
) -> SchedulingResult {
    let timeline = merge_segments(&raw);
    let context_switches = timeline.len().saturating_sub(1);
    let total_time = timeline.last().map_or(0, |s| s.end);
    let summary = MetricsSummary::calculate(processes, &timeline);

    SchedulingResult {
        algorithm: algorithm.into(),
        timeline,
        context_switches,
        total_time,
        metrics: summary.per_process,
        avg_turnaround: summary.avg_turnaround,
        avg_waiting: summary.avg_waiting,
        short_threshold: None,
    }
}
