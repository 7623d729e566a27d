//! Simulation result model.
//!
//! A `SchedulingResult` is the complete record of one run: the merged
//! execution timeline plus the timing metrics derived from it. Results are
//! assembled fresh per simulation and hold no references into the input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Segment;

/// Per-process timing metrics derived from a finished timeline.
///
/// All values in ticks. `turnaround = completion - arrival` and
/// `waiting = turnaround - burst` hold exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Arrival time of the process.
    pub arrival: i64,
    /// Total processor time the process required.
    pub burst: i64,
    /// Latest segment end observed for the process, or its arrival if it
    /// never ran (degenerate).
    pub completion: i64,
    /// Time from arrival to completion.
    pub turnaround: i64,
    /// Time spent ready but not running.
    pub waiting: i64,
}

/// The complete record of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Algorithm label (e.g. `"fcfs"`, `"rr_q2"`).
    pub algorithm: String,
    /// Merged execution timeline.
    pub timeline: Vec<Segment>,
    /// Boundaries between distinct-process segments in the merged timeline.
    pub context_switches: usize,
    /// End time of the last segment (0 for an empty timeline).
    pub total_time: i64,
    /// Per-process metrics keyed by pid.
    pub metrics: HashMap<String, ProcessMetrics>,
    /// Unweighted average turnaround time.
    #[serde(rename = "avg_tat")]
    pub avg_turnaround: f64,
    /// Unweighted average waiting time.
    #[serde(rename = "avg_wt")]
    pub avg_waiting: f64,
    /// Burst-length classification threshold chosen by the hybrid
    /// scheduler. Absent for every other discipline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_threshold: Option<i64>,
}

impl SchedulingResult {
    /// Degenerate zero-valued result for an empty process set.
    pub fn empty(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            timeline: Vec::new(),
            context_switches: 0,
            total_time: 0,
            metrics: HashMap::new(),
            avg_turnaround: 0.0,
            avg_waiting: 0.0,
            short_threshold: None,
        }
    }

    /// Total busy time across the timeline (sum of segment durations).
    pub fn busy_time(&self) -> i64 {
        self.timeline.iter().map(Segment::duration).sum()
    }
}
