//! Process (job) model.
//!
//! A process is the unit of work submitted to a simulation: it arrives at
//! a fixed time and requires a fixed amount of processor time.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable once submitted: every simulator clones the input set at its
/// entry point, so a caller-supplied `Process` is never mutated by a run.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// The consumer defines what one tick means (e.g., 1 ms, one timer interrupt).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: String,
    /// Arrival time (ticks, non-negative).
    pub arrival: i64,
    /// Total processor time required (ticks, positive).
    pub burst: i64,
    /// Scheduling priority (lower value = scheduled earlier among equal
    /// arrivals). Only the priority discipline consults it; defaults to 0
    /// when absent from input.
    #[serde(default)]
    pub priority: i32,
}

impl Process {
    /// Creates a new process.
    pub fn new(pid: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
