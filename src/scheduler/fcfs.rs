//! First-come-first-served scheduling.
//!
//! Processes run to completion in arrival order; the clock jumps over idle
//! gaps when the next process has not arrived yet. One segment per
//! process, no preemption, no ready-queue reordering.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.1

use super::assemble;
use crate::models::{Process, SchedulingResult, Segment};

/// Simulates FCFS over the process set.
pub fn fcfs(processes: &[Process]) -> SchedulingResult {
    let mut procs = processes.to_vec();
    procs.sort_by_key(|p| p.arrival);

    let mut t = 0;
    let mut timeline = Vec::with_capacity(procs.len());
    for p in &procs {
        if t < p.arrival {
            t = p.arrival;
        }
        let start = t;
        let end = start + p.burst;
        timeline.push(Segment::new(p.pid.clone(), start, end));
        t = end;
    }

    assemble("fcfs", processes, timeline)
}
