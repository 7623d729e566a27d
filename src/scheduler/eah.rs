//! Energy-aware hybrid scheduling.
//!
//! Bursts are classified against a median threshold as the processes
//! arrive: short jobs queue separately from long ones. Whenever any short
//! job is ready it runs shortest-first; otherwise the earliest-arrived
//! long job runs. Non-preemptive at the granularity of the chosen job.
//! A throughput-oriented heuristic, not an optimal schedule.

use super::assemble;
use crate::models::{Process, SchedulingResult, Segment};

/// Simulates the energy-aware hybrid discipline.
///
/// `short_threshold` overrides the classification cutoff; when `None` the
/// upper median of all burst lengths is used. The chosen threshold is
/// reported in the result for transparency.
pub fn energy_aware_hybrid(
    processes: &[Process],
    short_threshold: Option<i64>,
) -> SchedulingResult {
    if processes.is_empty() {
        return SchedulingResult::empty("eah");
    }

    let mut procs = processes.to_vec();
    let threshold = short_threshold.unwrap_or_else(|| {
        let mut bursts: Vec<i64> = procs.iter().map(|p| p.burst).collect();
        bursts.sort_unstable();
        bursts[bursts.len() / 2]
    });

    procs.sort_by_key(|p| p.arrival);
    let n = procs.len();
    let mut t = 0;
    let mut timeline = Vec::with_capacity(n);
    let mut ready_short: Vec<Process> = Vec::new();
    let mut ready_long: Vec<Process> = Vec::new();
    let mut i = 0;
    let mut finished = 0;

    while finished < n {
        // Bucket arrivals as they are admitted.
        while i < n && procs[i].arrival <= t {
            let p = procs[i].clone();
            if p.burst <= threshold {
                ready_short.push(p);
            } else {
                ready_long.push(p);
            }
            i += 1;
        }

        let next = if !ready_short.is_empty() {
            ready_short.sort_by_key(|p| p.burst);
            Some(ready_short.remove(0))
        } else if !ready_long.is_empty() {
            ready_long.sort_by_key(|p| p.arrival);
            Some(ready_long.remove(0))
        } else {
            None
        };

        match next {
            Some(p) => {
                let start = t.max(p.arrival);
                let end = start + p.burst;
                timeline.push(Segment::new(p.pid, start, end));
                t = end;
                finished += 1;
            }
            None => {
                if i < n {
                    t = procs[i].arrival;
                } else {
                    break;
                }
            }
        }
    }

    let mut result = assemble("eah", processes, timeline);
    result.short_threshold = Some(threshold);
    result
}
