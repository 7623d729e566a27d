//! Round-robin scheduling.
//!
//! A FIFO ready queue grants each process at most one quantum per turn.
//! Processes that arrive during a slice are admitted before the just-run
//! process is re-enqueued, so a new arrival always gets its first turn
//! ahead of a process that just consumed a slice.

use std::collections::VecDeque;

use super::assemble;
use crate::models::{Process, SchedulingResult, Segment};

/// Simulates round robin with the given time quantum.
///
/// Each slice runs for `min(quantum, remaining_burst)` ticks. When the
/// queue drains before all processes have arrived, the clock jumps to the
/// next arrival. The result's algorithm label records the quantum
/// (`rr_q{quantum}`).
pub fn round_robin(processes: &[Process], quantum: i64) -> SchedulingResult {
    let mut procs = processes.to_vec();
    procs.sort_by_key(|p| p.arrival);

    let n = procs.len();
    let mut rem: Vec<i64> = procs.iter().map(|p| p.burst).collect();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut t = 0;
    let mut i = 0;
    let mut timeline = Vec::new();

    while i < n || !queue.is_empty() {
        while i < n && procs[i].arrival <= t {
            queue.push_back(i);
            i += 1;
        }
        let k = match queue.pop_front() {
            Some(k) => k,
            None => {
                t = procs[i].arrival;
                continue;
            }
        };

        let run = quantum.min(rem[k]);
        let start = t;
        let end = start + run;
        timeline.push(Segment::new(procs[k].pid.clone(), start, end));
        t = end;
        rem[k] -= run;

        // Arrivals during the slice queue ahead of the re-inserted process.
        while i < n && procs[i].arrival <= t {
            queue.push_back(i);
            i += 1;
        }
        if rem[k] > 0 {
            queue.push_back(k);
        }
    }

    assemble(format!("rr_q{quantum}"), processes, timeline)
}
