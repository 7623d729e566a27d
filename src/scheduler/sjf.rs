//! Shortest-job-first scheduling, non-preemptive and preemptive.
//!
//! Both variants keep the ready set as a stable-ordered sequence and use a
//! stable key sort for selection, so equal bursts (or equal remaining
//! times) resolve to the earliest-inserted process. That tie-break is a
//! documented contract, not an accident of the sort; tests below pin it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.3.2

use super::assemble;
use crate::models::{Process, SchedulingResult, Segment};

/// Simulates non-preemptive SJF.
///
/// Event-driven: at each decision point all processes arrived by the
/// current clock join the ready set, the minimum-burst ready process runs
/// to completion, and the clock jumps to the next arrival whenever the
/// ready set drains early.
pub fn sjf_nonpreemptive(processes: &[Process]) -> SchedulingResult {
    let mut procs = processes.to_vec();
    procs.sort_by_key(|p| p.arrival);

    let n = procs.len();
    let mut t = 0;
    let mut timeline = Vec::with_capacity(n);
    let mut ready: Vec<Process> = Vec::new();
    let mut i = 0;
    let mut finished = 0;

    while finished < n {
        while i < n && procs[i].arrival <= t {
            ready.push(procs[i].clone());
            i += 1;
        }
        if ready.is_empty() {
            t = procs[i].arrival;
            continue;
        }
        // Stable sort: equal bursts keep ready-set insertion order.
        ready.sort_by_key(|p| p.burst);
        let p = ready.remove(0);
        let start = t;
        let end = start + p.burst;
        timeline.push(Segment::new(p.pid, start, end));
        t = end;
        finished += 1;
    }

    assemble("sjf_nonpreemptive", processes, timeline)
}

/// Simulates preemptive SJF (shortest-remaining-time-first).
///
/// Unit-tick loop: each tick the arrived, unfinished process with the
/// least remaining burst runs for one time unit, extending the open
/// segment when the same process continues and opening a new one when the
/// selection changes. Ties resolve to the earliest arrival. Idle ticks
/// advance the clock without emitting a segment.
pub fn sjf_preemptive(processes: &[Process]) -> SchedulingResult {
    let mut procs = processes.to_vec();
    procs.sort_by_key(|p| p.arrival);

    let n = procs.len();
    let mut rem: Vec<i64> = procs.iter().map(|p| p.burst).collect();
    // Zero-burst jobs are already complete.
    let mut done = rem.iter().filter(|&&r| r == 0).count();
    let mut t = 0;
    let mut timeline: Vec<Segment> = Vec::new();
    let mut current: Option<usize> = None;

    while done < n {
        // min_by_key keeps the first minimum, i.e. the earliest arrival.
        let pick = (0..n)
            .filter(|&k| procs[k].arrival <= t && rem[k] > 0)
            .min_by_key(|&k| rem[k]);
        let k = match pick {
            Some(k) => k,
            None => {
                t += 1;
                continue;
            }
        };

        match timeline.last_mut() {
            Some(last) if current == Some(k) => last.end += 1,
            _ => timeline.push(Segment::new(procs[k].pid.clone(), t, t + 1)),
        }
        current = Some(k);
        rem[k] -= 1;
        t += 1;
        if rem[k] == 0 {
            done += 1;
        }
    }

    assemble("sjf_preemptive", processes, timeline)
}
