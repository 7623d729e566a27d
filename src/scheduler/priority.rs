//! Static-priority non-preemptive scheduling.
//!
//! Processes are sorted once, up front, by `(arrival, priority)` and run
//! in that fixed order with FCFS idle-gap logic. Priority therefore only
//! breaks ties among processes with identical arrival times; a
//! higher-priority process arriving later never overtakes one already
//! ahead of it in the fixed order.

use super::assemble;
use crate::models::{Process, SchedulingResult, Segment};

/// Simulates non-preemptive static-priority scheduling.
///
/// Lower priority values are scheduled first among equal arrivals.
pub fn priority_nonpreemptive(processes: &[Process]) -> SchedulingResult {
    let mut procs = processes.to_vec();
    procs.sort_by_key(|p| (p.arrival, p.priority));

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

    assemble("priority_nonpreemptive", processes, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(pid: &str, arrival: i64, burst: i64, priority: i32) -> Process {
        Process::new(pid, arrival, burst).with_priority(priority)
    }

    #[test]
    fn test_priority_breaks_ties_at_equal_arrival() {
        let procs = vec![p("low", 0, 2, 5), p("high", 0, 3, 1)];
        let result = priority_nonpreemptive(&procs);

        assert_eq!(result.algorithm, "priority_nonpreemptive");
        assert_eq!(
            result.timeline,
            vec![Segment::new("high", 0, 3), Segment::new("low", 3, 5)]
        );
    }

    #[test]
    fn test_arrival_dominates_priority() {
        // The fixed upfront sort means a later-arriving high-priority
        // process does not overtake an earlier arrival.
        let procs = vec![p("P1", 0, 4, 5), p("P2", 1, 2, 1)];
        let result = priority_nonpreemptive(&procs);

        assert_eq!(
            result.timeline,
            vec![Segment::new("P1", 0, 4), Segment::new("P2", 4, 6)]
        );
    }

    #[test]
    fn test_priority_idle_gap() {
        let procs = vec![p("P1", 2, 3, 0), p("P2", 2, 1, 1)];
        let result = priority_nonpreemptive(&procs);

        assert_eq!(
            result.timeline,
            vec![Segment::new("P1", 2, 5), Segment::new("P2", 5, 6)]
        );
        assert_eq!(result.total_time, 6);
    }

    #[test]
    fn test_priority_empty() {
        let result = priority_nonpreemptive(&[]);
        assert!(result.timeline.is_empty());
        assert_eq!(result.total_time, 0);
    }
}
