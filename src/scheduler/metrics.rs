//! Timing metrics over a finished timeline.
//!
//! Computes standard per-process indicators from a merged timeline and
//! the submitted process set.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Latest segment end for the process |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", §5.2

use std::collections::HashMap;

use crate::models::{Process, ProcessMetrics, Segment};

/// Per-process metrics plus unweighted averages.
#[derive(Debug, Clone, Default)]
pub struct MetricsSummary {
    /// Metrics keyed by pid.
    pub per_process: HashMap<String, ProcessMetrics>,
    /// Mean turnaround across all submitted processes.
    pub avg_turnaround: f64,
    /// Mean waiting time across all submitted processes.
    pub avg_waiting: f64,
}

impl MetricsSummary {
    /// Computes metrics for every submitted process against a merged timeline.
    ///
    /// Completion is the latest segment end observed for the pid; a process
    /// may own several segments under preemption. A process absent from the
    /// timeline falls back to its own arrival (a correct simulation never
    /// produces that case). An empty process set yields zero averages.
    pub fn calculate(processes: &[Process], timeline: &[Segment]) -> Self {
        let mut completion: HashMap<&str, i64> = HashMap::new();
        for seg in timeline {
            let latest = completion.entry(seg.pid.as_str()).or_insert(0);
            *latest = (*latest).max(seg.end);
        }

        let mut per_process = HashMap::with_capacity(processes.len());
        for p in processes {
            let ct = completion.get(p.pid.as_str()).copied().unwrap_or(p.arrival);
            let turnaround = ct - p.arrival;
            let waiting = turnaround - p.burst;
            per_process.insert(
                p.pid.clone(),
                ProcessMetrics {
                    arrival: p.arrival,
                    burst: p.burst,
                    completion: ct,
                    turnaround,
                    waiting,
                },
            );
        }

        let count = per_process.len();
        let (avg_turnaround, avg_waiting) = if count == 0 {
            (0.0, 0.0)
        } else {
            let tat: i64 = per_process.values().map(|m| m.turnaround).sum();
            let wt: i64 = per_process.values().map(|m| m.waiting).sum();
            (tat as f64 / count as f64, wt as f64 / count as f64)
        };

        Self {
            per_process,
            avg_turnaround,
            avg_waiting,
        }
    }
}
