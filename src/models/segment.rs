//! Execution timeline segments.
//!
//! A segment records that one process occupied the (single) processor for
//! a half-open interval `[start, end)`. A timeline is an ordered list of
//! non-overlapping segments in non-decreasing start order; merging fuses
//! abutting same-process runs so context switches can be read directly off
//! segment boundaries.

use serde::{Deserialize, Serialize};

/// A contiguous run of one process on the processor.
///
/// Serialized with the compact wire key `p` for the process id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that occupied the interval.
    #[serde(rename = "p")]
    pub pid: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive). Always greater than `start`.
    pub end: i64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Duration (end - start) in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Fuses consecutive segments of the same process whose boundaries abut
/// (`prev.end == next.start`) into one segment spanning both intervals.
///
/// The input must be in non-decreasing start order. Pure: the input slice
/// is left untouched. Idempotent: merging a merged timeline is a no-op.
/// Empty input yields empty output.
pub fn merge_segments(segments: &[Segment]) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments {
        match merged.last_mut() {
            Some(last) if last.pid == seg.pid && last.end == seg.start => {
                last.end = seg.end;
            }
            _ => merged.push(seg.clone()),
        }
    }
    merged
}
