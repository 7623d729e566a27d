//! CPU scheduling simulation and DVFS energy estimation.
//!
//! A deterministic, offline analysis engine: given a static process set
//! and a discipline, it produces a discrete execution timeline, derived
//! timing metrics, and an estimate of the energy the run would consume
//! under several frequency-scaling policies.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Segment`, `SchedulingResult`,
//!   `ProcessMetrics`
//! - **`scheduler`**: The six simulators (FCFS, SJF, SRTF, round robin,
//!   static priority, energy-aware hybrid) and the timing metrics
//! - **`energy`**: Fixed-policy and adaptive-hysteresis DVFS energy models
//! - **`validation`**: Input integrity checks (duplicate pids, bad times)
//!
//! # Architecture
//!
//! Every entry point is a pure function over its inputs: simulators clone
//! the caller's process list, share no state, perform no I/O, and always
//! terminate. A serving layer can therefore call into this crate from any
//! number of threads without coordination, as long as it does not share a
//! single process list across calls without cloning.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Weiser et al. (1994), "Scheduling for Reduced CPU Energy"

pub mod energy;
pub mod models;
pub mod scheduler;
pub mod validation;
