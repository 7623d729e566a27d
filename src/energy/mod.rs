//! DVFS energy estimation over finished scheduling runs.
//!
//! Two models share the same per-slot accounting: a fixed-policy model
//! (`high`/`med`/`low`/`auto`) where the tier is pinned per slot, and an
//! adaptive model that drives the tier from trailing-window utilization
//! through a hysteresis state machine.
//!
//! All tuning constants live in [`PowerModel`] values rather than module
//! constants, so estimates with different tunings can run side by side.
//!
//! # Reference
//! Weiser et al. (1994), "Scheduling for Reduced CPU Energy"

mod adaptive;
mod fixed;

pub use adaptive::{estimate_adaptive, AdaptiveParams, TargetMode, TierFsm};
pub use fixed::{estimate_fixed, FixedPolicy, UnknownPolicy};

use serde::{Deserialize, Serialize};

use crate::models::{SchedulingResult, Segment};

/// Discrete frequency/voltage tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DvfsTier {
    /// Full frequency.
    High,
    /// Intermediate frequency.
    Med,
    /// Minimum frequency.
    Low,
}

/// Occupancy of one time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    /// A process occupied the slot.
    Busy,
    /// The processor was idle.
    Idle,
}

/// Tunable power/frequency constants for the energy models.
///
/// `Default` reproduces the reference tuning. Per-slot power is
/// `base * freq` when busy and `idle_power + base * idle_leakage * freq`
/// when idle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerModel {
    /// Busy base power at the high tier.
    pub base_power_high: f64,
    /// Busy base power at the med tier.
    pub base_power_med: f64,
    /// Busy base power at the low tier.
    pub base_power_low: f64,
    /// Static power drawn by an idle slot regardless of tier.
    pub idle_power: f64,
    /// Fraction of the tier's busy power leaked while idle.
    pub idle_leakage: f64,
    /// Energy charged per context switch.
    pub cs_cost: f64,
    /// Frequency multiplier at the high tier.
    pub freq_high: f64,
    /// Frequency multiplier at the med tier.
    pub freq_med: f64,
    /// Frequency multiplier at the low tier.
    pub freq_low: f64,
}

impl Default for PowerModel {
    fn default() -> Self {
        Self {
            base_power_high: 5.0,
            base_power_med: 3.0,
            base_power_low: 1.5,
            idle_power: 0.2,
            idle_leakage: 0.2,
            cs_cost: 1.2,
            freq_high: 1.0,
            freq_med: 0.7,
            freq_low: 0.4,
        }
    }
}

impl PowerModel {
    /// Returns `(base_power, frequency)` for a tier.
    pub fn tier_params(&self, tier: DvfsTier) -> (f64, f64) {
        match tier {
            DvfsTier::High => (self.base_power_high, self.freq_high),
            DvfsTier::Med => (self.base_power_med, self.freq_med),
            DvfsTier::Low => (self.base_power_low, self.freq_low),
        }
    }

    /// Power drawn by one slot in `state` at `tier`.
    pub fn slot_power(&self, state: SlotState, tier: DvfsTier) -> f64 {
        let (base, freq) = self.tier_params(tier);
        match state {
            SlotState::Busy => base * freq,
            SlotState::Idle => self.idle_power + base * self.idle_leakage * freq,
        }
    }
}

/// One entry of the per-slot energy trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Slot index.
    pub time: i64,
    /// Busy/idle occupancy of the slot.
    pub state: SlotState,
    /// Power drawn during the slot.
    pub power: f64,
    /// Active tier for the slot (post-transition for the adaptive model).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dvfs_state: Option<DvfsTier>,
    /// Trailing-window utilization (adaptive model only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilization: Option<f64>,
}

/// Slot-level accounting behind an energy estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// Number of slots accounted.
    pub total_time: i64,
    /// Slots covered by a segment.
    pub busy_slots: usize,
    /// Slots with no segment coverage.
    pub idle_slots: usize,
    /// Context switches charged.
    pub context_switches: usize,
    /// Energy attributed to context switches.
    pub cs_energy: f64,
    /// Per-slot trace in slot order.
    pub per_time: Vec<SlotRecord>,
    /// Diagnostic for degenerate input (zero-length timelines).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl EnergyBreakdown {
    /// Zero-valued breakdown carrying a diagnostic message.
    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self {
            total_time: 0,
            busy_slots: 0,
            idle_slots: 0,
            context_switches: 0,
            cs_energy: 0.0,
            per_time: Vec::new(),
            msg: Some(msg.into()),
        }
    }
}

/// An energy total plus the accounting that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Total energy for the run.
    pub energy: f64,
    /// Slot-level accounting.
    pub breakdown: EnergyBreakdown,
}

/// Policy selector for [`estimate_energy`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnergyPolicy {
    /// Pin a tier per slot (or busy/idle auto selection).
    Fixed(FixedPolicy),
    /// Drive the tier from windowed utilization with hysteresis.
    Adaptive(AdaptiveParams),
}

/// Estimates the energy consumed by a finished run under the selected
/// policy.
///
/// Degenerate input (`total_time <= 0`) yields a zero estimate with a
/// diagnostic breakdown rather than an error.
pub fn estimate_energy(
    result: &SchedulingResult,
    policy: &EnergyPolicy,
    model: &PowerModel,
) -> EnergyEstimate {
    match policy {
        EnergyPolicy::Fixed(p) => estimate_fixed(result, *p, model),
        EnergyPolicy::Adaptive(params) => estimate_adaptive(result, params, model),
    }
}

/// Marks every slot covered by a segment as busy over `[0, total_time)`.
///
/// Segment bounds are clamped to the accounted range.
pub(crate) fn occupancy(timeline: &[Segment], total_time: i64) -> Vec<SlotState> {
    let mut slots = vec![SlotState::Idle; total_time.max(0) as usize];
    for seg in timeline {
        let lo = seg.start.max(0);
        let hi = seg.end.min(total_time);
        for t in lo..hi {
            slots[t as usize] = SlotState::Busy;
        }
    }
    slots
}

/// Charges context-switch energy and packages the per-slot accounting.
pub(crate) fn close_estimate(
    total_time: i64,
    slots: &[SlotState],
    per_time: Vec<SlotRecord>,
    slot_energy: f64,
    context_switches: usize,
    model: &PowerModel,
) -> EnergyEstimate {
    let cs_energy = context_switches as f64 * model.cs_cost;
    let busy_slots = slots.iter().filter(|&&s| s == SlotState::Busy).count();

    EnergyEstimate {
        energy: slot_energy + cs_energy,
        breakdown: EnergyBreakdown {
            total_time,
            busy_slots,
            idle_slots: slots.len() - busy_slots,
            context_switches,
            cs_energy,
            per_time,
            msg: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    #[test]
    fn test_power_model_defaults() {
        let m = PowerModel::default();
        assert_eq!(m.tier_params(DvfsTier::High), (5.0, 1.0));
        assert_eq!(m.tier_params(DvfsTier::Med), (3.0, 0.7));
        assert_eq!(m.tier_params(DvfsTier::Low), (1.5, 0.4));
        assert!((m.cs_cost - 1.2).abs() < 1e-10);
    }

    #[test]
    fn test_slot_power() {
        let m = PowerModel::default();
        assert!((m.slot_power(SlotState::Busy, DvfsTier::High) - 5.0).abs() < 1e-10);
        assert!((m.slot_power(SlotState::Busy, DvfsTier::Med) - 2.1).abs() < 1e-10);
        // Idle: idle_power + base * leakage * freq.
        assert!((m.slot_power(SlotState::Idle, DvfsTier::Low) - 0.32).abs() < 1e-10);
    }

    #[test]
    fn test_occupancy_marks_covered_slots() {
        let timeline = vec![Segment::new("P1", 1, 3), Segment::new("P2", 4, 5)];
        let slots = occupancy(&timeline, 6);
        let busy: Vec<bool> = slots.iter().map(|&s| s == SlotState::Busy).collect();
        assert_eq!(busy, vec![false, true, true, false, true, false]);
    }

    #[test]
    fn test_occupancy_clamps_to_total_time() {
        let timeline = vec![Segment::new("P1", 3, 10)];
        let slots = occupancy(&timeline, 5);
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[4], SlotState::Busy);
        assert_eq!(slots[2], SlotState::Idle);
    }

    #[test]
    fn test_estimate_energy_routes_policies() {
        let mut result = SchedulingResult::empty("fcfs");
        result.timeline = vec![Segment::new("P1", 0, 5)];
        result.total_time = 5;
        let model = PowerModel::default();

        let fixed = estimate_energy(&result, &EnergyPolicy::Fixed(FixedPolicy::High), &model);
        assert!((fixed.energy - 25.0).abs() < 1e-10);

        // Fully busy timeline: the adaptive model stays at the high tier.
        let adaptive = estimate_energy(
            &result,
            &EnergyPolicy::Adaptive(AdaptiveParams::default()),
            &model,
        );
        assert!((adaptive.energy - 25.0).abs() < 1e-10);
        assert_eq!(adaptive.breakdown.busy_slots, 5);
    }

    #[test]
    fn test_tier_and_state_wire_tokens() {
        assert_eq!(serde_json::to_value(DvfsTier::Med).unwrap(), "med");
        assert_eq!(serde_json::to_value(SlotState::Idle).unwrap(), "idle");
        let tier: DvfsTier = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(tier, DvfsTier::High);
    }
}
