//! Fixed-policy energy model.
//!
//! The caller pins one frequency tier for every slot, or selects `auto`,
//! which runs busy slots at the high tier and idle slots at the low tier.
//! No state is carried between slots.

use std::fmt;
use std::str::FromStr;

use super::{
    close_estimate, occupancy, DvfsTier, EnergyBreakdown, EnergyEstimate, PowerModel, SlotRecord,
    SlotState,
};
use crate::models::SchedulingResult;

/// Per-slot tier selection for the fixed model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedPolicy {
    /// Every slot at the high tier.
    High,
    /// Every slot at the med tier.
    Med,
    /// Every slot at the low tier.
    Low,
    /// High tier when busy, low tier when idle.
    Auto,
}

impl FixedPolicy {
    /// Tier used for a slot in the given state.
    fn tier_for(self, state: SlotState) -> DvfsTier {
        match self {
            Self::High => DvfsTier::High,
            Self::Med => DvfsTier::Med,
            Self::Low => DvfsTier::Low,
            Self::Auto => match state {
                SlotState::Busy => DvfsTier::High,
                SlotState::Idle => DvfsTier::Low,
            },
        }
    }
}

/// Error for an unrecognized DVFS policy token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown DVFS policy: {}", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for FixedPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "med" => Ok(Self::Med),
            "low" => Ok(Self::Low),
            "auto" => Ok(Self::Auto),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Estimates energy with a pinned tier (or busy/idle auto tiering).
///
/// Sums per-slot power over `[0, total_time)`, then charges the fixed
/// per-context-switch cost. Degenerate input (`total_time <= 0`) yields a
/// zero estimate with a diagnostic breakdown.
pub fn estimate_fixed(
    result: &SchedulingResult,
    policy: FixedPolicy,
    model: &PowerModel,
) -> EnergyEstimate {
    let total_time = result.total_time;
    if total_time <= 0 {
        return EnergyEstimate {
            energy: 0.0,
            breakdown: EnergyBreakdown::degenerate("total_time zero"),
        };
    }

    let slots = occupancy(&result.timeline, total_time);
    let mut slot_energy = 0.0;
    let mut per_time = Vec::with_capacity(slots.len());
    for (t, &state) in slots.iter().enumerate() {
        let tier = policy.tier_for(state);
        let power = model.slot_power(state, tier);
        slot_energy += power;
        per_time.push(SlotRecord {
            time: t as i64,
            state,
            power,
            dvfs_state: Some(tier),
            utilization: None,
        });
    }

    close_estimate(
        total_time,
        &slots,
        per_time,
        slot_energy,
        result.context_switches,
        model,
    )
}
