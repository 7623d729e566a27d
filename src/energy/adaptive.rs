//! Adaptive DVFS energy model with hysteresis.
//!
//! The active tier follows trailing-window utilization: sustained load
//! pushes toward the high tier, sustained idleness toward the low tier.
//! A hysteresis counter demands that many *consecutive* mismatching
//! targets before the tier actually moves, so a target that flips back
//! and forth never switches the machine. Forced and auto targets skip the
//! utilization mapping but still pass through the same state machine.

use super::{
    close_estimate, occupancy, DvfsTier, EnergyBreakdown, EnergyEstimate, PowerModel, SlotRecord,
    SlotState,
};
use crate::models::SchedulingResult;

/// How the per-slot target tier is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    /// Map trailing-window utilization through the thresholds.
    #[default]
    Adaptive,
    /// High when busy, low when idle.
    Auto,
    /// Always the given tier.
    Forced(DvfsTier),
}

/// Tuning for the adaptive estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveParams {
    /// Trailing utilization window length in slots (at least 1).
    pub window: i64,
    /// Consecutive mismatches required before a tier switch.
    pub hysteresis: u32,
    /// Utilization at or above which the target is the high tier.
    pub th_high: f64,
    /// Utilization at or above which the target is at least the med tier.
    pub th_med: f64,
    /// Target production mode.
    pub mode: TargetMode,
}

impl Default for AdaptiveParams {
    fn default() -> Self {
        Self {
            window: 3,
            hysteresis: 1,
            th_high: 0.6,
            th_med: 0.2,
            mode: TargetMode::Adaptive,
        }
    }
}

/// Three-state tier machine with a consecutive-mismatch counter.
///
/// Starts at the high tier. A target equal to the current tier resets the
/// counter; a mismatch increments it, and the tier switches (clearing the
/// counter) once the streak reaches the hysteresis threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierFsm {
    hysteresis: u32,
    state: DvfsTier,
    streak: u32,
}

impl TierFsm {
    /// Creates a machine at the high tier.
    pub fn new(hysteresis: u32) -> Self {
        Self {
            hysteresis,
            state: DvfsTier::High,
            streak: 0,
        }
    }

    /// Current active tier.
    pub fn state(&self) -> DvfsTier {
        self.state
    }

    /// Feeds one target and returns the active tier for the slot.
    pub fn observe(&mut self, target: DvfsTier) -> DvfsTier {
        let (state, streak) = Self::transition(self.state, self.streak, target, self.hysteresis);
        self.state = state;
        self.streak = streak;
        state
    }

    /// Pure transition function: `(state, streak)` after one observation.
    pub fn transition(
        state: DvfsTier,
        streak: u32,
        target: DvfsTier,
        hysteresis: u32,
    ) -> (DvfsTier, u32) {
        if target == state {
            return (state, 0);
        }
        let streak = streak + 1;
        if streak >= hysteresis {
            (target, 0)
        } else {
            (state, streak)
        }
    }
}

/// Estimates energy with utilization-driven tier selection.
///
/// Per slot `t`, utilization is the busy fraction of the trailing window
/// ending at `t` (clipped at the start of the timeline). The per-slot
/// power uses the tier active *after* the hysteresis machine has observed
/// the slot's target. Degenerate input (`total_time <= 0`) yields a zero
/// estimate with a diagnostic breakdown.
pub fn estimate_adaptive(
    result: &SchedulingResult,
    params: &AdaptiveParams,
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
    let window = params.window.max(1);
    let mut fsm = TierFsm::new(params.hysteresis);
    let mut slot_energy = 0.0;
    let mut per_time = Vec::with_capacity(slots.len());
    let mut busy_in_window = 0usize;

    for (t, &state) in slots.iter().enumerate() {
        // Slide the trailing window: admit slot t, retire slot t-window.
        if state == SlotState::Busy {
            busy_in_window += 1;
        }
        if t as i64 >= window && slots[t - window as usize] == SlotState::Busy {
            busy_in_window -= 1;
        }
        let span = (t as i64 + 1).min(window);
        let util = busy_in_window as f64 / span as f64;

        let target = match params.mode {
            TargetMode::Forced(tier) => tier,
            TargetMode::Auto => match state {
                SlotState::Busy => DvfsTier::High,
                SlotState::Idle => DvfsTier::Low,
            },
            TargetMode::Adaptive => {
                if util >= params.th_high {
                    DvfsTier::High
                } else if util >= params.th_med {
                    DvfsTier::Med
                } else {
                    DvfsTier::Low
                }
            }
        };

        let tier = fsm.observe(target);
        let power = model.slot_power(state, tier);
        slot_energy += power;
        per_time.push(SlotRecord {
            time: t as i64,
            state,
            power,
            dvfs_state: Some(tier),
            utilization: Some(util),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    fn run(timeline: Vec<Segment>, total_time: i64, context_switches: usize) -> SchedulingResult {
        let mut r = SchedulingResult::empty("eah");
        r.timeline = timeline;
        r.total_time = total_time;
        r.context_switches = context_switches;
        r
    }

    #[test]
    fn test_fsm_match_resets_streak() {
        let mut fsm = TierFsm::new(3);
        assert_eq!(fsm.observe(DvfsTier::Low), DvfsTier::High);
        assert_eq!(fsm.observe(DvfsTier::Low), DvfsTier::High);
        // A single matching slot wipes the accumulated streak.
        assert_eq!(fsm.observe(DvfsTier::High), DvfsTier::High);
        assert_eq!(fsm.observe(DvfsTier::Low), DvfsTier::High);
        assert_eq!(fsm.observe(DvfsTier::Low), DvfsTier::High);
        assert_eq!(fsm.observe(DvfsTier::Low), DvfsTier::Low);
    }

    #[test]
    fn test_fsm_flip_flop_never_switches() {
        let mut fsm = TierFsm::new(3);
        for _ in 0..10 {
            assert_eq!(fsm.observe(DvfsTier::Med), DvfsTier::High);
            assert_eq!(fsm.observe(DvfsTier::High), DvfsTier::High);
        }
        assert_eq!(fsm.state(), DvfsTier::High);
    }

    #[test]
    fn test_fsm_transition_is_pure() {
        let (s, c) = TierFsm::transition(DvfsTier::High, 0, DvfsTier::Med, 2);
        assert_eq!((s, c), (DvfsTier::High, 1));
        let (s, c) = TierFsm::transition(s, c, DvfsTier::Med, 2);
        assert_eq!((s, c), (DvfsTier::Med, 0));
        let (s, c) = TierFsm::transition(s, c, DvfsTier::Med, 2);
        assert_eq!((s, c), (DvfsTier::Med, 0));
    }

    #[test]
    fn test_fsm_hysteresis_one_switches_immediately() {
        let mut fsm = TierFsm::new(1);
        assert_eq!(fsm.observe(DvfsTier::Low), DvfsTier::Low);
    }

    #[test]
    fn test_adaptive_ramp_down_after_busy_prefix() {
        // Occupancy [busy, busy, idle, idle], window 2, hysteresis 1:
        // t0 util 1.0 -> high, busy 5.0
        // t1 util 1.0 -> high, busy 5.0
        // t2 util 0.5 -> med,  idle 0.2 + 3.0*0.2*0.7 = 0.62
        // t3 util 0.0 -> low,  idle 0.2 + 1.5*0.2*0.4 = 0.32
        let r = run(vec![Segment::new("P1", 0, 2)], 4, 0);
        let params = AdaptiveParams {
            window: 2,
            ..AdaptiveParams::default()
        };
        let est = estimate_adaptive(&r, &params, &PowerModel::default());

        assert!((est.energy - 10.94).abs() < 1e-10);
        let trace = &est.breakdown.per_time;
        assert_eq!(trace[1].dvfs_state, Some(DvfsTier::High));
        assert_eq!(trace[2].dvfs_state, Some(DvfsTier::Med));
        assert_eq!(trace[3].dvfs_state, Some(DvfsTier::Low));
        assert!((trace[2].utilization.unwrap() - 0.5).abs() < 1e-10);
        assert_eq!(est.breakdown.busy_slots, 2);
        assert_eq!(est.breakdown.idle_slots, 2);
    }

    #[test]
    fn test_window_clipped_at_timeline_start() {
        // At t=0 the window holds a single slot, so utilization is 0 or 1,
        // never a fraction of the full window length.
        let r = run(vec![Segment::new("P1", 0, 1)], 2, 0);
        let est = estimate_adaptive(&r, &AdaptiveParams::default(), &PowerModel::default());

        let trace = &est.breakdown.per_time;
        assert!((trace[0].utilization.unwrap() - 1.0).abs() < 1e-10);
        assert!((trace[1].utilization.unwrap() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_forced_target_still_passes_through_fsm() {
        // Low pinned with hysteresis 2: the switch lands on the second
        // slot, so the first busy slot still pays high-tier power.
        let r = run(vec![Segment::new("P1", 0, 3)], 3, 0);
        let params = AdaptiveParams {
            hysteresis: 2,
            mode: TargetMode::Forced(DvfsTier::Low),
            ..AdaptiveParams::default()
        };
        let est = estimate_adaptive(&r, &params, &PowerModel::default());

        let trace = &est.breakdown.per_time;
        assert_eq!(trace[0].dvfs_state, Some(DvfsTier::High));
        assert_eq!(trace[1].dvfs_state, Some(DvfsTier::Low));
        assert_eq!(trace[2].dvfs_state, Some(DvfsTier::Low));
        assert!((est.energy - (5.0 + 0.6 + 0.6)).abs() < 1e-10);
    }

    #[test]
    fn test_auto_target_follows_occupancy() {
        // Busy then idle, hysteresis 1: tier tracks occupancy one-for-one.
        let r = run(vec![Segment::new("P1", 0, 1)], 3, 0);
        let params = AdaptiveParams {
            mode: TargetMode::Auto,
            ..AdaptiveParams::default()
        };
        let est = estimate_adaptive(&r, &params, &PowerModel::default());

        let trace = &est.breakdown.per_time;
        assert_eq!(trace[0].dvfs_state, Some(DvfsTier::High));
        assert_eq!(trace[1].dvfs_state, Some(DvfsTier::Low));
        assert_eq!(trace[2].dvfs_state, Some(DvfsTier::Low));
    }

    #[test]
    fn test_context_switch_cost_added() {
        let r = run(vec![Segment::new("P1", 0, 3)], 3, 3);
        let est = estimate_adaptive(&r, &AdaptiveParams::default(), &PowerModel::default());

        assert!((est.breakdown.cs_energy - 3.6).abs() < 1e-10);
        // Fully busy: high tier throughout, 3 * 5.0 + 3.6.
        assert!((est.energy - 18.6).abs() < 1e-10);
    }

    #[test]
    fn test_degenerate_total_time() {
        let r = run(vec![], 0, 0);
        let est = estimate_adaptive(&r, &AdaptiveParams::default(), &PowerModel::default());

        assert!((est.energy - 0.0).abs() < 1e-10);
        assert_eq!(est.breakdown.msg.as_deref(), Some("total_time zero"));
    }

    #[test]
    fn test_default_params_match_reference_tuning() {
        let p = AdaptiveParams::default();
        assert_eq!(p.window, 3);
        assert_eq!(p.hysteresis, 1);
        assert!((p.th_high - 0.6).abs() < 1e-10);
        assert!((p.th_med - 0.2).abs() < 1e-10);
        assert_eq!(p.mode, TargetMode::Adaptive);
    }
}
