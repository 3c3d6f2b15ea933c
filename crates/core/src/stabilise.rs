//! Stabilisation checks for dying creatures.
//!
//! A creature below 0 hp and not yet stable loses a hit point each round
//! unless it passes this check. The DC scales with how far gone it is:
//! base 10 minus current hp, so -3 hp means DC 13.

use crate::config::EngineConfig;
use crate::dice::DiceOracle;
use crate::health::{Narration, Narrative};
use crate::vitals::{CreatureMeta, VitalsSnapshot};

/// How a stabilisation attempt resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StabiliseVerdict {
    /// The check passed; the bleeding stops.
    Stabilised { die: u32, total: i32, dc: i32 },
    /// The check failed; the creature loses another hit point.
    StillDying { die: u32, total: i32, dc: i32 },
    /// No roll: the creature is at 0 hp or better.
    NotDying,
    /// No roll: the creature already stopped bleeding.
    AlreadyStable,
    /// No roll: too late.
    AlreadyDead,
}

impl StabiliseVerdict {
    /// True when the creature ends the check stable (including the
    /// short-circuit for an already-stable creature).
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stabilised { .. } | Self::AlreadyStable)
    }

    /// True when a die was actually rolled.
    pub const fn rolled(&self) -> bool {
        matches!(self, Self::Stabilised { .. } | Self::StillDying { .. })
    }
}

/// Outcome of a stabilisation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StabiliseOutcome {
    pub verdict: StabiliseVerdict,
    /// Vitals for the caller to persist (hp and stability flag may have
    /// changed).
    pub vitals: VitalsSnapshot,
    /// Exactly one line.
    pub narrative: Narration,
}

/// Attempts to stabilise a dying creature.
///
/// d20 + Constitution modifier against DC `10 - hp`; a raw 20 on the die
/// always succeeds regardless of the modifier. Creatures that are dead,
/// already stable, or not below 0 hp short-circuit with an informational
/// line and no roll.
///
/// On failure the creature bleeds for one more hit point; routing the
/// returned vitals back through [`evaluate`](crate::health::evaluate) is
/// the caller's job, as is the round-by-round scheduling.
pub fn stabilise(
    vitals: &VitalsSnapshot,
    meta: &CreatureMeta,
    dice: &(impl DiceOracle + ?Sized),
    seed: u64,
) -> StabiliseOutcome {
    if vitals.hp <= meta.death_threshold() {
        return StabiliseOutcome {
            verdict: StabiliseVerdict::AlreadyDead,
            vitals: *vitals,
            narrative: Narration::line(Narrative::AlreadyDead),
        };
    }
    if vitals.hp >= 0 {
        return StabiliseOutcome {
            verdict: StabiliseVerdict::NotDying,
            vitals: *vitals,
            narrative: Narration::line(Narrative::NotDying),
        };
    }
    if vitals.stable {
        return StabiliseOutcome {
            verdict: StabiliseVerdict::AlreadyStable,
            vitals: *vitals,
            narrative: Narration::line(Narrative::AlreadyStable),
        };
    }

    let dc = EngineConfig::STABILISE_BASE_DC - vitals.hp;
    let die = dice.roll_d20(seed);
    let total = die as i32 + meta.constitution_mod;
    // A natural 20 stabilises no matter how deep the wound.
    let success = die == EngineConfig::D20_SIDES || total >= dc;

    tracing::debug!(die, total, dc, success, "stabilise check");

    if success {
        StabiliseOutcome {
            verdict: StabiliseVerdict::Stabilised { die, total, dc },
            vitals: VitalsSnapshot::new(vitals.hp, vitals.hp_max, vitals.nonlethal, true),
            narrative: Narration::line(Narrative::StopsBleeding),
        }
    } else {
        StabiliseOutcome {
            verdict: StabiliseVerdict::StillDying { die, total, dc },
            vitals: VitalsSnapshot::new(vitals.hp - 1, vitals.hp_max, vitals.nonlethal, false),
            narrative: Narration::line(Narrative::BleedsMore),
        }
    }
}
