//! Health-state evaluation.
//!
//! The single entry point for every vitals change: damage, healing, and
//! direct edits all funnel through [`evaluate`], which recomputes the
//! canonical state from the new snapshot and reports which thresholds were
//! crossed. The engine holds nothing between calls; the caller persists
//! the vitals returned in the result.

use crate::config::EngineConfig;
use crate::error::{EngineError, ErrorSeverity};
use crate::health::narrate::{Narration, Narrative};
use crate::health::state::HealthState;
use crate::markers::MarkerSet;
use crate::vitals::{CreatureCategory, CreatureMeta, VitalsSnapshot};

/// Why an evaluation was skipped.
///
/// All of these are expected conditions the caller treats as a silent
/// no-op, not errors to raise at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    /// The creature has no linked character metadata.
    #[error("creature has no linked character metadata")]
    MissingCharacterLink,

    /// The snapshot cannot be evaluated (maximum hit points not positive).
    #[error("maximum hit points must be positive (got {hp_max})")]
    InvalidVitals {
        /// The offending maximum.
        hp_max: i32,
    },
}

impl EngineError for SkipReason {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCharacterLink => ErrorSeverity::Recoverable,
            Self::InvalidVitals { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCharacterLink => "missing_character_link",
            Self::InvalidVitals { .. } => "invalid_vitals",
        }
    }
}

/// The outcome of a successful evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusResult {
    /// The new canonical health state.
    pub state: HealthState,
    /// Wound-family markers to display, derived from `state`.
    pub markers: MarkerSet,
    /// Normalized vitals for the caller to persist: nonlethal overflow has
    /// been converted to lethal damage and the stability flag updated.
    pub vitals: VitalsSnapshot,
    /// Threshold-crossing narration; empty when nothing notable happened.
    pub narrative: Narration,
}

/// Result of one evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Evaluation {
    /// Vitals unchanged since the previous snapshot; nothing to do.
    Unchanged,
    /// A new canonical state was computed.
    Updated(StatusResult),
    /// The input could not be evaluated; treat as a silent no-op.
    Skipped(SkipReason),
}

impl Evaluation {
    /// The computed result, if this evaluation produced one.
    pub fn updated(&self) -> Option<&StatusResult> {
        match self {
            Self::Updated(result) => Some(result),
            _ => None,
        }
    }
}

/// Derives the canonical health state and narration for a vitals change.
///
/// `previous` is absent for direct edits where no comparison is available;
/// the new state is then narrated outright instead of only on threshold
/// crossings. Rules applied, first match wins:
///
/// 1. Unchanged hp/max/nonlethal: no recomputation, empty narrative.
/// 2. Taking damage clears the stability flag; any other change with a
///    previous snapshot sets it (healed means stabilised, even when the
///    edit nets to zero).
/// 3. Living creatures convert nonlethal in excess of the maximum into
///    lethal damage. Non-living creatures convert all of it, and their hp
///    floors at 0.
/// 4. State selection per wound band over effective hp, with the death
///    threshold at minus the Constitution modifier.
pub fn evaluate(
    previous: Option<&VitalsSnapshot>,
    current: &VitalsSnapshot,
    meta: Option<&CreatureMeta>,
) -> Evaluation {
    let Some(meta) = meta else {
        return Evaluation::Skipped(SkipReason::MissingCharacterLink);
    };
    if current.hp_max <= 0 {
        return Evaluation::Skipped(SkipReason::InvalidVitals {
            hp_max: current.hp_max,
        });
    }
    if let Some(prev) = previous
        && prev.hp == current.hp
        && prev.hp_max == current.hp_max
        && prev.nonlethal == current.nonlethal
    {
        return Evaluation::Unchanged;
    }

    let category = meta.category;
    let living = category.is_living();
    let hp_max = current.hp_max;
    let mut hp = current.hp;
    let mut nonlethal = current.nonlethal;

    let took_damage =
        previous.is_some_and(|p| current.hp < p.hp || current.nonlethal > p.nonlethal);
    let mut stable = current.stable;
    if took_damage {
        stable = false;
    } else if previous.is_some() {
        stable = true;
    }

    if living {
        // Nonlethal damage beyond the maximum spills over into real damage.
        // Saturating: an absurd nonlethal total pins hp at i32::MIN, which
        // is past any death threshold, rather than wrapping.
        if nonlethal > hp_max {
            hp = hp.saturating_sub(nonlethal - hp_max);
            nonlethal = hp_max;
        }
    } else {
        // The non-living cannot be knocked out: all nonlethal is lethal,
        // and there is no negative-hp dying state.
        hp = hp.saturating_sub(nonlethal);
        nonlethal = 0;
        if hp < 0 {
            hp = 0;
        }
    }

    let vitals = VitalsSnapshot::new(hp, hp_max, nonlethal, stable);
    let effective = vitals.effective_hp(category);
    let death_threshold = meta.death_threshold();

    // Death is sticky: a creature already past its threshold stays dead no
    // matter what the new numbers say.
    let previously_terminal = previous.is_some_and(|p| {
        if living {
            p.hp <= death_threshold
        } else {
            p.hp < 1
        }
    });
    if previously_terminal {
        let state = terminal_state(category);
        return Evaluation::Updated(StatusResult {
            state,
            markers: state.markers(),
            vitals,
            narrative: Narration::empty(),
        });
    }

    let state = select_state(&vitals, effective, stable, death_threshold, category);
    let narrative = narrate(previous, &vitals, effective, state, took_damage, category);

    tracing::trace!(
        ?state,
        hp,
        nonlethal,
        effective,
        took_damage,
        "health state evaluated"
    );

    Evaluation::Updated(StatusResult {
        state,
        markers: state.markers(),
        vitals,
        narrative,
    })
}

const fn terminal_state(category: CreatureCategory) -> HealthState {
    match category {
        CreatureCategory::Swarm => HealthState::Destroyed,
        _ => HealthState::Dead,
    }
}

/// State selection over normalized vitals; priority-ordered, first match
/// wins.
fn select_state(
    vitals: &VitalsSnapshot,
    effective: i32,
    stable: bool,
    death_threshold: i32,
    category: CreatureCategory,
) -> HealthState {
    const BAND: i64 = EngineConfig::WOUND_BAND_DIVISOR;
    let hp = vitals.hp;
    let max = vitals.hp_max as i64;
    let eff = effective as i64;

    if !category.is_living() && hp < 1 {
        terminal_state(category)
    } else if hp <= death_threshold {
        HealthState::Dead
    } else if effective < 0 {
        if hp < 0 && !stable {
            HealthState::DyingUnstable
        } else if hp < 0 {
            HealthState::DyingStable
        } else {
            HealthState::Unconscious
        }
    } else if effective == 0 {
        HealthState::Staggered
    } else if eff * BAND <= max {
        HealthState::HeavilyWounded
    } else if eff * BAND <= max * 2 {
        HealthState::ModeratelyWounded
    } else if effective < vitals.hp_max {
        HealthState::LightlyWounded
    } else {
        HealthState::Healthy
    }
}

/// The line describing a state outright (direct edits, `status` queries).
pub(crate) fn describe(state: HealthState, hp: i32) -> Narrative {
    match state {
        HealthState::Healthy => Narrative::Unhurt,
        HealthState::LightlyWounded => Narrative::LightlyWounded,
        HealthState::ModeratelyWounded => Narrative::ModeratelyWounded,
        HealthState::HeavilyWounded => Narrative::HeavilyWounded,
        HealthState::Staggered => {
            if hp == 0 {
                Narrative::Disabled
            } else {
                Narrative::Staggered
            }
        }
        HealthState::Unconscious => Narrative::Unconscious,
        HealthState::DyingUnstable => Narrative::Dying {
            dc: EngineConfig::STABILISE_BASE_DC - hp,
        },
        HealthState::DyingStable => Narrative::Stable,
        HealthState::Dead => Narrative::Dead,
        HealthState::Destroyed => Narrative::Destroyed,
    }
}

/// Threshold-crossing narration.
///
/// A line is emitted only when the transition crosses a notable threshold,
/// never for merely remaining in a band. The comparison operators differ
/// deliberately between bands (e.g. the heavy band narrates only when the
/// previous effective hp was strictly above a third of maximum, the light
/// band only when it was at full); these asymmetries are part of the rules.
fn narrate(
    previous: Option<&VitalsSnapshot>,
    vitals: &VitalsSnapshot,
    effective: i32,
    state: HealthState,
    took_damage: bool,
    category: CreatureCategory,
) -> Narration {
    const BAND: i64 = EngineConfig::WOUND_BAND_DIVISOR;
    let hp = vitals.hp;
    let max = vitals.hp_max as i64;
    let eff = effective as i64;

    let Some(prev) = previous else {
        // Direct edit with no comparison available: describe the new state.
        return Narration::line(describe(state, hp));
    };

    let prev_eff = prev.effective_hp(category) as i64;
    let mut narration = Narration::empty();

    if took_damage {
        match state {
            HealthState::Destroyed => narration.push(Narrative::Destroyed),
            HealthState::Dead => narration.push(Narrative::Dead),
            // The DC changes with every point lost, so a dying creature is
            // re-narrated on each hit.
            HealthState::DyingUnstable => narration.push(Narrative::Dying {
                dc: EngineConfig::STABILISE_BASE_DC - hp,
            }),
            // Unreachable while taking damage (damage clears stability).
            HealthState::DyingStable => {}
            HealthState::Unconscious => {
                if prev_eff >= 0 {
                    narration.push(Narrative::Unconscious);
                }
            }
            HealthState::Staggered => {
                if prev_eff > 0 {
                    narration.push(if hp == 0 {
                        Narrative::Disabled
                    } else {
                        Narrative::Staggered
                    });
                }
            }
            HealthState::HeavilyWounded => {
                if prev_eff * BAND > max {
                    narration.push(Narrative::HeavilyWounded);
                }
            }
            HealthState::ModeratelyWounded => {
                if prev_eff * BAND > max * 2 {
                    narration.push(Narrative::ModeratelyWounded);
                }
            }
            HealthState::LightlyWounded => {
                if prev_eff >= max {
                    narration.push(Narrative::LightlyWounded);
                }
            }
            HealthState::Healthy => {}
        }
    } else if eff > prev_eff {
        // Healing direction: narrate the highest threshold crossed upward.
        if eff >= max && prev_eff < max {
            narration.push(Narrative::HealedToFull);
        } else if eff * BAND > max * 2 && prev_eff * BAND <= max * 2 {
            narration.push(Narrative::HealedToLight);
        } else if eff * BAND > max && prev_eff * BAND <= max {
            narration.push(Narrative::HealedToModerate);
        } else if eff > 0 && prev_eff <= 0 {
            narration.push(Narrative::RegainsConsciousness);
        } else if hp < 0 && !prev.stable {
            // Healed but still below 0: the bleeding stops, nothing more.
            narration.push(Narrative::Stable);
        }
    } else if hp < 0 && !prev.stable {
        // A no-net-change edit still stabilises a dying creature.
        narration.push(Narrative::Stable);
    }

    narration
}
