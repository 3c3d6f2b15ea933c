//! Saving-throw resolution.
//!
//! Resolves a d20 saving throw against a DC and decides what to apply:
//! damage (full on failure, optionally half on success), a named condition
//! from the catalogue, or the default failure marker when the command
//! specified neither. Applying the damage is the caller's job, routed back
//! through the health rules like any other hit.

use core::fmt;

use crate::config::EngineConfig;
use crate::dice::DiceOracle;
use crate::effects::NamedEffect;
use crate::markers::Marker;

/// The three saving-throw categories.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SaveKind {
    #[strum(serialize = "fort", to_string = "fortitude")]
    Fortitude,
    #[strum(serialize = "ref", to_string = "reflex")]
    Reflex,
    Will,
}

/// A d20 roll plus a flat bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct D20Roll {
    /// The raw die, 1 to 20.
    pub die: u32,
    /// Save bonus added to the die.
    pub bonus: i32,
}

impl D20Roll {
    pub const fn new(die: u32, bonus: i32) -> Self {
        Self { die, bonus }
    }

    /// Rolls a fresh d20 through the oracle.
    pub fn roll(dice: &(impl DiceOracle + ?Sized), seed: u64, bonus: i32) -> Self {
        Self::new(dice.roll_d20(seed), bonus)
    }

    pub const fn total(&self) -> i32 {
        self.die as i32 + self.bonus
    }

    /// Automatic failure, regardless of the total.
    pub const fn is_natural_1(&self) -> bool {
        self.die == 1
    }

    /// Automatic success, regardless of the total.
    pub const fn is_natural_20(&self) -> bool {
        self.die == EngineConfig::D20_SIDES
    }
}

/// What a saving throw is for and what rides on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveRequest {
    pub kind: SaveKind,
    pub dc: i32,
    /// Damage applied on a failed save.
    pub damage_on_fail: Option<i32>,
    /// Damage applied even on a successful save (the "half" amount, given
    /// outright by the command).
    pub half_damage_on_success: Option<i32>,
    /// Condition inflicted on a failed save.
    pub effect: Option<NamedEffect>,
}

impl SaveRequest {
    pub const fn new(kind: SaveKind, dc: i32) -> Self {
        Self {
            kind,
            dc,
            damage_on_fail: None,
            half_damage_on_success: None,
            effect: None,
        }
    }

    #[must_use]
    pub const fn with_damage(mut self, damage: i32) -> Self {
        self.damage_on_fail = Some(damage);
        self
    }

    #[must_use]
    pub const fn with_half_damage(mut self, damage: i32) -> Self {
        self.half_damage_on_success = Some(damage);
        self
    }

    #[must_use]
    pub const fn with_effect(mut self, effect: NamedEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// The single narrative line a resolution produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveNarrative {
    pub kind: SaveKind,
    pub roll: D20Roll,
    pub dc: i32,
    pub success: bool,
    /// Condition inflicted, narrated with its rules text.
    pub effect: Option<NamedEffect>,
}

impl fmt::Display for SaveNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.success { "passes" } else { "fails" };
        let sign = if self.roll.bonus < 0 { '-' } else { '+' };
        write!(
            f,
            "{verb} the {} save ({} {sign} {} = {} vs DC {})",
            self.kind,
            self.roll.die,
            self.roll.bonus.unsigned_abs(),
            self.roll.total(),
            self.dc
        )?;
        if let Some(effect) = self.effect {
            write!(f, " and {}", effect.description())?;
        }
        Ok(())
    }
}

/// Result of resolving one saving throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveOutcome {
    pub success: bool,
    /// Damage for the caller to apply through the health rules, if any.
    pub damage: Option<i32>,
    /// At most one marker icon to paint.
    pub marker: Option<Marker>,
    pub narrative: SaveNarrative,
}

/// Resolves a saving throw.
///
/// A natural 1 always fails and a natural 20 always succeeds; only
/// otherwise does the total get compared to the DC. On failure the named
/// effect's marker is applied when one was given; when the command gave
/// neither damage nor an effect, the default failure marker is.
pub fn resolve_save(request: &SaveRequest, roll: D20Roll) -> SaveOutcome {
    let success = if roll.is_natural_1() {
        false
    } else if roll.is_natural_20() {
        true
    } else {
        roll.total() >= request.dc
    };

    tracing::debug!(
        kind = %request.kind,
        die = roll.die,
        total = roll.total(),
        dc = request.dc,
        success,
        "saving throw"
    );

    let (damage, marker, effect) = if success {
        (request.half_damage_on_success, None, None)
    } else {
        let marker = match request.effect {
            Some(effect) => Some(effect.marker()),
            None if request.damage_on_fail.is_none() => Some(Marker::BrokenShield),
            None => None,
        };
        (request.damage_on_fail, marker, request.effect)
    };

    SaveOutcome {
        success,
        damage,
        marker,
        narrative: SaveNarrative {
            kind: request.kind,
            roll,
            dc: request.dc,
            success,
            effect,
        },
    }
}
