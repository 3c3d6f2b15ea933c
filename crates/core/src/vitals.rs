//! Creature vitals and classification.
//!
//! A [`VitalsSnapshot`] captures a creature's hit-point bookkeeping at one
//! instant. The engine never mutates stored state: callers capture a
//! snapshot before and after a change and hand both to
//! [`evaluate`](crate::health::evaluate), which returns the normalized
//! vitals to persist.

/// Creature classification for the health rules.
///
/// Non-living categories never accrue nonlethal damage and have no
/// negative-hp dying state: they are simply destroyed at 0 hit points.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CreatureCategory {
    /// Ordinary living creature - the default
    #[default]
    Living,
    /// Undead - mindless or otherwise
    Undead,
    /// Construct - golems, animated objects
    Construct,
    /// Inevitable - lawful outsider machines
    Inevitable,
    /// Swarm - masses of tiny creatures; "destroyed" rather than killed
    Swarm,
}

impl CreatureCategory {
    /// Whether this category follows the living rules (nonlethal damage,
    /// negative-hp dying).
    pub const fn is_living(&self) -> bool {
        matches!(self, Self::Living)
    }
}

/// Metadata about a creature that the health rules depend on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureMeta {
    /// Constitution modifier; determines the death threshold. A creature
    /// dies once hp drops to or below the negative of this value.
    pub constitution_mod: i32,
    /// Living / non-living classification.
    pub category: CreatureCategory,
}

impl CreatureMeta {
    pub const fn new(constitution_mod: i32, category: CreatureCategory) -> Self {
        Self {
            constitution_mod,
            category,
        }
    }

    /// Living creature with the given Constitution modifier.
    pub const fn living(constitution_mod: i32) -> Self {
        Self::new(constitution_mod, CreatureCategory::Living)
    }

    /// Hit points at or below which this creature is dead.
    pub const fn death_threshold(&self) -> i32 {
        -self.constitution_mod
    }
}

/// A creature's hit-point bookkeeping at a point in time.
///
/// Immutable once captured. `hp` is signed and may go negative for living
/// creatures; `nonlethal` is non-negative but may transiently exceed
/// `hp_max` before evaluation normalizes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsSnapshot {
    /// Current hit points.
    pub hp: i32,
    /// Maximum hit points. Snapshots with `hp_max <= 0` are ignored by the
    /// engine.
    pub hp_max: i32,
    /// Accumulated nonlethal damage.
    pub nonlethal: i32,
    /// True once a dying creature has stopped losing hp each round.
    pub stable: bool,
}

impl VitalsSnapshot {
    pub const fn new(hp: i32, hp_max: i32, nonlethal: i32, stable: bool) -> Self {
        Self {
            hp,
            hp_max,
            nonlethal,
            stable,
        }
    }

    /// An uninjured creature at full hit points.
    pub const fn full(hp_max: i32) -> Self {
        Self::new(hp_max, hp_max, 0, false)
    }

    /// Effective hit points: what the wound bands and unconsciousness rules
    /// actually look at. Nonlethal damage only counts against the living.
    pub const fn effective_hp(&self, category: CreatureCategory) -> i32 {
        if category.is_living() {
            self.hp.saturating_sub(self.nonlethal)
        } else {
            self.hp
        }
    }
}
