//! Canonical health states.

use crate::markers::{Marker, MarkerSet};

/// The canonical health state of a creature.
///
/// Exactly one state holds at any time. States are never patched
/// incrementally: every evaluation recomputes the state from the new
/// vitals, and the marker set is a pure derivation of the result, so
/// contradictory flag combinations cannot exist.
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
pub enum HealthState {
    /// At full effective hit points.
    #[default]
    Healthy,
    /// Below full, above two thirds of maximum.
    LightlyWounded,
    /// At or below two thirds of maximum.
    ModeratelyWounded,
    /// At or below one third of maximum.
    HeavilyWounded,
    /// Effective hp exactly 0: one action per round. Reads as "disabled"
    /// when actual hp is 0, "staggered" when nonlethal brought it there.
    Staggered,
    /// Effective hp below 0 with actual hp still 0 or above: knocked out
    /// by nonlethal damage.
    Unconscious,
    /// Actual hp below 0 and still losing blood each round.
    DyingUnstable,
    /// Actual hp below 0 but no longer deteriorating.
    DyingStable,
    /// Past the death threshold. Terminal.
    Dead,
    /// The non-living equivalent of death, used for swarms. Terminal.
    Destroyed,
}

impl HealthState {
    /// Terminal states are sticky: the engine never downgrades a dead or
    /// destroyed creature back to a live state.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Dead | Self::Destroyed)
    }

    /// True when the creature cannot act at all.
    pub const fn is_down(&self) -> bool {
        matches!(
            self,
            Self::Unconscious
                | Self::DyingUnstable
                | Self::DyingStable
                | Self::Dead
                | Self::Destroyed
        )
    }

    /// The wound-family marker for this state, if any.
    pub const fn marker(&self) -> Option<Marker> {
        match self {
            Self::Healthy => None,
            Self::LightlyWounded => Some(Marker::Green),
            Self::ModeratelyWounded => Some(Marker::Brown),
            Self::HeavilyWounded => Some(Marker::Red),
            Self::Staggered => Some(Marker::Pummeled),
            Self::Unconscious => Some(Marker::Sleepy),
            Self::DyingUnstable => Some(Marker::Skull),
            Self::DyingStable => Some(Marker::BrokenSkull),
            Self::Dead | Self::Destroyed => Some(Marker::Dead),
        }
    }

    /// The full marker set to display for this state.
    ///
    /// Pure derivation: wound markers are mutually exclusive, and effect
    /// markers owned by the saving-throw rules are never included here.
    pub fn markers(&self) -> MarkerSet {
        MarkerSet::empty().apply_wound(self.marker())
    }
}
