//! Token marker vocabulary.
//!
//! Markers are the visual indicators the platform paints on a creature's
//! token. The engine only ever *derives* marker sets (from the canonical
//! health state, or from a failed saving throw); applying them to a token
//! is the platform collaborator's job.

use bitflags::bitflags;

/// A single token marker icon.
///
/// Display names match the platform's marker identifiers (kebab-case).
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
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Marker {
    // ===== wound family (derived from HealthState) =====
    Green,
    Brown,
    Red,
    Pummeled,
    Sleepy,
    Skull,
    BrokenSkull,
    Dead,

    // ===== effect family (saving-throw conditions) =====
    BleedingEye,
    FrozenOrb,
    LightningHelix,
    ChemicalBolt,
    Screaming,
    Cobweb,
    Radioactive,
    DrinkMe,
    Interdiction,
    HalfHaze,
    BrokenShield,
}

bitflags! {
    /// A set of token markers.
    ///
    /// The wound family is mutually exclusive: use
    /// [`MarkerSet::apply_wound`] so that setting one clears the rest.
    /// Effect markers belong to saving-throw conditions and stack freely;
    /// the health rules never touch them.
    ///
    /// Serialization comes from the `bitflags/serde` feature when `serde`
    /// is enabled.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MarkerSet: u32 {
        const GREEN = 1 << 0;
        const BROWN = 1 << 1;
        const RED = 1 << 2;
        const PUMMELED = 1 << 3;
        const SLEEPY = 1 << 4;
        const SKULL = 1 << 5;
        const BROKEN_SKULL = 1 << 6;
        const DEAD = 1 << 7;

        const BLEEDING_EYE = 1 << 8;
        const FROZEN_ORB = 1 << 9;
        const LIGHTNING_HELIX = 1 << 10;
        const CHEMICAL_BOLT = 1 << 11;
        const SCREAMING = 1 << 12;
        const COBWEB = 1 << 13;
        const RADIOACTIVE = 1 << 14;
        const DRINK_ME = 1 << 15;
        const INTERDICTION = 1 << 16;
        const HALF_HAZE = 1 << 17;
        const BROKEN_SHIELD = 1 << 18;

        /// Every marker the health state machine may set.
        const WOUND_FAMILY = Self::GREEN.bits()
            | Self::BROWN.bits()
            | Self::RED.bits()
            | Self::PUMMELED.bits()
            | Self::SLEEPY.bits()
            | Self::SKULL.bits()
            | Self::BROKEN_SKULL.bits()
            | Self::DEAD.bits();
    }
}

impl From<Marker> for MarkerSet {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Green => Self::GREEN,
            Marker::Brown => Self::BROWN,
            Marker::Red => Self::RED,
            Marker::Pummeled => Self::PUMMELED,
            Marker::Sleepy => Self::SLEEPY,
            Marker::Skull => Self::SKULL,
            Marker::BrokenSkull => Self::BROKEN_SKULL,
            Marker::Dead => Self::DEAD,
            Marker::BleedingEye => Self::BLEEDING_EYE,
            Marker::FrozenOrb => Self::FROZEN_ORB,
            Marker::LightningHelix => Self::LIGHTNING_HELIX,
            Marker::ChemicalBolt => Self::CHEMICAL_BOLT,
            Marker::Screaming => Self::SCREAMING,
            Marker::Cobweb => Self::COBWEB,
            Marker::Radioactive => Self::RADIOACTIVE,
            Marker::DrinkMe => Self::DRINK_ME,
            Marker::Interdiction => Self::INTERDICTION,
            Marker::HalfHaze => Self::HALF_HAZE,
            Marker::BrokenShield => Self::BROKEN_SHIELD,
        }
    }
}

impl MarkerSet {
    /// Replaces the wound-family markers with the given one, leaving effect
    /// markers untouched.
    #[must_use]
    pub fn apply_wound(self, marker: Option<Marker>) -> Self {
        let cleared = self - Self::WOUND_FAMILY;
        match marker {
            Some(marker) => cleared | MarkerSet::from(marker),
            None => cleared,
        }
    }
}
