//! Status-effect catalogue.
//!
//! Named conditions a failed saving throw can inflict. Each entry pairs a
//! token marker with the description spoken to the table. The catalogue is
//! fixed: command handlers look an effect up *before* rolling, and an
//! unknown name rejects the command with a usage message rather than
//! reaching the dice.

use core::str::FromStr;

use crate::error::{EngineError, ErrorSeverity};
use crate::markers::Marker;

/// A named condition from the catalogue.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum NamedEffect {
    Blinded,
    Paralyzed,
    Stunned,
    Poisoned,
    Frightened,
    Entangled,
    Sickened,
    Nauseated,
    Dazed,
    Shaken,
}

impl NamedEffect {
    /// The token marker painted when this condition is applied.
    pub const fn marker(&self) -> Marker {
        match self {
            Self::Blinded => Marker::BleedingEye,
            Self::Paralyzed => Marker::FrozenOrb,
            Self::Stunned => Marker::LightningHelix,
            Self::Poisoned => Marker::ChemicalBolt,
            Self::Frightened => Marker::Screaming,
            Self::Entangled => Marker::Cobweb,
            Self::Sickened => Marker::Radioactive,
            Self::Nauseated => Marker::DrinkMe,
            Self::Dazed => Marker::Interdiction,
            Self::Shaken => Marker::HalfHaze,
        }
    }

    /// Rules text spoken to the table when the condition lands.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Blinded => "cannot see; all opponents gain total concealment",
            Self::Paralyzed => "is frozen in place, helpless and unable to act",
            Self::Stunned => "drops everything held and can take no actions",
            Self::Poisoned => "takes ongoing poison damage each round until cured",
            Self::Frightened => "must flee from the source of its fear",
            Self::Entangled => {
                "is ensnared: half speed, -2 on attack rolls, -4 to Dexterity"
            }
            Self::Sickened => "takes -2 on attack rolls, saves, skill and ability checks",
            Self::Nauseated => "can take only a single move action each round",
            Self::Dazed => "can take no actions, but defends itself normally",
            Self::Shaken => "is shaken: -2 on attack rolls, saves and checks",
        }
    }

    /// Resolves an effect name from a command argument.
    pub fn lookup(name: &str) -> Result<Self, EffectLookupError> {
        Self::from_str(name).map_err(|_| EffectLookupError::UnknownEffect {
            name: name.to_owned(),
        })
    }
}

/// Errors from catalogue lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectLookupError {
    /// The named effect is not in the catalogue.
    #[error("unknown effect '{name}'")]
    UnknownEffect {
        /// The name as given on the command line.
        name: String,
    },
}

impl EngineError for EffectLookupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEffect { .. } => "unknown_effect",
        }
    }
}
