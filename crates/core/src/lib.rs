//! Deterministic combat-status rules shared across frontends.
//!
//! `deathwatch-core` defines the canonical health rules for a tabletop
//! combat aid: given a creature's vitals before and after some change, it
//! derives the creature's health state, the token markers to display, and
//! the narration to speak. All state mutation is owned by the caller; every
//! API here is a pure function over values passed in per call.
pub mod config;
pub mod dice;
pub mod effects;
pub mod error;
pub mod health;
pub mod hit_dice;
pub mod markers;
pub mod saves;
pub mod stabilise;
pub mod vitals;

pub use config::EngineConfig;
pub use dice::{DiceOracle, PcgDice, compute_seed};
pub use effects::{EffectLookupError, NamedEffect};
pub use error::{EngineError, ErrorSeverity};
pub use health::{
    Evaluation, HealthState, Narration, Narrative, SkipReason, StatusResult, evaluate,
};
pub use hit_dice::{HitDice, HitDiceParseError, HitPointPolicy};
pub use markers::{Marker, MarkerSet};
pub use saves::{D20Roll, SaveKind, SaveNarrative, SaveOutcome, SaveRequest, resolve_save};
pub use stabilise::{StabiliseOutcome, StabiliseVerdict, stabilise};
pub use vitals::{CreatureCategory, CreatureMeta, VitalsSnapshot};
