//! Narration fragments.
//!
//! Narration is returned as structured fragments rather than prose so the
//! platform layer decides how to render them (boxed chat message, whisper
//! to the game master, plain text). Each fragment displays as a
//! third-person phrase; the caller prepends the creature's name.

use core::fmt;

use arrayvec::ArrayVec;

use crate::config::EngineConfig;

/// One narrative fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Narrative {
    // ===== downward threshold crossings =====
    Unhurt,
    LightlyWounded,
    ModeratelyWounded,
    HeavilyWounded,
    /// Effective hp 0 through nonlethal damage alone.
    Staggered,
    /// Actual hp exactly 0.
    Disabled,
    Unconscious,
    /// Bleeding out; `dc` is the stabilisation DC (10 minus current hp).
    Dying { dc: i32 },
    /// Below 0 hp but no longer bleeding.
    Stable,
    Dead,
    Destroyed,

    // ===== upward threshold crossings =====
    HealedToFull,
    HealedToLight,
    HealedToModerate,
    RegainsConsciousness,

    // ===== stabilisation checks =====
    StopsBleeding,
    BleedsMore,
    NotDying,
    AlreadyStable,
    AlreadyDead,
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unhurt => write!(f, "is unhurt"),
            Self::LightlyWounded => write!(f, "is lightly wounded"),
            Self::ModeratelyWounded => write!(f, "is moderately wounded"),
            Self::HeavilyWounded => write!(f, "is heavily wounded"),
            Self::Staggered => {
                write!(f, "is staggered and can only take a single action each round")
            }
            Self::Disabled => write!(f, "is disabled; any strenuous action will start it dying"),
            Self::Unconscious => write!(f, "has been knocked unconscious"),
            Self::Dying { dc } => {
                write!(f, "is dying, and needs a DC {dc} check to stabilise")
            }
            Self::Stable => write!(f, "is stable, but still unconscious"),
            Self::Dead => write!(f, "is dead"),
            Self::Destroyed => write!(f, "has been destroyed"),
            Self::HealedToFull => write!(f, "is fully healed"),
            Self::HealedToLight => write!(f, "is only lightly wounded now"),
            Self::HealedToModerate => write!(f, "is no longer badly wounded"),
            Self::RegainsConsciousness => write!(f, "regains consciousness"),
            Self::StopsBleeding => write!(f, "stops bleeding"),
            Self::BleedsMore => write!(f, "bleeds a bit more"),
            Self::NotDying => write!(f, "is not dying, and has no need to stabilise"),
            Self::AlreadyStable => write!(f, "is already stable"),
            Self::AlreadyDead => write!(f, "is dead; it is far too late to stabilise"),
        }
    }
}

/// An ordered, bounded list of narrative fragments.
///
/// Empty when a transition crosses no notable threshold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Narration {
    lines: ArrayVec<Narrative, { EngineConfig::MAX_NARRATIVE_LINES }>,
}

impl Narration {
    /// An empty narration.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A narration with a single fragment.
    pub fn line(narrative: Narrative) -> Self {
        let mut narration = Self::default();
        narration.push(narrative);
        narration
    }

    /// Appends a fragment, keeping the earliest lines if the bound is hit.
    pub fn push(&mut self, narrative: Narrative) {
        if !self.lines.is_full() {
            self.lines.push(narrative);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Narrative> {
        self.lines.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl<'a> IntoIterator for &'a Narration {
    type Item = &'a Narrative;
    type IntoIter = core::slice::Iter<'a, Narrative>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
