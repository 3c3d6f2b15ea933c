//! The health state machine.
//!
//! This is the dense core of the crate: a pure transform from a pair of
//! vitals snapshots and creature metadata to a canonical health state,
//! the markers to display, and the narration to speak.
//!
//! # Architecture
//!
//! - **Pure functions**: no internal state, no side effects; re-entrant
//! - **One canonical state**: [`HealthState`] replaces any notion of
//!   independently-settable wound flags, and [`HealthState::markers`]
//!   derives the display set from it
//! - **Structured narration**: [`Narrative`] fragments render through
//!   `Display`; the platform layer owns formatting and delivery

pub mod evaluate;
pub mod narrate;
pub mod state;

pub use evaluate::{Evaluation, SkipReason, StatusResult, evaluate};
pub use narrate::{Narration, Narrative};
pub use state::HealthState;
