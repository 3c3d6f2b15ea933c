//! Table bookkeeping that travels with the combat-status rules.
//!
//! `deathwatch-tracker` holds the value types the platform layer threads
//! through commands: the initiative order as an explicit sequence (no
//! process-wide current-campaign singleton) and the fantasy campaign
//! calendar. Nothing here touches the health rules; the crates meet only
//! in the caller.
pub mod calendar;
pub mod turn_order;

pub use calendar::{CalendarDate, CalendarError, MonthName, MoonPhase, Weekday};
pub use turn_order::{TurnEntry, TurnOrder, TurnOrderError};
