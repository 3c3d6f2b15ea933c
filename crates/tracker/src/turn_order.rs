//! The initiative order as an explicit value.
//!
//! The order is passed into and returned from the platform layer on every
//! command rather than living in a global. Two kinds of entry share the
//! sequence: creatures sorted by initiative, and custom countdown entries
//! (ongoing spells, hazards) whose priority is the rounds remaining.

use serde::{Deserialize, Serialize};

/// One row of the initiative list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEntry {
    /// Platform identifier of the token or custom entry.
    pub id: String,
    /// Initiative count, or rounds remaining for countdown entries.
    pub priority: i32,
    /// Display label for custom entries.
    pub label: Option<String>,
    /// True for countdown entries that tick down each round.
    pub countdown: bool,
}

impl TurnEntry {
    /// A creature entry at the given initiative count.
    pub fn creature(id: impl Into<String>, priority: i32) -> Self {
        Self {
            id: id.into(),
            priority,
            label: None,
            countdown: false,
        }
    }

    /// A countdown entry that expires after `rounds` rounds.
    pub fn custom(id: impl Into<String>, rounds: i32, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            priority: rounds,
            label: Some(description.into()),
            countdown: true,
        }
    }
}

/// Errors mutating the order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnOrderError {
    /// An entry with this id is already in the order.
    #[error("entry '{id}' is already in the turn order")]
    DuplicateEntry { id: String },
}

/// An ordered initiative sequence.
///
/// Insertion order is preserved for equal priorities ([`TurnOrder::sort`]
/// is stable), so ties stay in the order they were rolled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    entries: Vec<TurnEntry>,
}

impl TurnOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, rejecting duplicate ids.
    pub fn insert(&mut self, entry: TurnEntry) -> Result<(), TurnOrderError> {
        if self.entries.iter().any(|e| e.id == entry.id) {
            return Err(TurnOrderError::DuplicateEntry { id: entry.id });
        }
        tracing::trace!(id = %entry.id, priority = entry.priority, "turn order insert");
        self.entries.push(entry);
        Ok(())
    }

    /// Adds a countdown entry (ongoing effect, hazard) lasting `rounds`.
    pub fn add_countdown(
        &mut self,
        id: impl Into<String>,
        rounds: i32,
        description: impl Into<String>,
    ) -> Result<(), TurnOrderError> {
        self.insert(TurnEntry::custom(id, rounds, description))
    }

    /// Removes an entry by id; returns it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<TurnEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Re-sorts by descending priority; stable, so ties keep their
    /// insertion order.
    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Ticks countdown entries down one round and removes the expired
    /// ones, returning them so the caller can announce what ended.
    pub fn advance_round(&mut self) -> Vec<TurnEntry> {
        for entry in self.entries.iter_mut().filter(|e| e.countdown) {
            entry.priority -= 1;
        }
        let mut expired = Vec::new();
        self.entries.retain(|e| {
            if e.countdown && e.priority <= 0 {
                expired.push(e.clone());
                false
            } else {
                true
            }
        });
        for entry in &expired {
            tracing::debug!(id = %entry.id, label = ?entry.label, "countdown expired");
        }
        expired
    }

    pub fn entries(&self) -> &[TurnEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
