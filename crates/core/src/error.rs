//! Common error infrastructure for deathwatch-core.
//!
//! Domain-specific errors (e.g. [`SkipReason`](crate::health::SkipReason),
//! [`EffectLookupError`](crate::effects::EffectLookupError)) are defined in
//! their own modules alongside the operations they guard; this module holds
//! the shared classification they all implement.
//!
//! Expected bad input never panics and never crosses the engine boundary as
//! an exception: evaluation returns a no-op result carrying a reason code,
//! and the caller decides whether to warn the table or stay silent.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can retry once its own state is fixed.
    ///
    /// Examples: a token with no linked character sheet
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unparsable hit points, an unknown effect name
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all deathwatch-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
