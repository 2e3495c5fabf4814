//! Common error infrastructure for ghost-core.
//!
//! Domain-specific errors live next to the code that raises them
//! ([`GhostError`](crate::GhostError) for agent updates, [`GridError`](crate::GridError)
//! for maze construction, [`ConfigError`](crate::ConfigError) for tunables). This
//! module only provides the shared classification used by drivers to decide
//! whether a failure can be reported and skipped or must stop the session.
//!
//! Most "failures" of the behavior engine are not errors at all: an agent with
//! no legal heading simply holds its tile for that tick. Only corrupted agent
//! state surfaces as a [`ErrorSeverity::Fatal`] error.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input (malformed maze rows, out-of-range tunables).
    ///
    /// The offending data should be fixed; retrying with the same input fails again.
    Validation,

    /// Agent state is corrupted and the session cannot continue.
    ///
    /// Examples: an agent tile outside the playable board.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the session must stop.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all ghost-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on whether the session can continue
/// - Return a stable, upper-case error code per variant
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fatal_severity_stops_the_session() {
        assert!(ErrorSeverity::Fatal.is_fatal());
        assert!(!ErrorSeverity::Validation.is_fatal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
