//! Common error infrastructure for monopoly-core.
//!
//! Domain errors ([`crate::BankError`], [`crate::BoardError`],
//! [`crate::Bankruptcy`]) live beside the operations that raise them. This
//! module holds the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Distinct kinds**: every precondition failure maps to its own variant
//! - **No partial application**: an operation that fails leaves state untouched
//! - **Severity Classification**: callers decide between retrying and aborting

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the game can continue once the caller picks another move
/// - **Validation**: the request broke a rule and must not be retried as-is
/// - **Internal**: a caller bug, such as a negative payment amount
/// - **Fatal**: the static game data is inconsistent and play cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: not enough cash for a house, bank out of hotels.
    Recoverable,

    /// Examples: building without a monopoly, uneven building.
    Validation,

    /// Examples: negative amounts.
    Internal,

    /// Examples: a track with no Jail, a missing deck.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken content.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all monopoly-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable snake_case code per variant from `error_code`
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
