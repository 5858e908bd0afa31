//! Status derivation from duration strings.
//!
//! A duration containing the substring "present" (any case) classifies as
//! current/active; everything else as completed. This is a brittle,
//! exact-substring contract inherited from the content shape - it is NOT
//! date parsing, and a duration like "2019 - 2021" that has in fact ended
//! recently still reads as completed.

use crate::derive::AccentToken;

// =============================================================================
// Status
// =============================================================================

/// Engagement status derived from a duration string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Open-ended engagement ("... - Present").
    Current,
    /// Closed date range, or anything unrecognizable.
    Completed,
}

impl Status {
    /// Badge label for experience cards.
    pub const fn badge(&self) -> &'static str {
        match self {
            Self::Current => "🟢 Current",
            Self::Completed => "✅ Completed",
        }
    }

    /// Short label for project status pills.
    pub const fn pill(&self) -> &'static str {
        match self {
            Self::Current => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Accent token for the project status pill background.
    pub const fn pill_accent(&self) -> AccentToken {
        match self {
            Self::Current => AccentToken::Green,
            Self::Completed => AccentToken::Blue,
        }
    }
}

/// Classify a duration string. Total over arbitrary input.
pub fn status_of(duration: &str) -> Status {
    if duration.to_lowercase().contains("present") {
        Status::Current
    } else {
        Status::Completed
    }
}

// =============================================================================
// Tests
// =============================================================================
