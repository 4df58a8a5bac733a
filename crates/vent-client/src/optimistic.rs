//! Optimistic stamp-toggle state machine
//!
//! A pending toggle moves Idle → OptimisticApplied when the cached stamp set
//! is flipped locally, then either Confirmed (server truth reconciled into
//! the cache) or RolledBack (pre-toggle snapshot restored).

use crate::error::ClientError;
use crate::models::Stamp;

/// State of one pending toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Idle,
    OptimisticApplied,
    Confirmed,
    RolledBack,
}

impl ToggleState {
    /// Idle → OptimisticApplied
    #[must_use]
    pub fn apply(self) -> Self {
        debug_assert_eq!(self, Self::Idle, "toggle applied twice");
        Self::OptimisticApplied
    }

    /// OptimisticApplied → Confirmed
    #[must_use]
    pub fn confirm(self) -> Self {
        debug_assert_eq!(self, Self::OptimisticApplied, "confirm without apply");
        Self::Confirmed
    }

    /// OptimisticApplied → RolledBack
    #[must_use]
    pub fn roll_back(self) -> Self {
        debug_assert_eq!(self, Self::OptimisticApplied, "rollback without apply");
        Self::RolledBack
    }

    /// Whether the toggle has reached a terminal state
    #[must_use]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Confirmed | Self::RolledBack)
    }
}

/// Result of a toggle attempt
#[derive(Debug)]
pub enum ToggleOutcome {
    /// Identity not resolved yet; nothing was sent or patched
    Skipped,
    /// Server confirmed; the cache holds the returned stamp list
    Confirmed(Vec<Stamp>),
    /// Server call failed; the cache was restored from the snapshot
    RolledBack(ClientError),
}

impl ToggleOutcome {
    /// Final machine state this outcome corresponds to
    #[must_use]
    pub fn state(&self) -> ToggleState {
        match self {
            Self::Skipped => ToggleState::Idle,
            Self::Confirmed(_) => ToggleState::Confirmed,
            Self::RolledBack(_) => ToggleState::RolledBack,
        }
    }
}
