use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::errors::ValidationError;

/// Lifecycle status of a tournament's draft
///
/// The same status is stamped on every nomination record, capturing the phase
/// the draft was in once that pick was made.
///
/// # Status Transitions
/// ```text
/// Pending -> Active -> Done
///    ^---------'--------'   (reset)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "draft_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    /// Draft has not started, captains and participants can still change
    Pending,
    /// Captains are nominating participants
    Active,
    /// Every draftable participant has been claimed
    Done,
}

impl DraftStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Valid Transitions
    /// - Pending -> Active
    /// - Active -> Done
    /// - Active -> Pending (reset)
    /// - Done -> Pending (reset)
    ///
    /// # Example
    /// ```
    /// use splatdraft_api::domain::draft::DraftStatus;
    ///
    /// assert!(DraftStatus::Pending.can_transition_to(DraftStatus::Active));
    /// assert!(!DraftStatus::Pending.can_transition_to(DraftStatus::Done));
    /// ```
    pub fn can_transition_to(&self, next: DraftStatus) -> bool {
        use DraftStatus::*;
        matches!(
            (self, next),
            (Pending, Active) | (Active, Done) | (Active, Pending) | (Done, Pending)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Pending => "pending",
            DraftStatus::Active => "active",
            DraftStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DraftStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DraftStatus::Pending),
            "active" => Ok(DraftStatus::Active),
            "done" => Ok(DraftStatus::Done),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}
