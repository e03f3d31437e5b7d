use chrono::{DateTime, Utc};

use super::value_objects::TournamentName;
use crate::domain::draft::{DraftError, DraftStatus};
use crate::domain::errors::ValidationError;
use crate::domain::shared::TournamentId;

/// Tournament aggregate root
///
/// Owns no child entities in memory. Participants and nominations are
/// associated by id and loaded through their repositories.
///
/// # Invariants
/// - Name is a valid [`TournamentName`]
/// - Draft status only changes along [`DraftStatus::can_transition_to`]
///
/// # Example
/// ```
/// use splatdraft_api::domain::tournament::Tournament;
/// use splatdraft_api::domain::draft::DraftStatus;
///
/// let tournament = Tournament::create("Splat Cup").expect("valid tournament");
///
/// assert_eq!(tournament.name().as_str(), "Splat Cup");
/// assert_eq!(tournament.draft_status(), DraftStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    id: TournamentId,
    name: TournamentName,
    draft_status: DraftStatus,
    created_at: DateTime<Utc>,
}

impl Tournament {
    /// Creates a new Tournament
    ///
    /// # Business Rules Enforced
    /// - Name must pass [`TournamentName`] validation
    /// - A fresh id is generated
    /// - Draft starts in Pending status
    pub fn create(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: TournamentId::create(),
            name: TournamentName::create(name)?,
            draft_status: DraftStatus::Pending,
            created_at: Utc::now(),
        })
    }

    /// Reconstructs a Tournament from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn reconstruct(
        id: TournamentId,
        name: TournamentName,
        draft_status: DraftStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            draft_status,
            created_at,
        }
    }

    /// Opens the draft (Pending -> Active)
    pub fn start_draft(self) -> Result<Self, DraftError> {
        match self.draft_status {
            DraftStatus::Pending => Ok(self.with_status(DraftStatus::Active)),
            DraftStatus::Active => Err(DraftError::AlreadyStarted),
            DraftStatus::Done => Err(DraftError::Finished),
        }
    }

    /// Closes the draft once the last participant is claimed (Active -> Done)
    pub fn finish_draft(self) -> Result<Self, DraftError> {
        match self.draft_status {
            DraftStatus::Active => Ok(self.with_status(DraftStatus::Done)),
            DraftStatus::Pending => Err(DraftError::NotStarted),
            DraftStatus::Done => Err(DraftError::Finished),
        }
    }

    /// Returns the draft to Pending; a pending draft is left as is
    pub fn reset_draft(self) -> Self {
        if self.draft_status == DraftStatus::Pending {
            return self;
        }
        self.with_status(DraftStatus::Pending)
    }

    fn with_status(self, next: DraftStatus) -> Self {
        debug_assert!(self.draft_status.can_transition_to(next));
        Self {
            draft_status: next,
            ..self
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> &TournamentId {
        &self.id
    }

    pub fn name(&self) -> &TournamentName {
        &self.name
    }

    pub fn draft_status(&self) -> DraftStatus {
        self.draft_status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_tournament_with_valid_name() {
        let before = Utc::now();
        let tournament = Tournament::create(" Splat Cup ").unwrap();

        assert_eq!(tournament.name().as_str(), "Splat Cup");
        assert!(!tournament.id().value().is_empty());
        assert_eq!(tournament.draft_status(), DraftStatus::Pending);
        assert!(tournament.created_at() >= before);
    }

    #[test]
    fn create_tournament_with_invalid_name_fails() {
        assert!(Tournament::create("ab").is_err());
        assert!(Tournament::create("Splat {Cup}").is_err());
    }

    #[test]
    fn create_generates_distinct_ids() {
        let a = Tournament::create("Splat Cup").unwrap();
        let b = Tournament::create("Splat Cup").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn reconstruct_preserves_fields() {
        let id = TournamentId::reconstruct("t-1").unwrap();
        let name = TournamentName::reconstruct("Ink Open").unwrap();
        let created_at = Utc::now() - chrono::Duration::days(3);

        let tournament =
            Tournament::reconstruct(id.clone(), name.clone(), DraftStatus::Active, created_at);

        assert_eq!(tournament.id(), &id);
        assert_eq!(tournament.name(), &name);
        assert_eq!(tournament.draft_status(), DraftStatus::Active);
        assert_eq!(tournament.created_at(), created_at);
    }

    #[test]
    fn draft_lifecycle() {
        let tournament = Tournament::create("Splat Cup").unwrap();
        let id = tournament.id().clone();

        let active = tournament.start_draft().unwrap();
        assert_eq!(active.draft_status(), DraftStatus::Active);
        assert_eq!(active.id(), &id);

        let done = active.finish_draft().unwrap();
        assert_eq!(done.draft_status(), DraftStatus::Done);

        let reset = done.reset_draft();
        assert_eq!(reset.draft_status(), DraftStatus::Pending);
    }

    #[test]
    fn start_twice_fails() {
        let active = Tournament::create("Splat Cup")
            .unwrap()
            .start_draft()
            .unwrap();
        assert_eq!(active.start_draft().unwrap_err(), DraftError::AlreadyStarted);
    }

    #[test]
    fn finish_before_start_fails() {
        let tournament = Tournament::create("Splat Cup").unwrap();
        assert_eq!(tournament.finish_draft().unwrap_err(), DraftError::NotStarted);
    }

    #[test]
    fn reset_pending_is_noop() {
        let tournament = Tournament::create("Splat Cup").unwrap();
        let reset = tournament.clone().reset_draft();
        assert_eq!(reset, tournament);
    }
}
