//! In-memory repository implementations
//!
//! Same semantics as the PostgreSQL adapters, including the uniqueness
//! rules, backed by shared maps. Used by the `memory` storage backend and
//! by the test suites.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::draft::Draft;
use crate::domain::participant::Participant;
use crate::domain::repositories::{
    ConflictKind, DraftRepository, ParticipantRepository, RepositoryError,
    TournamentParticipantRepository, TournamentRepository,
};
use crate::domain::shared::{DraftId, ParticipantId, TournamentId, TournamentParticipantId};
use crate::domain::tournament::{Tournament, TournamentParticipant};

// ============================================================================
// Tournaments
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryTournamentRepository {
    tournaments: Arc<RwLock<HashMap<TournamentId, Tournament>>>,
}

impl InMemoryTournamentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn save(&self, tournament: &Tournament) -> Result<Tournament, RepositoryError> {
        let mut tournaments = self.tournaments.write();
        // created_at is immutable once stored
        let stored = match tournaments.get(tournament.id()) {
            Some(existing) => Tournament::reconstruct(
                existing.id().clone(),
                tournament.name().clone(),
                tournament.draft_status(),
                existing.created_at(),
            ),
            None => tournament.clone(),
        };
        tournaments.insert(stored.id().clone(), stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Tournament>, RepositoryError> {
        let mut all: Vec<Tournament> = self.tournaments.read().values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(all)
    }

    async fn find_by_id(&self, id: &TournamentId) -> Result<Option<Tournament>, RepositoryError> {
        Ok(self.tournaments.read().get(id).cloned())
    }
}

// ============================================================================
// Participants
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryParticipantRepository {
    participants: Arc<RwLock<HashMap<ParticipantId, Participant>>>,
}

impl InMemoryParticipantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sort_participants(participants: &mut [Participant]) {
    participants.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn save(&self, participant: &Participant) -> Result<Participant, RepositoryError> {
        self.participants
            .write()
            .insert(participant.id().clone(), participant.clone());
        Ok(participant.clone())
    }

    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError> {
        let mut all: Vec<Participant> = self.participants.read().values().cloned().collect();
        sort_participants(&mut all);
        Ok(all)
    }

    async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<Participant>, RepositoryError> {
        Ok(self.participants.read().get(id).cloned())
    }

    async fn find_by_ids(
        &self,
        ids: &[ParticipantId],
    ) -> Result<Vec<Participant>, RepositoryError> {
        let participants = self.participants.read();
        let mut found: Vec<Participant> = ids
            .iter()
            .filter_map(|id| participants.get(id).cloned())
            .collect();
        found.sort_by(|a, b| a.id().cmp(b.id()));
        found.dedup_by(|a, b| a.id() == b.id());
        sort_participants(&mut found);
        Ok(found)
    }
}

// ============================================================================
// Tournament membership
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryTournamentParticipantRepository {
    members: Arc<RwLock<HashMap<TournamentParticipantId, TournamentParticipant>>>,
}

impl InMemoryTournamentParticipantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TournamentParticipantRepository for InMemoryTournamentParticipantRepository {
    async fn save(
        &self,
        member: &TournamentParticipant,
    ) -> Result<TournamentParticipant, RepositoryError> {
        let mut members = self.members.write();

        let duplicate = members.values().any(|m| {
            m.id() != member.id()
                && m.tournament_id() == member.tournament_id()
                && m.participant_id() == member.participant_id()
        });
        if duplicate {
            return Err(RepositoryError::conflict(
                ConflictKind::Duplicate,
                format!(
                    "participant {} is already in tournament {}",
                    member.participant_id(),
                    member.tournament_id()
                ),
            ));
        }

        members.insert(member.id().clone(), member.clone());
        Ok(member.clone())
    }

    async fn find_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<TournamentParticipant>, RepositoryError> {
        let mut found: Vec<TournamentParticipant> = self
            .members
            .read()
            .values()
            .filter(|m| m.tournament_id() == tournament_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(found)
    }

    async fn find_by_tournament_and_participant(
        &self,
        tournament_id: &TournamentId,
        participant_id: &ParticipantId,
    ) -> Result<Option<TournamentParticipant>, RepositoryError> {
        Ok(self
            .members
            .read()
            .values()
            .find(|m| m.tournament_id() == tournament_id && m.participant_id() == participant_id)
            .cloned())
    }
}

// ============================================================================
// Drafts
// ============================================================================

#[derive(Default, Clone)]
pub struct InMemoryDraftRepository {
    drafts: Arc<RwLock<HashMap<DraftId, Draft>>>,
}

impl InMemoryDraftRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
    async fn insert(&self, draft: &Draft) -> Result<Draft, RepositoryError> {
        let mut drafts = self.drafts.write();

        if drafts.contains_key(draft.id()) {
            return Err(RepositoryError::conflict(
                ConflictKind::Duplicate,
                format!("draft {} already exists", draft.id()),
            ));
        }

        let same_tournament = drafts
            .values()
            .filter(|d| d.tournament_id() == draft.tournament_id());
        for existing in same_tournament {
            if existing.round() == draft.round() && existing.turn() == draft.turn() {
                return Err(RepositoryError::conflict(
                    ConflictKind::DraftTurn,
                    format!("round {} turn {} is already taken", draft.round(), draft.turn()),
                ));
            }
            if existing.participant_id() == draft.participant_id() {
                return Err(RepositoryError::conflict(
                    ConflictKind::DraftedParticipant,
                    format!("participant {} is already drafted", draft.participant_id()),
                ));
            }
        }

        drafts.insert(draft.id().clone(), draft.clone());
        Ok(draft.clone())
    }

    async fn find_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<Vec<Draft>, RepositoryError> {
        let mut found: Vec<Draft> = self
            .drafts
            .read()
            .values()
            .filter(|d| d.tournament_id() == tournament_id)
            .cloned()
            .collect();
        found.sort_by_key(|d| (d.round(), d.turn()));
        Ok(found)
    }

    async fn delete(&self, id: &DraftId) -> Result<bool, RepositoryError> {
        Ok(self.drafts.write().remove(id).is_some())
    }

    async fn delete_by_tournament(
        &self,
        tournament_id: &TournamentId,
    ) -> Result<u64, RepositoryError> {
        let mut drafts = self.drafts.write();
        let before = drafts.len();
        drafts.retain(|_, d| d.tournament_id() != tournament_id);
        Ok((before - drafts.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::DraftStatus;

    fn draft(tournament_id: &TournamentId, participant: &str, round: i32, turn: i32) -> Draft {
        Draft::create(
            tournament_id.clone(),
            ParticipantId::create(),
            ParticipantId::reconstruct(participant).unwrap(),
            round,
            turn,
            DraftStatus::Active,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn tournament_save_and_find() {
        let repo = InMemoryTournamentRepository::new();
        let tournament = Tournament::create("Splat Cup").unwrap();

        let saved = repo.save(&tournament).await.unwrap();
        assert_eq!(saved, tournament);

        let found = repo.find_by_id(tournament.id()).await.unwrap();
        assert_eq!(found, Some(tournament.clone()));
        assert_eq!(repo.find_all().await.unwrap(), vec![tournament]);
    }

    #[tokio::test]
    async fn tournament_save_updates_in_place() {
        let repo = InMemoryTournamentRepository::new();
        let tournament = Tournament::create("Splat Cup").unwrap();
        repo.save(&tournament).await.unwrap();

        let started = tournament.clone().start_draft().unwrap();
        repo.save(&started).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].draft_status(), DraftStatus::Active);
    }

    #[tokio::test]
    async fn membership_is_unique_per_tournament() {
        let repo = InMemoryTournamentParticipantRepository::new();
        let tournament_id = TournamentId::create();
        let participant_id = ParticipantId::create();

        let first =
            TournamentParticipant::create(tournament_id.clone(), participant_id.clone(), false);
        repo.save(&first).await.unwrap();

        // updating the same membership is fine
        repo.save(&first.clone().with_captain(true)).await.unwrap();

        let second = TournamentParticipant::create(tournament_id.clone(), participant_id, false);
        assert!(matches!(
            repo.save(&second).await,
            Err(RepositoryError::Conflict {
                kind: ConflictKind::Duplicate,
                ..
            })
        ));

        let members = repo.find_by_tournament(&tournament_id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert!(members[0].is_captain());
    }

    #[tokio::test]
    async fn draft_turn_is_unique() {
        let repo = InMemoryDraftRepository::new();
        let tournament_id = TournamentId::create();

        repo.insert(&draft(&tournament_id, "p1", 1, 1)).await.unwrap();
        let clash = repo.insert(&draft(&tournament_id, "p2", 1, 1)).await;
        assert!(matches!(
            clash,
            Err(RepositoryError::Conflict {
                kind: ConflictKind::DraftTurn,
                ..
            })
        ));

        let repeat = repo.insert(&draft(&tournament_id, "p1", 1, 2)).await;
        assert!(matches!(
            repeat,
            Err(RepositoryError::Conflict {
                kind: ConflictKind::DraftedParticipant,
                ..
            })
        ));

        // other tournaments are independent
        let other = TournamentId::create();
        repo.insert(&draft(&other, "p1", 1, 1)).await.unwrap();
    }

    #[tokio::test]
    async fn drafts_ordered_and_deleted_per_tournament() {
        let repo = InMemoryDraftRepository::new();
        let tournament_id = TournamentId::create();
        let other = TournamentId::create();

        repo.insert(&draft(&tournament_id, "p3", 2, 1)).await.unwrap();
        repo.insert(&draft(&tournament_id, "p2", 1, 2)).await.unwrap();
        repo.insert(&draft(&tournament_id, "p1", 1, 1)).await.unwrap();
        repo.insert(&draft(&other, "p1", 1, 1)).await.unwrap();

        let positions: Vec<(i32, i32)> = repo
            .find_by_tournament(&tournament_id)
            .await
            .unwrap()
            .iter()
            .map(|d| (d.round(), d.turn()))
            .collect();
        assert_eq!(positions, vec![(1, 1), (1, 2), (2, 1)]);

        let first = repo.find_by_tournament(&tournament_id).await.unwrap()[0].clone();
        assert!(repo.delete(first.id()).await.unwrap());
        assert!(!repo.delete(first.id()).await.unwrap());

        assert_eq!(repo.delete_by_tournament(&tournament_id).await.unwrap(), 2);
        assert!(repo.find_by_tournament(&tournament_id).await.unwrap().is_empty());
        assert_eq!(repo.find_by_tournament(&other).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn participants_found_by_ids() {
        let repo = InMemoryParticipantRepository::new();
        let a = Participant::create("Callie", "Roller", 1).unwrap();
        let b = Participant::create("Marie", "Charger", 2).unwrap();
        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();

        let found = repo
            .find_by_ids(&[b.id().clone(), ParticipantId::create(), b.id().clone()])
            .await
            .unwrap();
        assert_eq!(found, vec![b]);
        assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
    }
}
