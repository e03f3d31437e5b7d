//! Integration tests for the PostgreSQL repositories
//!
//! These tests verify that repository implementations correctly interact
//! with the database, including upserts, ordering and the unique
//! constraints the draft relies on. They are skipped when `DATABASE_URL`
//! is not set.

use splatdraft_api::domain::draft::{Draft, DraftStatus};
use splatdraft_api::domain::participant::Participant;
use splatdraft_api::domain::repositories::{
    ConflictKind, DraftRepository, DraftUnitOfWork, ParticipantRepository, RepositoryError,
    TournamentParticipantRepository, TournamentRepository,
};
use splatdraft_api::domain::shared::TeamId;
use splatdraft_api::domain::tournament::{Tournament, TournamentParticipant};
use splatdraft_api::infrastructure::repositories::{
    PostgresDraftRepository, PostgresDraftUnitOfWork, PostgresParticipantRepository,
    PostgresTournamentParticipantRepository, PostgresTournamentRepository,
};
use sqlx::PgPool;

/// Set up test database connection pool, or `None` to skip
async fn setup_test_db() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping repository tests");
        return None;
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

/// Clean up test data; deleting the tournament cascades to rosters and drafts
async fn cleanup(pool: &PgPool, tournament: &Tournament, participants: &[&Participant]) {
    sqlx::query("DELETE FROM tournaments WHERE id = $1")
        .bind(tournament.id().value())
        .execute(pool)
        .await
        .expect("Failed to cleanup tournament");

    let ids: Vec<String> = participants.iter().map(|p| p.id().to_string()).collect();
    sqlx::query("DELETE FROM participants WHERE id = ANY($1)")
        .bind(&ids)
        .execute(pool)
        .await
        .expect("Failed to cleanup participants");
}

#[tokio::test]
async fn test_tournament_save_and_update() {
    let Some(pool) = setup_test_db().await else { return };
    let repo = PostgresTournamentRepository::new(pool.clone());

    let tournament = Tournament::create("Repository Cup").expect("valid name");
    let saved = repo.save(&tournament).await.expect("Failed to save tournament");
    assert_eq!(saved.id(), tournament.id());
    assert_eq!(saved.name().as_str(), "Repository Cup");
    assert_eq!(saved.draft_status(), DraftStatus::Pending);

    let started = repo
        .save(&saved.start_draft().expect("pending draft starts"))
        .await
        .expect("Failed to update tournament");
    assert_eq!(started.draft_status(), DraftStatus::Active);

    let found = repo
        .find_by_id(tournament.id())
        .await
        .expect("Failed to find tournament")
        .expect("Tournament should exist");
    assert_eq!(found.draft_status(), DraftStatus::Active);

    let all = repo.find_all().await.expect("Failed to list tournaments");
    assert!(all.iter().any(|t| t.id() == tournament.id()));

    cleanup(&pool, &tournament, &[]).await;
}

#[tokio::test]
async fn test_membership_and_team_assignment() {
    let Some(pool) = setup_test_db().await else { return };
    let tournaments = PostgresTournamentRepository::new(pool.clone());
    let participants = PostgresParticipantRepository::new(pool.clone());
    let members = PostgresTournamentParticipantRepository::new(pool.clone());

    let tournament = tournaments
        .save(&Tournament::create("Roster Cup").unwrap())
        .await
        .expect("Failed to save tournament");
    let captain = participants
        .save(&Participant::create("Marina", "Dualie Squelchers", 1200).unwrap())
        .await
        .expect("Failed to save captain");
    let player = participants
        .save(&Participant::create("Pearl", "Splat Brella", 800).unwrap())
        .await
        .expect("Failed to save player");

    let membership = members
        .save(&TournamentParticipant::create(
            tournament.id().clone(),
            captain.id().clone(),
            true,
        ))
        .await
        .expect("Failed to save membership");

    // same pair under a new id violates (tournament_id, participant_id)
    let duplicate = members
        .save(&TournamentParticipant::create(
            tournament.id().clone(),
            captain.id().clone(),
            false,
        ))
        .await;
    assert!(matches!(
        duplicate,
        Err(RepositoryError::Conflict {
            kind: ConflictKind::Duplicate,
            ..
        })
    ));

    let team_id = membership.team_id().expect("captains lead a team");
    participants
        .save(&player.clone().assign_team(team_id.clone()))
        .await
        .expect("Failed to assign team");

    let found = participants
        .find_by_ids(&[player.id().clone(), captain.id().clone()])
        .await
        .expect("Failed to find participants");
    assert_eq!(found.len(), 2);
    let drafted = found.iter().find(|p| p.id() == player.id()).unwrap();
    assert_eq!(drafted.team_id(), Some(&team_id));

    let roster = members
        .find_by_tournament(tournament.id())
        .await
        .expect("Failed to list members");
    assert_eq!(roster.len(), 1);
    assert!(roster[0].is_captain());

    let demoted = members
        .save(&membership.with_captain(false))
        .await
        .expect("Failed to update membership");
    assert!(!demoted.is_captain());

    cleanup(&pool, &tournament, &[&captain, &player]).await;
}

#[tokio::test]
async fn test_draft_turn_is_unique() {
    let Some(pool) = setup_test_db().await else { return };
    let tournaments = PostgresTournamentRepository::new(pool.clone());
    let participants = PostgresParticipantRepository::new(pool.clone());
    let drafts = PostgresDraftRepository::new(pool.clone());

    let tournament = tournaments
        .save(&Tournament::create("Draft Cup").unwrap())
        .await
        .unwrap();
    let captain = participants
        .save(&Participant::create("Callie", "Hero Shot", 10).unwrap())
        .await
        .unwrap();
    let first = participants
        .save(&Participant::create("Marie", "Hero Charger", 10).unwrap())
        .await
        .unwrap();
    let second = participants
        .save(&Participant::create("Agent 3", "Hero Roller", 10).unwrap())
        .await
        .unwrap();

    let pick = |participant: &Participant, turn: i32| {
        Draft::create(
            tournament.id().clone(),
            captain.id().clone(),
            participant.id().clone(),
            1,
            turn,
            DraftStatus::Active,
        )
        .unwrap()
    };

    drafts.insert(&pick(&first, 2)).await.expect("Failed to insert draft");
    drafts.insert(&pick(&second, 1)).await.expect("Failed to insert draft");

    let redrafted = drafts.insert(&pick(&first, 3)).await;
    assert!(matches!(
        redrafted,
        Err(RepositoryError::Conflict {
            kind: ConflictKind::DraftedParticipant,
            ..
        })
    ));
    let taken_slot = drafts
        .insert(&Draft::create(
            tournament.id().clone(),
            captain.id().clone(),
            captain.id().clone(),
            1,
            1,
            DraftStatus::Active,
        )
        .unwrap())
        .await;
    assert!(matches!(
        taken_slot,
        Err(RepositoryError::Conflict {
            kind: ConflictKind::DraftTurn,
            ..
        })
    ));

    let listed = drafts.find_by_tournament(tournament.id()).await.unwrap();
    let turns: Vec<i32> = listed.iter().map(|d| d.turn()).collect();
    assert_eq!(turns, vec![1, 2]);

    assert!(drafts.delete(listed[0].id()).await.unwrap());
    let removed = drafts.delete_by_tournament(tournament.id()).await.unwrap();
    assert_eq!(removed, 1);
    assert!(drafts.find_by_tournament(tournament.id()).await.unwrap().is_empty());

    cleanup(&pool, &tournament, &[&captain, &first, &second]).await;
}

#[tokio::test]
async fn test_unit_of_work_rolls_back_failed_nomination() {
    let Some(pool) = setup_test_db().await else { return };
    let tournaments = PostgresTournamentRepository::new(pool.clone());
    let participants = PostgresParticipantRepository::new(pool.clone());
    let drafts = PostgresDraftRepository::new(pool.clone());
    let uow = PostgresDraftUnitOfWork::new(pool.clone());

    let tournament = tournaments
        .save(&Tournament::create("Rollback Cup").unwrap().start_draft().unwrap())
        .await
        .unwrap();
    let captain = participants
        .save(&Participant::create("Frye", "Octobrush", 10).unwrap())
        .await
        .unwrap();
    let nominee = participants
        .save(&Participant::create("Shiver", "Tri-Stringer", 10).unwrap())
        .await
        .unwrap();
    let pick = Draft::create(
        tournament.id().clone(),
        captain.id().clone(),
        nominee.id().clone(),
        1,
        1,
        DraftStatus::Active,
    )
    .unwrap();
    let finished = tournament.clone().finish_draft().unwrap();

    // the team does not exist, so the participant write fails its foreign key
    let orphan = nominee
        .clone()
        .assign_team(TeamId::reconstruct("no-such-team").unwrap());
    let failed = uow.nominate(&pick, &orphan, Some(&finished)).await;
    assert!(matches!(failed, Err(RepositoryError::Storage(_))));

    assert!(drafts.find_by_tournament(tournament.id()).await.unwrap().is_empty());
    let stored = tournaments.find_by_id(tournament.id()).await.unwrap().unwrap();
    assert_eq!(stored.draft_status(), DraftStatus::Active);

    // a valid nomination commits all of its writes
    uow.nominate(&pick, &nominee, Some(&finished)).await.unwrap();
    assert_eq!(drafts.find_by_tournament(tournament.id()).await.unwrap().len(), 1);
    let stored = tournaments.find_by_id(tournament.id()).await.unwrap().unwrap();
    assert_eq!(stored.draft_status(), DraftStatus::Done);

    let removed = uow.reset(&stored.reset_draft(), &[]).await.unwrap();
    assert_eq!(removed, 1);
    let stored = tournaments.find_by_id(tournament.id()).await.unwrap().unwrap();
    assert_eq!(stored.draft_status(), DraftStatus::Pending);

    cleanup(&pool, &tournament, &[&captain, &nominee]).await;
}
