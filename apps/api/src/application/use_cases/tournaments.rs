use std::sync::Arc;

use crate::application::errors::AppError;
use crate::domain::repositories::TournamentRepository;
use crate::domain::shared::TournamentId;
use crate::domain::tournament::Tournament;

/// Creates and persists a tournament
pub struct CreateTournamentUseCase {
    tournaments: Arc<dyn TournamentRepository>,
}

impl CreateTournamentUseCase {
    pub fn new(tournaments: Arc<dyn TournamentRepository>) -> Self {
        Self { tournaments }
    }

    pub async fn execute(&self, name: &str) -> Result<Tournament, AppError> {
        let tournament = Tournament::create(name)?;
        let saved = self.tournaments.save(&tournament).await?;

        tracing::info!(tournament_id = %saved.id(), name = %saved.name(), "tournament created");
        Ok(saved)
    }
}

/// Lists every tournament
pub struct GetTournamentsUseCase {
    tournaments: Arc<dyn TournamentRepository>,
}

impl GetTournamentsUseCase {
    pub fn new(tournaments: Arc<dyn TournamentRepository>) -> Self {
        Self { tournaments }
    }

    pub async fn execute(&self) -> Result<Vec<Tournament>, AppError> {
        Ok(self.tournaments.find_all().await?)
    }
}

/// Looks up one tournament; `None` when it does not exist
pub struct GetTournamentUseCase {
    tournaments: Arc<dyn TournamentRepository>,
}

impl GetTournamentUseCase {
    pub fn new(tournaments: Arc<dyn TournamentRepository>) -> Self {
        Self { tournaments }
    }

    pub async fn execute(&self, id: &TournamentId) -> Result<Option<Tournament>, AppError> {
        Ok(self.tournaments.find_by_id(id).await?)
    }
}
