use std::sync::Arc;

use crate::application::errors::AppError;
use crate::domain::participant::Participant;
use crate::domain::repositories::ParticipantRepository;
use crate::domain::shared::ParticipantId;

#[derive(Debug, Clone)]
pub struct CreateParticipantCommand {
    pub name: String,
    pub weapon: String,
    pub xp: i32,
}

/// Registers a new participant, not yet on any team
pub struct CreateParticipantUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl CreateParticipantUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    pub async fn execute(
        &self,
        command: CreateParticipantCommand,
    ) -> Result<Participant, AppError> {
        let participant = Participant::create(&command.name, &command.weapon, command.xp)?;
        let saved = self.participants.save(&participant).await?;

        tracing::info!(participant_id = %saved.id(), "participant created");
        Ok(saved)
    }
}

pub struct GetParticipantsUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl GetParticipantsUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    pub async fn execute(&self) -> Result<Vec<Participant>, AppError> {
        Ok(self.participants.find_all().await?)
    }
}

pub struct GetParticipantUseCase {
    participants: Arc<dyn ParticipantRepository>,
}

impl GetParticipantUseCase {
    pub fn new(participants: Arc<dyn ParticipantRepository>) -> Self {
        Self { participants }
    }

    pub async fn execute(&self, id: &ParticipantId) -> Result<Option<Participant>, AppError> {
        Ok(self.participants.find_by_id(id).await?)
    }
}
