use chrono::{DateTime, Utc};

use crate::domain::errors::ValidationError;
use crate::domain::shared::{ParticipantId, TeamId};

/// A player who can join tournaments and be drafted onto a team
///
/// # Invariants
/// - Name and weapon are trimmed and non-empty
/// - XP is never negative
/// - `team_id` is a back-reference only; the team does not own the participant
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    weapon: String,
    xp: i32,
    team_id: Option<TeamId>,
    created_at: DateTime<Utc>,
}

impl Participant {
    /// Creates a new Participant with no team
    ///
    /// # Example
    /// ```
    /// use splatdraft_api::domain::participant::Participant;
    ///
    /// let p = Participant::create("Callie", "Splat Roller", 2100).expect("valid participant");
    /// assert!(p.team_id().is_none());
    /// ```
    pub fn create(name: &str, weapon: &str, xp: i32) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyValue {
                field: "participant name",
            });
        }

        let weapon = weapon.trim();
        if weapon.is_empty() {
            return Err(ValidationError::EmptyValue { field: "weapon" });
        }

        if xp < 0 {
            return Err(ValidationError::NegativeXp(xp));
        }

        Ok(Self {
            id: ParticipantId::create(),
            name: name.to_string(),
            weapon: weapon.to_string(),
            xp,
            team_id: None,
            created_at: Utc::now(),
        })
    }

    /// Reconstructs a Participant from persistence layer data
    pub fn reconstruct(
        id: ParticipantId,
        name: String,
        weapon: String,
        xp: i32,
        created_at: DateTime<Utc>,
        team_id: Option<TeamId>,
    ) -> Self {
        Self {
            id,
            name,
            weapon,
            xp,
            team_id,
            created_at,
        }
    }

    /// Returns a replacement placed on the given team
    pub fn assign_team(self, team_id: TeamId) -> Self {
        Self {
            team_id: Some(team_id),
            ..self
        }
    }

    /// Returns a replacement with no team
    pub fn leave_team(self) -> Self {
        Self {
            team_id: None,
            ..self
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weapon(&self) -> &str {
        &self.weapon
    }

    pub fn xp(&self) -> i32 {
        self.xp
    }

    pub fn team_id(&self) -> Option<&TeamId> {
        self.team_id.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
