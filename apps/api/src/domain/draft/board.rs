use std::collections::HashSet;

use super::draft::Draft;
use super::errors::DraftError;
use super::events::DraftEvent;
use super::turn_order::{PickSlot, TurnOrder};
use super::value_objects::DraftStatus;
use crate::domain::shared::ParticipantId;
use crate::domain::tournament::{Tournament, TournamentParticipant};

/// Outcome of a valid nomination, ready to persist
#[derive(Debug, Clone)]
pub struct Nomination {
    pub draft: Draft,
    /// True when this pick claims the last draftable participant
    pub completes_draft: bool,
    pub events: Vec<DraftEvent>,
}

/// Read model of one tournament's draft
///
/// Assembled from the tournament, its members and the nominations made so
/// far, and validates the next move against them. Holds no state of its own;
/// the caller persists whatever it returns.
#[derive(Debug)]
pub struct DraftBoard<'a> {
    tournament: &'a Tournament,
    members: &'a [TournamentParticipant],
    drafts: &'a [Draft],
    order: TurnOrder,
}

impl<'a> DraftBoard<'a> {
    pub fn new(
        tournament: &'a Tournament,
        members: &'a [TournamentParticipant],
        drafts: &'a [Draft],
    ) -> Self {
        Self {
            tournament,
            members,
            drafts,
            order: TurnOrder::from_members(members),
        }
    }

    pub fn status(&self) -> DraftStatus {
        self.tournament.draft_status()
    }

    pub fn order(&self) -> &TurnOrder {
        &self.order
    }

    pub fn picks_made(&self) -> usize {
        self.drafts.len()
    }

    /// Slot of the next nomination, only while the draft is active
    pub fn next_pick(&self) -> Option<PickSlot> {
        if self.status() != DraftStatus::Active {
            return None;
        }
        self.order.next_position(self.picks_made())
    }

    /// Non-captain members not yet drafted, in registration order
    pub fn remaining(&self) -> Vec<&TournamentParticipant> {
        let claimed = self.claimed();
        self.members
            .iter()
            .filter(|m| !m.is_captain() && !claimed.contains(m.participant_id()))
            .collect()
    }

    /// Checks the draft can open
    ///
    /// # Business Rules
    /// - Draft must be Pending
    /// - At least one captain
    /// - At least one non-captain to draft
    pub fn ensure_can_start(&self) -> Result<(), DraftError> {
        match self.status() {
            DraftStatus::Pending => {}
            DraftStatus::Active => return Err(DraftError::AlreadyStarted),
            DraftStatus::Done => return Err(DraftError::Finished),
        }
        if self.order.is_empty() {
            return Err(DraftError::NoCaptains);
        }
        if !self.members.iter().any(|m| !m.is_captain()) {
            return Err(DraftError::NoDraftableParticipants);
        }
        Ok(())
    }

    /// Validates a captain's pick and builds the nomination record
    ///
    /// # Business Rules
    /// - Draft must be Active
    /// - Nominating member must be a captain and on the clock
    /// - Nominee must be a non-captain member not drafted yet
    pub fn nominate(
        &self,
        captain_id: &ParticipantId,
        participant_id: &ParticipantId,
    ) -> Result<Nomination, DraftError> {
        match self.status() {
            DraftStatus::Active => {}
            DraftStatus::Pending => return Err(DraftError::NotStarted),
            DraftStatus::Done => return Err(DraftError::Finished),
        }

        if !self.order.contains(captain_id) {
            return Err(DraftError::NotACaptain(captain_id.clone()));
        }

        let slot = self
            .order
            .next_position(self.picks_made())
            .ok_or(DraftError::NoCaptains)?;
        if &slot.captain_id != captain_id {
            return Err(DraftError::NotYourTurn {
                captain_id: captain_id.clone(),
                on_the_clock: slot.captain_id,
            });
        }

        let nominee = self
            .members
            .iter()
            .find(|m| m.participant_id() == participant_id)
            .ok_or_else(|| DraftError::ParticipantNotInTournament(participant_id.clone()))?;
        if nominee.is_captain() {
            return Err(DraftError::CannotNominateCaptain(participant_id.clone()));
        }
        if self.claimed().contains(participant_id) {
            return Err(DraftError::AlreadyClaimed(participant_id.clone()));
        }

        // the last pick closes the tournament's draft; the record itself stays Active
        let completes_draft = self.remaining().len() == 1;

        let draft = Draft::create(
            self.tournament.id().clone(),
            captain_id.clone(),
            participant_id.clone(),
            slot.round,
            slot.turn,
            DraftStatus::Active,
        )?;

        let mut events = vec![DraftEvent::Nominated {
            tournament_id: self.tournament.id().clone(),
            captain_id: captain_id.clone(),
            participant_id: participant_id.clone(),
            round: slot.round,
            turn: slot.turn,
        }];
        if completes_draft {
            events.push(DraftEvent::Completed {
                tournament_id: self.tournament.id().clone(),
            });
        }

        Ok(Nomination {
            draft,
            completes_draft,
            events,
        })
    }

    fn claimed(&self) -> HashSet<&ParticipantId> {
        self.drafts.iter().map(|d| d.participant_id()).collect()
    }
}
