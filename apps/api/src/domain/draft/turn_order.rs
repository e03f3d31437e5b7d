use crate::domain::shared::ParticipantId;
use crate::domain::tournament::TournamentParticipant;

/// Where a pick lands in the draft and which captain makes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSlot {
    pub round: i32,
    pub turn: i32,
    pub captain_id: ParticipantId,
}

/// Rotation of captains through the draft
///
/// Every captain picks once per round, in registration order, and the
/// rotation wraps into the next round after the last captain:
///
/// ```text
/// captains = [A, B, C]
/// pick:    0    1    2    3    4 ...
/// slot:  1/1  1/2  1/3  2/1  2/2 ...   (round/turn)
/// who:     A    B    C    A    B ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder {
    captains: Vec<ParticipantId>,
}

impl TurnOrder {
    pub fn new(captains: Vec<ParticipantId>) -> Self {
        Self { captains }
    }

    /// Builds the rotation from tournament members, captains ordered by
    /// registration time then id
    pub fn from_members(members: &[TournamentParticipant]) -> Self {
        let mut captains: Vec<&TournamentParticipant> =
            members.iter().filter(|m| m.is_captain()).collect();
        captains.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });

        Self::new(
            captains
                .into_iter()
                .map(|m| m.participant_id().clone())
                .collect(),
        )
    }

    pub fn captains(&self) -> &[ParticipantId] {
        &self.captains
    }

    pub fn is_empty(&self) -> bool {
        self.captains.is_empty()
    }

    pub fn contains(&self, captain_id: &ParticipantId) -> bool {
        self.captains.contains(captain_id)
    }

    /// Slot of the zero-based `pick_index`-th nomination
    ///
    /// Returns `None` when there are no captains.
    pub fn position_for(&self, pick_index: usize) -> Option<PickSlot> {
        let n = self.captains.len();
        if n == 0 {
            return None;
        }

        Some(PickSlot {
            round: (pick_index / n + 1) as i32,
            turn: (pick_index % n + 1) as i32,
            captain_id: self.captains[pick_index % n].clone(),
        })
    }

    /// Slot for the next nomination once `picks_made` have happened
    pub fn next_position(&self, picks_made: usize) -> Option<PickSlot> {
        self.position_for(picks_made)
    }
}
