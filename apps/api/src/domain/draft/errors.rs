use thiserror::Error;

use crate::domain::errors::ValidationError;
use crate::domain::shared::ParticipantId;

/// Draft rule violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("the draft has not started")]
    NotStarted,

    #[error("the draft has already started")]
    AlreadyStarted,

    #[error("the draft is finished")]
    Finished,

    #[error("the draft is in progress; reset it first")]
    InProgress,

    #[error("at least one captain is required to start the draft")]
    NoCaptains,

    #[error("at least one non-captain participant is required to start the draft")]
    NoDraftableParticipants,

    #[error("participant {0} is not a captain in this tournament")]
    NotACaptain(ParticipantId),

    #[error("it is not {captain_id}'s turn; {on_the_clock} is nominating")]
    NotYourTurn {
        captain_id: ParticipantId,
        on_the_clock: ParticipantId,
    },

    #[error("participant {0} is not in this tournament")]
    ParticipantNotInTournament(ParticipantId),

    #[error("participant {0} is a captain and cannot be nominated")]
    CannotNominateCaptain(ParticipantId),

    #[error("participant {0} has already been drafted")]
    AlreadyClaimed(ParticipantId),

    /// A participant plays for one team at a time
    #[error("participant {0} is on a team in another tournament")]
    OnAnotherTeam(ParticipantId),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
