use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::errors::ClientError;
use super::types::{Draft, DraftState, Participant, ResetDraft, Tournament, TournamentParticipant};

const TOURNAMENT_FIELDS: &str = "id name draftStatus createdAt";
const PARTICIPANT_FIELDS: &str = "id name weapon xp teamId createdAt";
const MEMBER_FIELDS: &str = "id tournamentId participantId isCaptain teamId createdAt";
const DRAFT_FIELDS: &str = "id tournamentId captainId participantId round turn status createdAt";
const DRAFT_STATE_FIELDS: &str = "tournamentId status round turn captainId picksMade remaining";

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
    #[serde(default)]
    extensions: Option<Value>,
}

/// Client for the draft GraphQL API
///
/// Every call checks its required inputs before anything goes over the wire.
#[derive(Clone)]
pub struct DraftClient {
    endpoint: String,
    client: reqwest::Client,
}

impl DraftClient {
    /// Create a client for the GraphQL endpoint at `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Endpoint from `API_URL`, or the local default
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let endpoint = std::env::var("API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/graphql".to_string());
        Self::new(endpoint)
    }

    pub async fn tournaments(&self) -> Result<Vec<Tournament>, ClientError> {
        let query = format!("query {{ tournaments {{ {} }} }}", TOURNAMENT_FIELDS);
        self.required(&query, json!({}), "tournaments").await
    }

    pub async fn tournament(&self, id: &str) -> Result<Option<Tournament>, ClientError> {
        let id = require("id", id)?;
        let query = format!(
            "query($id: ID!) {{ tournament(id: $id) {{ {} }} }}",
            TOURNAMENT_FIELDS
        );
        let value = self.execute(&query, json!({ "id": id }), "tournament").await?;
        decode("tournament", value)
    }

    pub async fn create_tournament(&self, name: &str) -> Result<Tournament, ClientError> {
        let name = require("name", name)?;
        let query = format!(
            "mutation($input: CreateTournamentInput!) {{ createTournament(input: $input) {{ {} }} }}",
            TOURNAMENT_FIELDS
        );
        self.required(&query, json!({ "input": { "name": name } }), "createTournament")
            .await
    }

    pub async fn participants(&self) -> Result<Vec<Participant>, ClientError> {
        let query = format!("query {{ participants {{ {} }} }}", PARTICIPANT_FIELDS);
        self.required(&query, json!({}), "participants").await
    }

    pub async fn participant(&self, id: &str) -> Result<Option<Participant>, ClientError> {
        let id = require("id", id)?;
        let query = format!(
            "query($id: ID!) {{ participant(id: $id) {{ {} }} }}",
            PARTICIPANT_FIELDS
        );
        let value = self.execute(&query, json!({ "id": id }), "participant").await?;
        decode("participant", value)
    }

    pub async fn create_participant(
        &self,
        name: &str,
        weapon: &str,
        xp: i32,
    ) -> Result<Participant, ClientError> {
        let name = require("name", name)?;
        let weapon = require("weapon", weapon)?;
        let query = format!(
            "mutation($input: CreateParticipantInput!) {{ createParticipant(input: $input) {{ {} }} }}",
            PARTICIPANT_FIELDS
        );
        let variables = json!({ "input": { "name": name, "weapon": weapon, "xp": xp } });
        self.required(&query, variables, "createParticipant").await
    }

    pub async fn add_participant_to_tournament(
        &self,
        tournament_id: &str,
        participant_id: &str,
        is_captain: bool,
    ) -> Result<TournamentParticipant, ClientError> {
        self.membership(
            "addParticipantToTournament",
            tournament_id,
            participant_id,
            is_captain,
        )
        .await
    }

    pub async fn set_captain(
        &self,
        tournament_id: &str,
        participant_id: &str,
        is_captain: bool,
    ) -> Result<TournamentParticipant, ClientError> {
        self.membership("setCaptain", tournament_id, participant_id, is_captain)
            .await
    }

    pub async fn tournament_participants(
        &self,
        tournament_id: &str,
    ) -> Result<Vec<TournamentParticipant>, ClientError> {
        let tournament_id = require("tournamentId", tournament_id)?;
        let query = format!(
            "query($tournamentId: ID!) {{ tournamentParticipants(tournamentId: $tournamentId) {{ {} }} }}",
            MEMBER_FIELDS
        );
        self.required(
            &query,
            json!({ "tournamentId": tournament_id }),
            "tournamentParticipants",
        )
        .await
    }

    pub async fn start_draft(&self, tournament_id: &str) -> Result<DraftState, ClientError> {
        let tournament_id = require("tournamentId", tournament_id)?;
        let query = format!(
            "mutation($input: TournamentDraftInput!) {{ startDraft(input: $input) {{ {} }} }}",
            DRAFT_STATE_FIELDS
        );
        self.required(
            &query,
            json!({ "input": { "tournamentId": tournament_id } }),
            "startDraft",
        )
        .await
    }

    pub async fn nominate_participant(
        &self,
        tournament_id: &str,
        captain_id: &str,
        participant_id: &str,
    ) -> Result<Draft, ClientError> {
        let tournament_id = require("tournamentId", tournament_id)?;
        let captain_id = require("captainId", captain_id)?;
        let participant_id = require("participantId", participant_id)?;
        let query = format!(
            "mutation($input: NominateParticipantInput!) {{ nominateParticipant(input: $input) {{ {} }} }}",
            DRAFT_FIELDS
        );
        let variables = json!({
            "input": {
                "tournamentId": tournament_id,
                "captainId": captain_id,
                "participantId": participant_id,
            }
        });
        self.required(&query, variables, "nominateParticipant").await
    }

    pub async fn reset_draft(&self, tournament_id: &str) -> Result<ResetDraft, ClientError> {
        let tournament_id = require("tournamentId", tournament_id)?;
        let query = "mutation($input: TournamentDraftInput!) { resetDraft(input: $input) { tournamentId removed } }";
        self.required(
            query,
            json!({ "input": { "tournamentId": tournament_id } }),
            "resetDraft",
        )
        .await
    }

    pub async fn drafts(&self, tournament_id: &str) -> Result<Vec<Draft>, ClientError> {
        let tournament_id = require("tournamentId", tournament_id)?;
        let query = format!(
            "query($tournamentId: ID!) {{ drafts(tournamentId: $tournamentId) {{ {} }} }}",
            DRAFT_FIELDS
        );
        self.required(&query, json!({ "tournamentId": tournament_id }), "drafts")
            .await
    }

    pub async fn draft_state(&self, tournament_id: &str) -> Result<DraftState, ClientError> {
        let tournament_id = require("tournamentId", tournament_id)?;
        let query = format!(
            "query($tournamentId: ID!) {{ draftState(tournamentId: $tournamentId) {{ {} }} }}",
            DRAFT_STATE_FIELDS
        );
        self.required(&query, json!({ "tournamentId": tournament_id }), "draftState")
            .await
    }

    async fn membership(
        &self,
        field: &'static str,
        tournament_id: &str,
        participant_id: &str,
        is_captain: bool,
    ) -> Result<TournamentParticipant, ClientError> {
        let tournament_id = require("tournamentId", tournament_id)?;
        let participant_id = require("participantId", participant_id)?;
        let query = format!(
            "mutation($input: MembershipInput!) {{ {}(input: $input) {{ {} }} }}",
            field, MEMBER_FIELDS
        );
        let variables = json!({
            "input": {
                "tournamentId": tournament_id,
                "participantId": participant_id,
                "isCaptain": is_captain,
            }
        });
        self.required(&query, variables, field).await
    }

    /// Runs an operation whose `field` must come back non-null
    async fn required<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &'static str,
    ) -> Result<T, ClientError> {
        let value = self.execute(query, variables, field).await?;
        if value.is_null() {
            return Err(ClientError::MissingData(field));
        }
        decode(field, value)
    }

    async fn execute(
        &self,
        query: &str,
        variables: Value,
        field: &'static str,
    ) -> Result<Value, ClientError> {
        let body: GraphQLResponse = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .json()
            .await?;

        extract(body, field)
    }
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ClientError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClientError::MissingField(field));
    }
    Ok(trimmed)
}

fn decode<T: DeserializeOwned>(field: &'static str, value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|source| ClientError::Decode { field, source })
}

/// First GraphQL error wins; otherwise the value under `data.<field>`
fn extract(body: GraphQLResponse, field: &'static str) -> Result<Value, ClientError> {
    if let Some(error) = body.errors.into_iter().next() {
        let code = error
            .extensions
            .as_ref()
            .and_then(|e| e.get("code"))
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN")
            .to_string();
        return Err(ClientError::Api {
            code,
            message: error.message,
        });
    }

    body.data
        .and_then(|mut data| data.get_mut(field).map(Value::take))
        .ok_or(ClientError::MissingData(field))
}
