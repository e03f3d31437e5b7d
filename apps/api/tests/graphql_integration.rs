//! GraphQL schema tests over the in-memory backend
//!
//! Covers the tournament lifecycle end to end, every draft rule's error
//! code, and concurrent nominations racing for one turn.

use async_graphql::{Request, Variables};
use serde_json::{json, Value};
use splatdraft_api::gql::{build_schema, DraftSchema};
use splatdraft_api::state::AppState;

fn schema() -> DraftSchema {
    build_schema(AppState::in_memory(), true)
}

async fn exec(schema: &DraftSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).unwrap()
}

/// Runs an operation that must succeed and returns `data.<field>`
async fn ok(schema: &DraftSchema, query: &str, variables: Value, field: &str) -> Value {
    let response = exec(schema, query, variables).await;
    assert!(
        response.get("errors").is_none(),
        "unexpected errors: {}",
        response
    );
    response["data"][field].clone()
}

/// Runs an operation that must fail and returns the first error's code
async fn error_code(schema: &DraftSchema, query: &str, variables: Value) -> String {
    let response = exec(schema, query, variables).await;
    let error = &response["errors"][0];
    assert_eq!(
        error["extensions"]["classification"], "BUSINESS_ERROR",
        "{}",
        response
    );
    error["extensions"]["code"].as_str().unwrap().to_string()
}

const CREATE_TOURNAMENT: &str =
    "mutation($name: String!) { createTournament(input: { name: $name }) { id name draftStatus } }";
const CREATE_PARTICIPANT: &str = "mutation($name: String!) { createParticipant(input: { name: $name, weapon: \"Splat Charger\", xp: 900 }) { id teamId } }";
const ADD_MEMBER: &str = "mutation($t: ID!, $p: ID!, $c: Boolean!) { addParticipantToTournament(input: { tournamentId: $t, participantId: $p, isCaptain: $c }) { id isCaptain } }";
const START: &str =
    "mutation($t: ID!) { startDraft(input: { tournamentId: $t }) { status round turn captainId remaining } }";
const NOMINATE: &str = "mutation($t: ID!, $c: ID!, $p: ID!) { nominateParticipant(input: { tournamentId: $t, captainId: $c, participantId: $p }) { id round turn status captainId participantId } }";
const RESET: &str = "mutation($t: ID!) { resetDraft(input: { tournamentId: $t }) { tournamentId removed } }";
const DRAFTS: &str = "query($t: ID!) { drafts(tournamentId: $t) { round turn participantId } }";
const STATE: &str =
    "query($t: ID!) { draftState(tournamentId: $t) { status round turn captainId picksMade remaining } }";

async fn tournament(schema: &DraftSchema, name: &str) -> String {
    let t = ok(schema, CREATE_TOURNAMENT, json!({ "name": name }), "createTournament").await;
    t["id"].as_str().unwrap().to_string()
}

async fn member(schema: &DraftSchema, tournament_id: &str, name: &str, is_captain: bool) -> String {
    let p = ok(schema, CREATE_PARTICIPANT, json!({ "name": name }), "createParticipant").await;
    let id = p["id"].as_str().unwrap().to_string();
    ok(
        schema,
        ADD_MEMBER,
        json!({ "t": tournament_id, "p": id, "c": is_captain }),
        "addParticipantToTournament",
    )
    .await;
    // captains are ordered by registration time
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    id
}

struct Roster {
    tournament_id: String,
    captains: Vec<String>,
    players: Vec<String>,
}

async fn roster(schema: &DraftSchema, captains: usize, players: usize) -> Roster {
    let tournament_id = tournament(schema, "Splat Cup").await;
    let mut roster = Roster {
        tournament_id,
        captains: vec![],
        players: vec![],
    };
    for i in 0..captains {
        let id = member(schema, &roster.tournament_id, &format!("Captain {}", i), true).await;
        roster.captains.push(id);
    }
    for i in 0..players {
        let id = member(schema, &roster.tournament_id, &format!("Player {}", i), false).await;
        roster.players.push(id);
    }
    roster
}

fn pick(r: &Roster, captain: &str, participant: &str) -> Value {
    json!({ "t": r.tournament_id, "c": captain, "p": participant })
}

#[tokio::test]
async fn created_tournament_is_listed() {
    let schema = schema();

    let created = ok(
        &schema,
        CREATE_TOURNAMENT,
        json!({ "name": "Splat Cup" }),
        "createTournament",
    )
    .await;
    assert_eq!(created["name"], "Splat Cup");
    assert_eq!(created["draftStatus"], "PENDING");
    assert!(!created["id"].as_str().unwrap().is_empty());

    let all = ok(&schema, "{ tournaments { id name } }", json!({}), "tournaments").await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], created["id"]);
    assert_eq!(all[0]["name"], "Splat Cup");

    let one = ok(
        &schema,
        "query($id: ID!) { tournament(id: $id) { name } }",
        json!({ "id": created["id"] }),
        "tournament",
    )
    .await;
    assert_eq!(one["name"], "Splat Cup");
}

#[tokio::test]
async fn missing_tournament_query_returns_null() {
    let schema = schema();
    let one = ok(
        &schema,
        "query($id: ID!) { tournament(id: $id) { name } }",
        json!({ "id": "no-such-tournament" }),
        "tournament",
    )
    .await;
    assert!(one.is_null());
}

#[tokio::test]
async fn nominating_the_non_captain_opens_round_one() {
    let schema = schema();
    let r = roster(&schema, 1, 1).await;

    let state = ok(&schema, START, json!({ "t": r.tournament_id }), "startDraft").await;
    assert_eq!(state["status"], "ACTIVE");
    assert_eq!(state["captainId"], r.captains[0].as_str());

    let vars = pick(&r, &r.captains[0], &r.players[0]);
    let draft = ok(&schema, NOMINATE, vars, "nominateParticipant").await;
    assert_eq!(draft["round"], 1);
    assert_eq!(draft["turn"], 1);
    assert_eq!(draft["status"], "ACTIVE");
    assert_eq!(draft["participantId"], r.players[0].as_str());

    // the only remaining participant was taken, so the draft is over
    let state = ok(&schema, STATE, json!({ "t": r.tournament_id }), "draftState").await;
    assert_eq!(state["status"], "DONE");
    assert!(state["captainId"].is_null());
}

#[tokio::test]
async fn reset_empties_the_draft_list() {
    let schema = schema();
    let r = roster(&schema, 2, 2).await;
    ok(&schema, START, json!({ "t": r.tournament_id }), "startDraft").await;
    ok(&schema, NOMINATE, pick(&r, &r.captains[0], &r.players[0]), "nominateParticipant").await;
    ok(&schema, NOMINATE, pick(&r, &r.captains[1], &r.players[1]), "nominateParticipant").await;

    let reset = ok(&schema, RESET, json!({ "t": r.tournament_id }), "resetDraft").await;
    assert_eq!(reset["removed"], 2);

    let drafts = ok(&schema, DRAFTS, json!({ "t": r.tournament_id }), "drafts").await;
    assert!(drafts.as_array().unwrap().is_empty());

    let participants = ok(&schema, "{ participants { teamId } }", json!({}), "participants").await;
    assert!(participants
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["teamId"].is_null()));

    // and the draft can run again
    let state = ok(&schema, START, json!({ "t": r.tournament_id }), "startDraft").await;
    assert_eq!(state["round"], 1);
    assert_eq!(state["turn"], 1);
}

#[tokio::test]
async fn turn_order_wraps_to_round_two() {
    let schema = schema();
    let r = roster(&schema, 2, 3).await;
    ok(&schema, START, json!({ "t": r.tournament_id }), "startDraft").await;

    ok(&schema, NOMINATE, pick(&r, &r.captains[0], &r.players[0]), "nominateParticipant").await;
    ok(&schema, NOMINATE, pick(&r, &r.captains[1], &r.players[1]), "nominateParticipant").await;

    let state = ok(&schema, STATE, json!({ "t": r.tournament_id }), "draftState").await;
    assert_eq!(state["round"], 2);
    assert_eq!(state["turn"], 1);
    assert_eq!(state["captainId"], r.captains[0].as_str());
    assert_eq!(state["picksMade"], 2);
    assert_eq!(state["remaining"], json!([r.players[2]]));

    let drafts = ok(&schema, DRAFTS, json!({ "t": r.tournament_id }), "drafts").await;
    let positions: Vec<(i64, i64)> = drafts
        .as_array()
        .unwrap()
        .iter()
        .map(|d| (d["round"].as_i64().unwrap(), d["turn"].as_i64().unwrap()))
        .collect();
    assert_eq!(positions, vec![(1, 1), (1, 2)]);
}

#[tokio::test]
async fn draft_rules_report_their_codes() {
    let schema = schema();
    let r = roster(&schema, 2, 2).await;
    let outsider = {
        let other = tournament(&schema, "Other Cup").await;
        member(&schema, &other, "Outsider", false).await
    };

    assert_eq!(
        error_code(&schema, NOMINATE, pick(&r, &r.captains[0], &r.players[0])).await,
        "DRAFT_NOT_STARTED"
    );

    ok(&schema, START, json!({ "t": r.tournament_id }), "startDraft").await;

    assert_eq!(
        error_code(&schema, START, json!({ "t": r.tournament_id })).await,
        "DRAFT_ALREADY_STARTED"
    );
    assert_eq!(
        error_code(&schema, NOMINATE, pick(&r, &r.players[0], &r.players[1])).await,
        "NOT_A_CAPTAIN"
    );
    assert_eq!(
        error_code(&schema, NOMINATE, pick(&r, &r.captains[1], &r.players[0])).await,
        "NOT_YOUR_TURN"
    );
    assert_eq!(
        error_code(&schema, NOMINATE, pick(&r, &r.captains[0], &outsider)).await,
        "PARTICIPANT_NOT_IN_TOURNAMENT"
    );
    assert_eq!(
        error_code(&schema, NOMINATE, pick(&r, &r.captains[0], &r.captains[1])).await,
        "CANNOT_NOMINATE_CAPTAIN"
    );

    ok(&schema, NOMINATE, pick(&r, &r.captains[0], &r.players[0]), "nominateParticipant").await;
    assert_eq!(
        error_code(&schema, NOMINATE, pick(&r, &r.captains[1], &r.players[0])).await,
        "PARTICIPANT_ALREADY_CLAIMED"
    );

    assert_eq!(
        error_code(
            &schema,
            ADD_MEMBER,
            json!({ "t": r.tournament_id, "p": outsider, "c": false })
        )
        .await,
        "DRAFT_IN_PROGRESS"
    );

    ok(&schema, NOMINATE, pick(&r, &r.captains[1], &r.players[1]), "nominateParticipant").await;
    assert_eq!(
        error_code(&schema, NOMINATE, pick(&r, &r.captains[0], &r.players[1])).await,
        "DRAFT_FINISHED"
    );
}

#[tokio::test]
async fn start_requires_captains_and_players() {
    let schema = schema();

    let no_captains = roster(&schema, 0, 2).await;
    assert_eq!(
        error_code(&schema, START, json!({ "t": no_captains.tournament_id })).await,
        "NO_CAPTAINS"
    );

    let only_captains = roster(&schema, 2, 0).await;
    assert_eq!(
        error_code(&schema, START, json!({ "t": only_captains.tournament_id })).await,
        "NO_DRAFTABLE_PARTICIPANTS"
    );

    assert_eq!(
        error_code(&schema, START, json!({ "t": "missing" })).await,
        "TOURNAMENT_NOT_FOUND"
    );
}

#[tokio::test]
async fn invalid_input_is_a_validation_error() {
    let schema = schema();

    assert_eq!(
        error_code(&schema, CREATE_TOURNAMENT, json!({ "name": "Cup <3" })).await,
        "VALIDATION_ERROR"
    );
    assert_eq!(
        error_code(&schema, DRAFTS, json!({ "t": "" })).await,
        "VALIDATION_ERROR"
    );
}

#[tokio::test]
async fn concurrent_nominations_for_one_turn_record_one_draft() {
    let schema = schema();
    let r = roster(&schema, 2, 3).await;
    ok(&schema, START, json!({ "t": r.tournament_id }), "startDraft").await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let schema = schema.clone();
            let variables = pick(&r, &r.captains[0], &r.players[0]);
            tokio::spawn(async move { exec(&schema, NOMINATE, variables).await })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        let response = handle.await.unwrap();
        if response.get("errors").is_none() {
            successes += 1;
        } else {
            let code = response["errors"][0]["extensions"]["code"].as_str().unwrap().to_string();
            assert!(
                ["NOT_YOUR_TURN", "PARTICIPANT_ALREADY_CLAIMED", "TURN_CONFLICT"]
                    .contains(&code.as_str()),
                "unexpected code {}",
                code
            );
        }
    }
    assert_eq!(successes, 1);

    let drafts = ok(&schema, DRAFTS, json!({ "t": r.tournament_id }), "drafts").await;
    assert_eq!(drafts.as_array().unwrap().len(), 1);
}
