use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::judging::router::{evaluate_handler, replace_profile_handler};
use crate::judging::{judging_router, Criterion, JudgingConfig};

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("serialise payload")))
        .expect("request builds")
}

#[tokio::test]
async fn evaluation_route_returns_scored_result() {
    let router = judging_router(judging_state(&profile_handle()));
    let payload = serde_json::to_value(care_queue()).expect("submission serialises");

    let response = router
        .oneshot(json_request("POST", "/api/v1/evaluations", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("verdict"), Some(&json!("winner_material")));
    assert_eq!(body["criteria"].as_array().map(Vec::len), Some(7));
    assert!(body["feedback"]["narrative"].is_string());
}

#[tokio::test]
async fn evaluation_route_accepts_missing_demo_field() {
    let router = judging_router(judging_state(&profile_handle()));
    let mut payload = serde_json::to_value(study_buddy()).expect("submission serialises");
    payload
        .as_object_mut()
        .expect("object payload")
        .remove("demo_link");

    let response = router
        .oneshot(json_request("POST", "/api/v1/evaluations", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["facts"]["demo"], json!("missing"));
}

#[tokio::test]
async fn evaluation_handler_rejects_empty_team() {
    let mut submission = care_queue();
    submission.team_size = 0;

    let state = judging_state(&profile_handle());
    let response = evaluate_handler(State(state), axum::Json(submission))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("team_size"));
}

#[tokio::test]
async fn leaderboard_route_ranks_supplied_results() {
    let router = judging_router(judging_state(&profile_handle()));
    let payload = json!({
        "entries": [
            { "id": "study", "result": evaluate(&study_buddy()) },
            { "id": "care", "result": evaluate(&care_queue()) },
        ],
        "podium_size": 1
    });

    let response = router
        .oneshot(json_request("POST", "/api/v1/leaderboard", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["entries"][0]["id"], json!("care"));
    assert_eq!(body["entries"][0]["podium"], json!(true));
    assert_eq!(body["entries"][1]["podium"], json!(false));
    assert_eq!(body["explanation"]["leader"], json!("care"));
    assert_eq!(body["statistics"]["total"], json!(2));
}

#[tokio::test]
async fn leaderboard_route_falls_back_to_configured_podium() {
    let router = judging_router(judging_state(&profile_handle()).with_podium_size(2));
    let payload = json!({
        "entries": [
            { "id": "study", "result": evaluate(&study_buddy()) },
            { "id": "care", "result": evaluate(&care_queue()) },
            { "id": "synergy", "result": evaluate(&synergy_verse()) },
        ]
    });

    let response = router
        .oneshot(json_request("POST", "/api/v1/leaderboard", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let podium: Vec<bool> = body["entries"]
        .as_array()
        .expect("entries")
        .iter()
        .map(|entry| entry["podium"].as_bool().unwrap_or_default())
        .collect();
    assert_eq!(podium, vec![true, true, false]);
}

#[tokio::test]
async fn leaderboard_route_keeps_entries_that_share_an_id() {
    let router = judging_router(judging_state(&profile_handle()));
    let payload = json!({
        "entries": [
            { "id": "team", "result": evaluate(&study_buddy()) },
            { "id": "team", "result": evaluate(&care_queue()) },
        ]
    });

    let response = router
        .oneshot(json_request("POST", "/api/v1/leaderboard", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["entries"][0]["result"]["title"], json!("CareQueue"));
    assert_eq!(body["statistics"]["total"], json!(2));
}

#[tokio::test]
async fn profile_route_returns_active_configuration() {
    let router = judging_router(judging_state(&profile_handle()));

    let response = router
        .oneshot(
            Request::get("/api/v1/profile")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["weights"]["innovation"], json!(0.25));
    assert_eq!(body["penalties"]["total_cap"], json!(30.0));
}

#[tokio::test]
async fn profile_replacement_validates_before_swapping() {
    let handle = profile_handle();

    let mut invalid = JudgingConfig::default();
    invalid.weights.insert(Criterion::Impact, 0.5);
    let response = replace_profile_handler(State(judging_state(&handle)), axum::Json(invalid))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(handle.snapshot().weight(Criterion::Impact), 0.05);

    let mut valid = JudgingConfig::default();
    valid.weights.insert(Criterion::Impact, 0.10);
    valid.weights.insert(Criterion::Innovation, 0.20);
    let payload = serde_json::to_value(&valid).expect("config serialises");

    let response = judging_router(judging_state(&handle))
        .oneshot(json_request("PUT", "/api/v1/profile", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!({ "status": "replaced" }));
    assert_eq!(handle.snapshot().weight(Criterion::Impact), 0.10);
}
