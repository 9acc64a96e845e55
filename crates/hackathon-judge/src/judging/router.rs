use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::config::{JudgingConfig, ProfileHandle};
use super::domain::{Submission, SubmissionId};
use super::leaderboard::{Leaderboard, LeaderboardStatistics, Standings, DEFAULT_PODIUM_SIZE};
use super::ScoreResult;
use crate::error::AppError;

/// Shared state behind the judging routes.
#[derive(Debug, Clone)]
pub struct JudgingState {
    pub profiles: ProfileHandle,
    /// Podium places used when a leaderboard request does not set its own.
    pub podium_size: usize,
}

impl JudgingState {
    pub fn new(profiles: ProfileHandle) -> Self {
        Self {
            profiles,
            podium_size: DEFAULT_PODIUM_SIZE,
        }
    }

    pub fn with_podium_size(mut self, podium_size: usize) -> Self {
        self.podium_size = podium_size;
        self
    }
}

/// Router exposing the evaluation and leaderboard entry points plus profile management.
pub fn judging_router(state: JudgingState) -> Router {
    Router::new()
        .route("/api/v1/evaluations", post(evaluate_handler))
        .route("/api/v1/leaderboard", post(leaderboard_handler))
        .route(
            "/api/v1/profile",
            get(profile_handler).put(replace_profile_handler),
        )
        .with_state(state)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSubmission {
    pub id: SubmissionId,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRequest {
    pub entries: Vec<RankedSubmission>,
    #[serde(default)]
    pub podium_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    #[serde(flatten)]
    pub standings: Standings,
    pub statistics: LeaderboardStatistics,
}

pub(crate) async fn evaluate_handler(
    State(state): State<JudgingState>,
    Json(submission): Json<Submission>,
) -> Result<Json<ScoreResult>, AppError> {
    let result = state.profiles.judge().evaluate(&submission)?;
    Ok(Json(result))
}

pub(crate) async fn leaderboard_handler(
    State(state): State<JudgingState>,
    Json(request): Json<LeaderboardRequest>,
) -> Json<LeaderboardResponse> {
    let board = Leaderboard::from_pairs(
        request
            .entries
            .into_iter()
            .map(|entry| (entry.id, entry.result)),
        request.podium_size.unwrap_or(state.podium_size),
    );

    Json(LeaderboardResponse {
        standings: board.standings(),
        statistics: board.statistics(),
    })
}

pub(crate) async fn profile_handler(State(state): State<JudgingState>) -> Json<JudgingConfig> {
    Json(state.profiles.snapshot().config().clone())
}

pub(crate) async fn replace_profile_handler(
    State(state): State<JudgingState>,
    Json(config): Json<JudgingConfig>,
) -> Result<Response, AppError> {
    state.profiles.replace(config)?;
    let payload = json!({ "status": "replaced" });
    Ok((StatusCode::OK, Json(payload)).into_response())
}
