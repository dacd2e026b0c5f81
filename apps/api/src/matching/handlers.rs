//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::aggregator::MatchResult;
use crate::matching::skill_gap::SkillGapAnalysis;
use crate::matching::validation::{validate_job, validate_jobs, validate_limit, validate_profile};
use crate::models::{Job, UserProfile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub profile: UserProfile,
    pub job: Job,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub profile: UserProfile,
    pub jobs: Vec<Job>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<MatchResult>,
    pub total_jobs_scored: usize,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub profile: UserProfile,
    pub jobs: Vec<Job>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/score
///
/// Scores a single job against the profile.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<MatchResult>, AppError> {
    validate_profile(&request.profile)?;
    validate_job(&request.job)?;

    let result = state.matcher.score(&request.profile, &request.job);
    info!(
        job_id = %result.job_id,
        match_score = result.match_score,
        backend = state.matcher.backend(),
        "Scored job"
    );

    Ok(Json(result))
}

/// POST /api/v1/matches/recommendations
///
/// Returns the best-matching jobs (score ≥ 60), highest first.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let limit = request
        .limit
        .unwrap_or(state.config.default_recommendation_limit);
    validate_limit(limit)?;
    validate_profile(&request.profile)?;
    validate_jobs(&request.jobs, state.config.max_jobs_per_request)?;

    let recommendations = state
        .matcher
        .recommend(&request.profile, &request.jobs, limit);
    info!(
        jobs = request.jobs.len(),
        returned = recommendations.len(),
        limit,
        "Generated recommendations"
    );

    Ok(Json(RecommendationsResponse {
        recommendations,
        total_jobs_scored: request.jobs.len(),
    }))
}

/// POST /api/v1/matches/skill-gaps
///
/// Aggregates missing skills across a set of jobs with learning suggestions.
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapAnalysis>, AppError> {
    validate_profile(&request.profile)?;
    validate_jobs(&request.jobs, state.config.max_jobs_per_request)?;

    let analysis = state.matcher.skill_gaps(&request.profile, &request.jobs);
    info!(
        jobs = request.jobs.len(),
        critical = analysis.missing_critical_skills.len(),
        "Analyzed skill gaps"
    );

    Ok(Json(analysis))
}
