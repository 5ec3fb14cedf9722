use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::{
    models::{
        assessment::{AssessmentReview, CandidateAction},
        candidate::CandidateResponse,
    },
    services::{
        projection::{project, CandidateFilters},
        review::LockOutcome,
    },
    utils::{errors::AppError, logger::LOGGER},
    AppState,
};

/// Filter/sort listing: the projection is recomputed in full from the
/// current store contents on every request.
pub async fn get_candidates(
    State(state): State<AppState>,
    Query(filters): Query<CandidateFilters>,
) -> Json<Vec<CandidateResponse>> {
    let candidates = state.stores.candidates.list();
    let view = project(&candidates, &filters)
        .into_iter()
        .map(CandidateResponse::from)
        .collect();
    Json(view)
}

pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CandidateResponse>, AppError> {
    let candidate = state.stores.candidates.get(id)?;
    Ok(Json(CandidateResponse::from(candidate)))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AssessmentReview>, AppError> {
    Ok(Json(state.stores.candidates.review(id)?))
}

pub async fn approve_assessment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AssessmentReview>, AppError> {
    let mut review = state.stores.candidates.review(id)?;
    review.approve()?;
    state.stores.candidates.put_review(review.clone());

    LOGGER.log_business_event(
        "assessment_approved",
        Some(id),
        std::collections::HashMap::new(),
    );
    Ok(Json(review))
}

#[derive(Debug, Deserialize)]
pub struct AmendRequest {
    pub category: String,
    pub score: u8,
    pub reason: String,
}

pub async fn amend_assessment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AmendRequest>,
) -> Result<Json<AssessmentReview>, AppError> {
    let mut review = state.stores.candidates.review(id)?;
    review.amend(&payload.category, payload.score, &payload.reason)?;
    state.stores.candidates.put_review(review.clone());

    LOGGER.log_business_event(
        "assessment_amended",
        Some(id),
        [(
            "category".to_string(),
            serde_json::Value::String(payload.category),
        )]
        .iter()
        .cloned()
        .collect(),
    );
    Ok(Json(review))
}

#[derive(Debug, Deserialize)]
pub struct CandidateActionRequest {
    pub action: CandidateAction,
}

/// Irreversible candidate action. The lock is the domain transition; the
/// returned follow_up tells the caller whether to move into interview
/// scheduling or just show a confirmation.
pub async fn candidate_action(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CandidateActionRequest>,
) -> Result<Json<LockOutcome>, AppError> {
    let mut review = state.stores.candidates.review(id)?;
    let outcome = review.lock(payload.action)?;
    state.stores.candidates.set_status(id, outcome.new_status)?;
    state.stores.candidates.put_review(review);

    LOGGER.log_business_event(
        "candidate_action_taken",
        Some(id),
        [(
            "action".to_string(),
            serde_json::Value::String(outcome.new_status.as_str().to_string()),
        )]
        .iter()
        .cloned()
        .collect(),
    );
    Ok(Json(outcome))
}
