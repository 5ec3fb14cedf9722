use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    models::job::{CreateJobRequest, JobResponse},
    services::wizard::{JobDraft, JobWizard, WizardError, WizardStep},
    utils::{errors::AppError, logger::LOGGER},
    AppState,
};

pub async fn get_jobs(State(state): State<AppState>) -> Json<Vec<JobResponse>> {
    let jobs = state
        .stores
        .jobs
        .list()
        .into_iter()
        .map(|job| {
            let saved = state.stores.jobs.is_saved(job.id);
            JobResponse { job, saved }
        })
        .collect();
    Json(jobs)
}

pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<JobResponse>, AppError> {
    let job = state.stores.jobs.get(id)?;
    let saved = state.stores.jobs.is_saved(id);
    Ok(Json(JobResponse { job, saved }))
}

pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<Json<JobResponse>, AppError> {
    payload.validate()?;

    let job = state.stores.jobs.create(payload)?;
    LOGGER.log_business_event(
        "job_posting_created",
        Some(job.id),
        [(
            "tier".to_string(),
            serde_json::Value::String(format!("{:?}", job.tier).to_lowercase()),
        )]
        .iter()
        .cloned()
        .collect(),
    );

    Ok(Json(JobResponse { job, saved: false }))
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub draft: JobDraft,
}

#[derive(Debug, Serialize)]
pub struct StepValidity {
    pub step: WizardStep,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct DraftValidationResponse {
    pub steps: Vec<StepValidity>,
    pub can_submit: bool,
}

/// Per-step validity for an in-progress draft, mirroring the gating the
/// authoring wizard applies locally. Never touches the store.
pub async fn validate_draft(Json(payload): Json<DraftRequest>) -> Json<DraftValidationResponse> {
    let wizard = JobWizard::with_draft(payload.draft);
    let steps: Vec<StepValidity> = WizardStep::ALL
        .iter()
        .map(|&step| StepValidity {
            step,
            valid: wizard.is_step_valid(step),
        })
        .collect();
    let can_submit = steps.iter().all(|s| s.valid);
    Json(DraftValidationResponse { steps, can_submit })
}

/// Walks the draft through the wizard and submits from the terminal step;
/// an incomplete draft is rejected before anything is written.
pub async fn submit_draft(
    State(state): State<AppState>,
    Json(payload): Json<DraftRequest>,
) -> Result<Json<JobResponse>, AppError> {
    let mut wizard = JobWizard::with_draft(payload.draft);
    for step in WizardStep::ALL {
        if !wizard.is_step_valid(step) {
            return Err(WizardError::IncompleteStep(step).into());
        }
    }
    for _ in 1..WizardStep::ALL.len() {
        wizard.next();
    }
    let request = wizard.submit()?;
    request.validate()?;

    let job = state.stores.jobs.create(request)?;
    LOGGER.log_business_event(
        "job_posting_created",
        Some(job.id),
        std::collections::HashMap::new(),
    );
    Ok(Json(JobResponse { job, saved: false }))
}

#[derive(Debug, Serialize)]
pub struct SavedJobResponse {
    pub job_id: i32,
    pub saved: bool,
}

pub async fn toggle_saved_job(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Json<SavedJobResponse>, AppError> {
    let saved = state.stores.jobs.toggle_saved(job_id)?;
    Ok(Json(SavedJobResponse { job_id, saved }))
}

pub async fn get_saved_jobs(State(state): State<AppState>) -> Json<Vec<JobResponse>> {
    let jobs = state
        .stores
        .jobs
        .saved_jobs()
        .into_iter()
        .map(|job| JobResponse { job, saved: true })
        .collect();
    Json(jobs)
}
