use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    models::interview::{Interview, ScheduleInterviewRequest, UpdateInterviewRequest},
    services::calendar::CalendarEvent,
    utils::{errors::AppError, logger::LOGGER},
    AppState,
};

pub async fn schedule_interview(
    State(state): State<AppState>,
    Json(payload): Json<ScheduleInterviewRequest>,
) -> Result<Json<Interview>, AppError> {
    payload.validate()?;

    // both ends of the interview must exist before anything is written
    state.stores.candidates.get(payload.candidate_id)?;
    state.stores.jobs.get(payload.job_id)?;

    let interview = state.stores.interviews.schedule(payload)?;
    LOGGER.log_business_event(
        "interview_scheduled",
        Some(interview.candidate_id),
        [(
            "interview_id".to_string(),
            serde_json::Value::Number(serde_json::Number::from(interview.id)),
        )]
        .iter()
        .cloned()
        .collect(),
    );
    Ok(Json(interview))
}

pub async fn get_interview(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Interview>, AppError> {
    Ok(Json(state.stores.interviews.get(id)?))
}

pub async fn update_interview(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInterviewRequest>,
) -> Result<Json<Interview>, AppError> {
    Ok(Json(state.stores.interviews.update(id, payload)?))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarFormat {
    Ics,
    Google,
    Outlook,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub format: CalendarFormat,
}

/// Exports a scheduled interview either as a downloadable .ics file or as
/// a deep link into Google/Outlook calendars.
pub async fn export_calendar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, AppError> {
    let interview = state.stores.interviews.get(id)?;
    let candidate = state.stores.candidates.get(interview.candidate_id)?;
    let job = state.stores.jobs.get(interview.job_id)?;

    let event = CalendarEvent::for_interview(&interview, &candidate.name, &job.title);

    let response = match query.format {
        CalendarFormat::Ics => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"interview-{}.ics\"", interview.id),
                ),
            ],
            event.to_ics(),
        )
            .into_response(),
        CalendarFormat::Google => {
            Json(serde_json::json!({ "url": event.google_calendar_url() })).into_response()
        }
        CalendarFormat::Outlook => {
            Json(serde_json::json!({ "url": event.outlook_url() })).into_response()
        }
    };
    Ok(response)
}
