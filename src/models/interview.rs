use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewFormat {
    Video,
    Phone,
    InPerson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: i32,
    pub candidate_id: i32,
    pub job_id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub format: InterviewFormat,
    pub participants: Vec<String>,
    pub notes: String,
    pub status: InterviewStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ScheduleInterviewRequest {
    pub candidate_id: i32,
    pub job_id: i32,
    pub scheduled_at: DateTime<Utc>,
    pub format: InterviewFormat,
    #[validate(length(min = 1))]
    pub participants: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// Partial update; only the mutable fields (roster, notes, status).
#[derive(Debug, Deserialize)]
pub struct UpdateInterviewRequest {
    pub scheduled_at: Option<DateTime<Utc>>,
    pub participants: Option<Vec<String>>,
    pub notes: Option<String>,
    pub status: Option<InterviewStatus>,
}
