use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical application status. The platform historically carried drifting
/// spellings per page ("reviewing", "interview_completed"); those are
/// accepted as input aliases only and are never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    #[serde(alias = "reviewing")]
    InProgress,
    InterviewScheduled,
    #[serde(alias = "interview_completed")]
    InterviewComplete,
    Rejected,
    Hired,
    OfferDeclined,
}

impl ApplicationStatus {
    /// The one badge mapping, defined once and imported everywhere.
    pub fn badge_label(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "New",
            ApplicationStatus::InProgress => "In progress",
            ApplicationStatus::InterviewScheduled => "Interview scheduled",
            ApplicationStatus::InterviewComplete => "Interview complete",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::OfferDeclined => "Offer declined",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "new",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::InterviewScheduled => "interview_scheduled",
            ApplicationStatus::InterviewComplete => "interview_complete",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
            ApplicationStatus::OfferDeclined => "offer_declined",
        }
    }
}

/// Four-axis behavioral profile (red/yellow/green/blue percentages).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscProfile {
    pub red: u8,
    pub yellow: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub location: String,
    pub match_score: u8,
    pub challenge_score: Option<u8>,
    pub disc: DiscProfile,
    pub skills: Vec<String>,
    pub strengths: Vec<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CandidateResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub location: String,
    pub match_score: u8,
    pub challenge_score: Option<u8>,
    pub disc: DiscProfile,
    pub skills: Vec<String>,
    pub strengths: Vec<String>,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub applied_at: DateTime<Utc>,
}

impl From<Candidate> for CandidateResponse {
    fn from(c: Candidate) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            location: c.location,
            match_score: c.match_score,
            challenge_score: c.challenge_score,
            disc: c.disc,
            skills: c.skills,
            strengths: c.strengths,
            status: c.status,
            status_label: c.status.badge_label(),
            applied_at: c.applied_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApplicationStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn legacy_spellings_deserialize_to_canonical_variants() {
        let s: ApplicationStatus = serde_json::from_str("\"reviewing\"").unwrap();
        assert_eq!(s, ApplicationStatus::InProgress);

        let s: ApplicationStatus = serde_json::from_str("\"interview_completed\"").unwrap();
        assert_eq!(s, ApplicationStatus::InterviewComplete);
    }

    #[test]
    fn serialization_always_emits_canonical_form() {
        let json = serde_json::to_string(&ApplicationStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let json = serde_json::to_string(&ApplicationStatus::InterviewComplete).unwrap();
        assert_eq!(json, "\"interview_complete\"");
    }
}
