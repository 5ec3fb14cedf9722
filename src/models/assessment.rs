use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin correction recorded alongside the original score. The AI-generated
/// score is retained for audit, never overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreOverride {
    pub score: u8,
    pub reason: String,
    pub overridden_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub category: String,
    pub score: u8,
    pub rationale: String,
    pub ai_generated: bool,
    pub admin_override: Option<ScoreOverride>,
}

impl AssessmentScore {
    /// Effective score after any admin override.
    pub fn effective_score(&self) -> u8 {
        self.admin_override
            .as_ref()
            .map(|o| o.score)
            .unwrap_or(self.score)
    }
}

/// Irreversible candidate action that locks the review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateAction {
    Interview,
    Reject,
    Match,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "action")]
pub enum ReviewState {
    Pending,
    Approved,
    Amended,
    Locked(CandidateAction),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReview {
    pub candidate_id: i32,
    pub scores: Vec<AssessmentScore>,
    pub state: ReviewState,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl AssessmentReview {
    pub fn new(candidate_id: i32, scores: Vec<AssessmentScore>) -> Self {
        Self {
            candidate_id,
            scores,
            state: ReviewState::Pending,
            reviewed_at: None,
        }
    }
}
