use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::models::assessment::{
    AssessmentReview, CandidateAction, ReviewState, ScoreOverride,
};
use crate::models::candidate::ApplicationStatus;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("assessment is locked and can no longer be edited")]
    Locked,
    #[error("an override reason is required")]
    MissingReason,
    #[error("unknown assessment category: {0}")]
    UnknownCategory(String),
    #[error("scores must be approved or amended before taking a candidate action")]
    NotReviewed,
    #[error("scores have already been approved or amended")]
    AlreadyReviewed,
}

/// What the caller should do after a successful lock. The transition itself
/// carries no navigation; an interview lock asks the caller to move into
/// scheduling, the other actions just get confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
    ScheduleInterview,
    Confirmation,
}

#[derive(Debug, Serialize)]
pub struct LockOutcome {
    pub action: CandidateAction,
    pub new_status: ApplicationStatus,
    pub follow_up: FollowUp,
}

impl AssessmentReview {
    /// `pending -> approved`; no additional input required. Approving a set
    /// of scores that was already approved or amended is rejected so the
    /// review verdict stays single-shot.
    pub fn approve(&mut self) -> Result<(), ReviewError> {
        match self.state {
            ReviewState::Locked(_) => return Err(ReviewError::Locked),
            ReviewState::Approved | ReviewState::Amended => {
                return Err(ReviewError::AlreadyReviewed)
            }
            ReviewState::Pending => {}
        }
        self.state = ReviewState::Approved;
        self.reviewed_at = Some(Utc::now());
        Ok(())
    }

    /// `pending|amended -> amended`. The override is recorded alongside the
    /// original AI score; a blank reason never passes.
    pub fn amend(
        &mut self,
        category: &str,
        new_score: u8,
        reason: &str,
    ) -> Result<(), ReviewError> {
        match self.state {
            ReviewState::Locked(_) => return Err(ReviewError::Locked),
            // an approval is final; corrections only stack on amended scores
            ReviewState::Approved => return Err(ReviewError::AlreadyReviewed),
            ReviewState::Pending | ReviewState::Amended => {}
        }
        if reason.trim().is_empty() {
            return Err(ReviewError::MissingReason);
        }
        let score = self
            .scores
            .iter_mut()
            .find(|s| s.category.eq_ignore_ascii_case(category))
            .ok_or_else(|| ReviewError::UnknownCategory(category.to_string()))?;

        score.admin_override = Some(ScoreOverride {
            score: new_score,
            reason: reason.trim().to_string(),
            overridden_at: Utc::now(),
        });
        self.state = ReviewState::Amended;
        self.reviewed_at = Some(Utc::now());
        Ok(())
    }

    /// Irreversible. Only reachable from approved or amended; a candidate
    /// action taken from pending is blocked so the actor approves first.
    pub fn lock(&mut self, action: CandidateAction) -> Result<LockOutcome, ReviewError> {
        match self.state {
            ReviewState::Locked(_) => return Err(ReviewError::Locked),
            ReviewState::Pending => return Err(ReviewError::NotReviewed),
            ReviewState::Approved | ReviewState::Amended => {}
        }
        self.state = ReviewState::Locked(action);

        let (new_status, follow_up) = match action {
            CandidateAction::Interview => {
                (ApplicationStatus::InterviewScheduled, FollowUp::ScheduleInterview)
            }
            CandidateAction::Reject => (ApplicationStatus::Rejected, FollowUp::Confirmation),
            CandidateAction::Match => (ApplicationStatus::InProgress, FollowUp::Confirmation),
        };
        Ok(LockOutcome {
            action,
            new_status,
            follow_up,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::AssessmentScore;
    use pretty_assertions::assert_eq;

    fn review() -> AssessmentReview {
        AssessmentReview::new(
            20,
            vec![
                AssessmentScore {
                    category: "Problem solving".to_string(),
                    score: 82,
                    rationale: "Strong decomposition of the challenge task.".to_string(),
                    ai_generated: true,
                    admin_override: None,
                },
                AssessmentScore {
                    category: "Communication".to_string(),
                    score: 74,
                    rationale: "Clear written walkthrough.".to_string(),
                    ai_generated: true,
                    admin_override: None,
                },
            ],
        )
    }

    #[test]
    fn approve_moves_pending_to_approved() {
        let mut r = review();
        r.approve().unwrap();
        assert_eq!(r.state, ReviewState::Approved);
        assert!(r.reviewed_at.is_some());
    }

    #[test]
    fn amend_with_blank_reason_is_rejected() {
        let mut r = review();
        assert_eq!(
            r.amend("Communication", 60, "").unwrap_err(),
            ReviewError::MissingReason
        );
        assert_eq!(
            r.amend("Communication", 60, "   ").unwrap_err(),
            ReviewError::MissingReason
        );
        assert_eq!(r.state, ReviewState::Pending);
    }

    #[test]
    fn amend_preserves_the_original_ai_score_alongside_the_override() {
        let mut r = review();
        r.amend("Communication", 60, "rationale cites the wrong submission")
            .unwrap();

        assert_eq!(r.state, ReviewState::Amended);
        let score = &r.scores[1];
        assert_eq!(score.score, 74);
        assert!(score.ai_generated);
        assert_eq!(score.admin_override.as_ref().unwrap().score, 60);
        assert_eq!(score.effective_score(), 60);
    }

    #[test]
    fn amend_rejects_an_unknown_category() {
        let mut r = review();
        assert_eq!(
            r.amend("Leadership", 50, "n/a").unwrap_err(),
            ReviewError::UnknownCategory("Leadership".to_string())
        );
    }

    #[test]
    fn approve_is_single_shot() {
        let mut r = review();
        r.approve().unwrap();
        assert_eq!(r.approve().unwrap_err(), ReviewError::AlreadyReviewed);
        assert_eq!(r.state, ReviewState::Approved);

        let mut r = review();
        r.amend("Communication", 68, "adjusted for rubric drift").unwrap();
        assert_eq!(r.approve().unwrap_err(), ReviewError::AlreadyReviewed);
        assert_eq!(r.state, ReviewState::Amended);
    }

    #[test]
    fn amend_after_approve_is_rejected() {
        let mut r = review();
        r.approve().unwrap();
        assert_eq!(
            r.amend("Communication", 60, "second thoughts").unwrap_err(),
            ReviewError::AlreadyReviewed
        );
        assert_eq!(r.state, ReviewState::Approved);
        assert!(r.scores[1].admin_override.is_none());
    }

    #[test]
    fn repeated_amendments_are_allowed() {
        let mut r = review();
        r.amend("Communication", 60, "rationale cites the wrong submission")
            .unwrap();
        r.amend("Problem solving", 78, "partial credit for the bonus task")
            .unwrap();
        assert_eq!(r.state, ReviewState::Amended);
        assert_eq!(r.scores[0].effective_score(), 78);
        assert_eq!(r.scores[1].effective_score(), 60);
    }

    #[test]
    fn lock_from_pending_is_blocked() {
        let mut r = review();
        assert_eq!(
            r.lock(CandidateAction::Reject).unwrap_err(),
            ReviewError::NotReviewed
        );
        assert_eq!(r.state, ReviewState::Pending);
    }

    #[test]
    fn locked_is_absorbing() {
        let mut r = review();
        r.approve().unwrap();
        r.lock(CandidateAction::Match).unwrap();

        assert_eq!(r.approve().unwrap_err(), ReviewError::Locked);
        assert_eq!(
            r.amend("Communication", 50, "late edit").unwrap_err(),
            ReviewError::Locked
        );
        assert_eq!(
            r.lock(CandidateAction::Reject).unwrap_err(),
            ReviewError::Locked
        );
        assert_eq!(r.state, ReviewState::Locked(CandidateAction::Match));
    }

    #[test]
    fn interview_lock_asks_for_scheduling_while_others_confirm() {
        let mut r = review();
        r.approve().unwrap();
        let outcome = r.lock(CandidateAction::Interview).unwrap();
        assert_eq!(outcome.follow_up, FollowUp::ScheduleInterview);
        assert_eq!(outcome.new_status, ApplicationStatus::InterviewScheduled);

        let mut r = review();
        r.amend("Communication", 68, "adjusted for rubric drift").unwrap();
        let outcome = r.lock(CandidateAction::Reject).unwrap();
        assert_eq!(outcome.follow_up, FollowUp::Confirmation);
        assert_eq!(outcome.new_status, ApplicationStatus::Rejected);
    }
}
