use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::job::{
    Compensation, CreateJobRequest, EmploymentType, Tier, WorkArrangement,
};

/// Ordered sections of the job-authoring flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    Description,
    Skills,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::Description,
        WizardStep::Skills,
        WizardStep::Review,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Partially-filled posting accumulated across steps. Nothing here touches
/// a store until the terminal submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub work_arrangement: Option<WorkArrangement>,
    pub employment_type: Option<EmploymentType>,
    pub compensation: Option<Compensation>,
    pub benefits: Vec<String>,
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub required_traits: Vec<String>,
    pub preferred_traits: Vec<String>,
    pub tier: Option<Tier>,
    pub has_skills_challenge: bool,
    pub application_deadline: Option<chrono::NaiveDate>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("step {0:?} has missing required fields")]
    IncompleteStep(WizardStep),
    #[error("submit is only permitted from the review step")]
    NotAtReviewStep,
}

/// Step-gated form controller: forward navigation is blocked until the
/// active step's required fields are populated; the draft is submitted
/// whole from the terminal step only.
#[derive(Debug, Clone, Default)]
pub struct JobWizard {
    current: usize,
    pub draft: JobDraft,
}

impl JobWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a draft at the first step, e.g. one posted back by a client.
    pub fn with_draft(draft: JobDraft) -> Self {
        Self { current: 0, draft }
    }

    pub fn current_step(&self) -> WizardStep {
        WizardStep::ALL[self.current]
    }

    /// Pure predicate over the draft; no side effects.
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        let d = &self.draft;
        match step {
            WizardStep::BasicInfo => {
                !d.title.trim().is_empty()
                    && !d.location.trim().is_empty()
                    && d.work_arrangement.is_some()
                    && d.employment_type.is_some()
            }
            WizardStep::Description => {
                !d.description.trim().is_empty() && !d.responsibilities.trim().is_empty()
            }
            WizardStep::Skills => !d.required_skills.is_empty(),
            // the review step also demands the fields no earlier step gates
            // on, so a submit can always aggregate a complete posting
            WizardStep::Review => {
                WizardStep::ALL[..WizardStep::Review.index()]
                    .iter()
                    .all(|s| self.is_step_valid(*s))
                    && d.compensation.is_some()
                    && d.tier.is_some()
            }
        }
    }

    /// Advances one step if the active step validates; capped at Review.
    /// Invalid steps leave the index untouched (the affordance stays
    /// disabled, nothing is surfaced).
    pub fn next(&mut self) -> WizardStep {
        if self.is_step_valid(self.current_step()) && self.current + 1 < WizardStep::ALL.len() {
            self.current += 1;
        }
        self.current_step()
    }

    /// Floored at the first step.
    pub fn previous(&mut self) -> WizardStep {
        self.current = self.current.saturating_sub(1);
        self.current_step()
    }

    /// Packages the draft into a single create request. Only permitted at
    /// the terminal step with every section valid; failure leaves the
    /// draft untouched so submit is retryable.
    pub fn submit(&self) -> Result<CreateJobRequest, WizardError> {
        if self.current_step() != WizardStep::Review {
            return Err(WizardError::NotAtReviewStep);
        }
        for step in WizardStep::ALL {
            if !self.is_step_valid(step) {
                return Err(WizardError::IncompleteStep(step));
            }
        }

        let d = self.draft.clone();
        Ok(CreateJobRequest {
            title: d.title,
            company: d.company,
            location: d.location,
            // checked by is_step_valid above
            work_arrangement: d.work_arrangement.ok_or(WizardError::IncompleteStep(
                WizardStep::BasicInfo,
            ))?,
            employment_type: d.employment_type.ok_or(WizardError::IncompleteStep(
                WizardStep::BasicInfo,
            ))?,
            compensation: d
                .compensation
                .ok_or(WizardError::IncompleteStep(WizardStep::Review))?,
            benefits: d.benefits,
            description: d.description,
            responsibilities: d.responsibilities,
            requirements: d.requirements,
            required_skills: d.required_skills,
            preferred_skills: d.preferred_skills,
            required_traits: d.required_traits,
            preferred_traits: d.preferred_traits,
            tier: d.tier.ok_or(WizardError::IncompleteStep(WizardStep::Review))?,
            has_skills_challenge: d.has_skills_challenge,
            application_deadline: d.application_deadline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_basic_info(wizard: &mut JobWizard) {
        wizard.draft.title = "Backend Engineer".to_string();
        wizard.draft.location = "Stockholm".to_string();
        wizard.draft.work_arrangement = Some(WorkArrangement::Hybrid);
        wizard.draft.employment_type = Some(EmploymentType::FullTime);
    }

    fn filled_description(wizard: &mut JobWizard) {
        wizard.draft.description = "We build hiring tools.".to_string();
        wizard.draft.responsibilities = "Own the matching service.".to_string();
    }

    #[test]
    fn basic_info_invalid_while_any_required_field_is_empty() {
        let mut wizard = JobWizard::new();
        assert!(!wizard.is_step_valid(WizardStep::BasicInfo));

        wizard.draft.title = "Backend Engineer".to_string();
        wizard.draft.location = "Stockholm".to_string();
        wizard.draft.work_arrangement = Some(WorkArrangement::Remote);
        assert!(!wizard.is_step_valid(WizardStep::BasicInfo));

        wizard.draft.employment_type = Some(EmploymentType::FullTime);
        assert!(wizard.is_step_valid(WizardStep::BasicInfo));
    }

    #[test]
    fn whitespace_only_title_does_not_count_as_filled() {
        let mut wizard = JobWizard::new();
        filled_basic_info(&mut wizard);
        wizard.draft.title = "   ".to_string();
        assert!(!wizard.is_step_valid(WizardStep::BasicInfo));
    }

    #[test]
    fn next_is_a_no_op_while_the_active_step_is_invalid() {
        let mut wizard = JobWizard::new();
        assert_eq!(wizard.next(), WizardStep::BasicInfo);

        filled_basic_info(&mut wizard);
        assert_eq!(wizard.next(), WizardStep::Description);
        // description still empty, stuck here
        assert_eq!(wizard.next(), WizardStep::Description);
    }

    #[test]
    fn next_never_advances_past_the_review_step() {
        let mut wizard = JobWizard::new();
        filled_basic_info(&mut wizard);
        filled_description(&mut wizard);
        wizard.draft.required_skills = vec!["Rust".to_string()];

        assert_eq!(wizard.next(), WizardStep::Description);
        assert_eq!(wizard.next(), WizardStep::Skills);
        assert_eq!(wizard.next(), WizardStep::Review);
        assert_eq!(wizard.next(), WizardStep::Review);
    }

    #[test]
    fn previous_is_floored_at_the_first_step() {
        let mut wizard = JobWizard::new();
        assert_eq!(wizard.previous(), WizardStep::BasicInfo);
    }

    #[test]
    fn submit_rejected_before_the_review_step() {
        let wizard = JobWizard::new();
        assert_eq!(wizard.submit().unwrap_err(), WizardError::NotAtReviewStep);
    }

    #[test]
    fn submit_packages_the_whole_draft_from_review() {
        let mut wizard = JobWizard::new();
        filled_basic_info(&mut wizard);
        filled_description(&mut wizard);
        wizard.draft.company = "Acme".to_string();
        wizard.draft.required_skills = vec!["Rust".to_string(), "SQL".to_string()];
        wizard.draft.tier = Some(Tier::Premium);
        wizard.draft.compensation = Some(Compensation {
            min: 45_000,
            max: 60_000,
            currency: "EUR".to_string(),
            period: crate::models::job::PayPeriod::Yearly,
        });
        wizard.next();
        wizard.next();
        wizard.next();

        let request = wizard.submit().unwrap();
        assert_eq!(request.title, "Backend Engineer");
        assert_eq!(request.required_skills.len(), 2);
        assert_eq!(request.tier, Tier::Premium);
        // draft untouched, submit is retryable
        assert!(wizard.submit().is_ok());
    }
}
