pub mod fixtures;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use chrono::Utc;
use thiserror::Error;

use crate::models::assessment::AssessmentReview;
use crate::models::candidate::{ApplicationStatus, Candidate};
use crate::models::company::{CompanyProfile, UpdateCompanyRequest};
use crate::models::interview::{
    Interview, InterviewStatus, ScheduleInterviewRequest, UpdateInterviewRequest,
};
use crate::models::job::{CreateJobRequest, JobPosting};
use crate::models::mentor::Mentor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("store lock poisoned")]
    Poisoned,
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        StoreError::Poisoned
    }
}

/// In-memory repository adapters. The UI layer never owns domain
/// collections; reads hand out clones (copy-on-read) and every mutation
/// goes through a dedicated write method. Last write wins, single-admin
/// assumption.
#[derive(Clone, Default)]
pub struct Stores {
    pub jobs: JobStore,
    pub candidates: CandidateStore,
    pub interviews: InterviewStore,
    pub company: CompanyStore,
    pub mentors: MentorStore,
}

impl Stores {
    pub fn seeded() -> Self {
        let stores = Self::default();
        for job in fixtures::jobs() {
            stores.jobs.put(job);
        }
        for candidate in fixtures::candidates() {
            stores.candidates.put(candidate);
        }
        for review in fixtures::reviews() {
            stores.candidates.put_review(review);
        }
        for mentor in fixtures::mentors() {
            stores.mentors.put(mentor);
        }
        stores.company.replace(fixtures::company_profile());
        stores
    }
}

#[derive(Clone, Default)]
pub struct JobStore {
    inner: Arc<RwLock<HashMap<i32, JobPosting>>>,
    saved: Arc<RwLock<HashSet<i32>>>,
}

impl JobStore {
    pub fn list(&self) -> Vec<JobPosting> {
        let mut jobs: Vec<JobPosting> = match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => Vec::new(),
        };
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        jobs
    }

    pub fn get(&self, id: i32) -> Result<JobPosting, StoreError> {
        self.inner
            .read()?
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("job"))
    }

    pub fn create(&self, request: CreateJobRequest) -> Result<JobPosting, StoreError> {
        let mut map = self.inner.write()?;
        let id = map.keys().max().copied().unwrap_or(0) + 1;
        let job = JobPosting {
            id,
            title: request.title,
            company: request.company,
            location: request.location,
            work_arrangement: request.work_arrangement,
            employment_type: request.employment_type,
            compensation: request.compensation,
            benefits: request.benefits,
            description: request.description,
            responsibilities: request.responsibilities,
            requirements: request.requirements,
            required_skills: request.required_skills,
            preferred_skills: request.preferred_skills,
            required_traits: request.required_traits,
            preferred_traits: request.preferred_traits,
            tier: request.tier,
            has_skills_challenge: request.has_skills_challenge,
            application_deadline: request.application_deadline,
            created_at: Utc::now(),
        };
        map.insert(id, job.clone());
        Ok(job)
    }

    pub fn put(&self, job: JobPosting) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(job.id, job);
        }
    }

    /// Returns the new saved flag for the job.
    pub fn toggle_saved(&self, id: i32) -> Result<bool, StoreError> {
        // validate existence first so unknown ids stay a 404
        self.get(id)?;
        let mut saved = self.saved.write()?;
        if saved.remove(&id) {
            Ok(false)
        } else {
            saved.insert(id);
            Ok(true)
        }
    }

    pub fn is_saved(&self, id: i32) -> bool {
        self.saved.read().map(|s| s.contains(&id)).unwrap_or(false)
    }

    pub fn saved_jobs(&self) -> Vec<JobPosting> {
        self.list()
            .into_iter()
            .filter(|job| self.is_saved(job.id))
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct CandidateStore {
    inner: Arc<RwLock<HashMap<i32, Candidate>>>,
    reviews: Arc<RwLock<HashMap<i32, AssessmentReview>>>,
}

impl CandidateStore {
    pub fn list(&self) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => Vec::new(),
        };
        candidates.sort_by_key(|c| c.id);
        candidates
    }

    pub fn get(&self, id: i32) -> Result<Candidate, StoreError> {
        self.inner
            .read()?
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("candidate"))
    }

    pub fn put(&self, candidate: Candidate) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(candidate.id, candidate);
        }
    }

    pub fn set_status(&self, id: i32, status: ApplicationStatus) -> Result<Candidate, StoreError> {
        let mut map = self.inner.write()?;
        let candidate = map.get_mut(&id).ok_or(StoreError::NotFound("candidate"))?;
        candidate.status = status;
        Ok(candidate.clone())
    }

    pub fn review(&self, candidate_id: i32) -> Result<AssessmentReview, StoreError> {
        self.reviews
            .read()?
            .get(&candidate_id)
            .cloned()
            .ok_or(StoreError::NotFound("assessment review"))
    }

    pub fn put_review(&self, review: AssessmentReview) {
        if let Ok(mut map) = self.reviews.write() {
            map.insert(review.candidate_id, review);
        }
    }
}

#[derive(Clone, Default)]
pub struct InterviewStore {
    inner: Arc<RwLock<HashMap<i32, Interview>>>,
}

impl InterviewStore {
    pub fn list(&self) -> Vec<Interview> {
        let mut interviews: Vec<Interview> = match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => Vec::new(),
        };
        interviews.sort_by_key(|i| i.id);
        interviews
    }

    pub fn get(&self, id: i32) -> Result<Interview, StoreError> {
        self.inner
            .read()?
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound("interview"))
    }

    pub fn schedule(&self, request: ScheduleInterviewRequest) -> Result<Interview, StoreError> {
        let mut map = self.inner.write()?;
        let id = map.keys().max().copied().unwrap_or(0) + 1;
        let now = Utc::now();
        let interview = Interview {
            id,
            candidate_id: request.candidate_id,
            job_id: request.job_id,
            scheduled_at: request.scheduled_at,
            duration_minutes: 60,
            format: request.format,
            participants: request.participants,
            notes: request.notes,
            status: InterviewStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        map.insert(id, interview.clone());
        Ok(interview)
    }

    pub fn update(
        &self,
        id: i32,
        request: UpdateInterviewRequest,
    ) -> Result<Interview, StoreError> {
        let mut map = self.inner.write()?;
        let interview = map.get_mut(&id).ok_or(StoreError::NotFound("interview"))?;
        if let Some(scheduled_at) = request.scheduled_at {
            interview.scheduled_at = scheduled_at;
        }
        if let Some(participants) = request.participants {
            interview.participants = participants;
        }
        if let Some(notes) = request.notes {
            interview.notes = notes;
        }
        if let Some(status) = request.status {
            interview.status = status;
        }
        interview.updated_at = Utc::now();
        Ok(interview.clone())
    }
}

#[derive(Clone, Default)]
pub struct CompanyStore {
    inner: Arc<RwLock<Option<CompanyProfile>>>,
}

impl CompanyStore {
    pub fn get(&self) -> Result<CompanyProfile, StoreError> {
        self.inner
            .read()?
            .clone()
            .ok_or(StoreError::NotFound("company profile"))
    }

    pub fn replace(&self, profile: CompanyProfile) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(profile);
        }
    }

    pub fn update(&self, patch: UpdateCompanyRequest) -> Result<CompanyProfile, StoreError> {
        let mut slot = self.inner.write()?;
        let profile = slot.as_mut().ok_or(StoreError::NotFound("company profile"))?;
        if let Some(name) = patch.name {
            profile.name = name;
        }
        if let Some(tagline) = patch.tagline {
            profile.tagline = tagline;
        }
        if let Some(about) = patch.about {
            profile.about = about;
        }
        if let Some(website) = patch.website {
            profile.website = website;
        }
        if let Some(industry) = patch.industry {
            profile.industry = industry;
        }
        if let Some(employee_count) = patch.employee_count {
            profile.employee_count = employee_count;
        }
        if let Some(benefits) = patch.benefits {
            profile.benefits = benefits;
        }
        if let Some(values) = patch.values {
            profile.values = values;
        }
        Ok(profile.clone())
    }

    pub fn set_logo_url(&self, url: String) -> Result<CompanyProfile, StoreError> {
        let mut slot = self.inner.write()?;
        let profile = slot.as_mut().ok_or(StoreError::NotFound("company profile"))?;
        profile.logo_url = Some(url);
        Ok(profile.clone())
    }

    pub fn set_cover_url(&self, url: String) -> Result<CompanyProfile, StoreError> {
        let mut slot = self.inner.write()?;
        let profile = slot.as_mut().ok_or(StoreError::NotFound("company profile"))?;
        profile.cover_url = Some(url);
        Ok(profile.clone())
    }
}

#[derive(Clone, Default)]
pub struct MentorStore {
    inner: Arc<RwLock<Vec<Mentor>>>,
}

impl MentorStore {
    pub fn list(&self) -> Vec<Mentor> {
        self.inner.read().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn put(&self, mentor: Mentor) {
        if let Ok(mut list) = self.inner.write() {
            list.push(mentor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_ids_surface_as_not_found() {
        let stores = Stores::seeded();
        assert_eq!(
            stores.candidates.get(9999).unwrap_err(),
            StoreError::NotFound("candidate")
        );
        assert_eq!(stores.jobs.get(9999).unwrap_err(), StoreError::NotFound("job"));
    }

    #[test]
    fn toggle_saved_flips_and_flips_back() {
        let stores = Stores::seeded();
        let job_id = stores.jobs.list()[0].id;

        assert!(stores.jobs.toggle_saved(job_id).unwrap());
        assert!(stores.jobs.is_saved(job_id));
        assert_eq!(stores.jobs.saved_jobs().len(), 1);
        assert!(!stores.jobs.toggle_saved(job_id).unwrap());
        assert!(stores.jobs.saved_jobs().is_empty());
    }

    #[test]
    fn list_hands_out_copies_not_live_references() {
        let stores = Stores::seeded();
        let mut copy = stores.candidates.list();
        copy[0].name = "mutated locally".to_string();

        let fresh = stores.candidates.list();
        assert_ne!(fresh[0].name, "mutated locally");
    }

    #[test]
    fn every_seeded_candidate_has_a_pending_review() {
        let stores = Stores::seeded();
        for candidate in stores.candidates.list() {
            let review = stores.candidates.review(candidate.id).unwrap();
            assert_eq!(review.candidate_id, candidate.id);
        }
    }
}
