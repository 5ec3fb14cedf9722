use serde::{Deserialize, Serialize};
use validator::Validate;

/// Five candidate-experience sub-scores, each on a 0.0..=5.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompanyRatings {
    pub communication: f64,
    pub interview_process: f64,
    pub onboarding: f64,
    pub culture: f64,
    pub transparency: f64,
}

impl CompanyRatings {
    pub fn overall(&self) -> f64 {
        (self.communication
            + self.interview_process
            + self.onboarding
            + self.culture
            + self.transparency)
            / 5.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRole {
    pub job_id: i32,
    pub title: String,
    pub match_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub tagline: String,
    pub about: String,
    pub website: String,
    pub industry: String,
    pub employee_count: u32,
    pub ratings: CompanyRatings,
    pub benefits: Vec<String>,
    pub values: Vec<String>,
    pub open_roles: Vec<OpenRole>,
    pub logo_url: Option<String>,
    pub cover_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompanyProfileResponse {
    #[serde(flatten)]
    pub profile: CompanyProfile,
    pub overall_rating: f64,
}

impl From<CompanyProfile> for CompanyProfileResponse {
    fn from(profile: CompanyProfile) -> Self {
        let overall_rating = profile.ratings.overall();
        Self {
            profile,
            overall_rating,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub about: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub industry: Option<String>,
    pub employee_count: Option<u32>,
    pub benefits: Option<Vec<String>>,
    pub values: Option<Vec<String>>,
}
