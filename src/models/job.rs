use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkArrangement {
    Onsite,
    Hybrid,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    Hourly,
    Monthly,
    Yearly,
}

/// Subscription level gating optional features (skills challenge,
/// behavioral assessment, AI suggestions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Basic,
    Premium,
    Enterprise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Compensation {
    #[validate(range(min = 1))]
    pub min: u32,
    #[validate(range(min = 1))]
    pub max: u32,
    #[validate(length(min = 3, max = 3))]
    pub currency: String,
    pub period: PayPeriod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub work_arrangement: WorkArrangement,
    pub employment_type: EmploymentType,
    pub compensation: Compensation,
    pub benefits: Vec<String>,
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub required_traits: Vec<String>,
    pub preferred_traits: Vec<String>,
    pub tier: Tier,
    pub has_skills_challenge: bool,
    pub application_deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Aggregated payload the job wizard submits from its terminal step.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub work_arrangement: WorkArrangement,
    pub employment_type: EmploymentType,
    #[validate]
    pub compensation: Compensation,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub responsibilities: String,
    #[serde(default)]
    pub requirements: String,
    #[validate(length(min = 1))]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub required_traits: Vec<String>,
    #[serde(default)]
    pub preferred_traits: Vec<String>,
    pub tier: Tier,
    #[serde(default)]
    pub has_skills_challenge: bool,
    pub application_deadline: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    #[serde(flatten)]
    pub job: JobPosting,
    pub saved: bool,
}
