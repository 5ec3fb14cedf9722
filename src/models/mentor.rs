use serde::{Deserialize, Serialize};

use crate::models::candidate::DiscProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentor {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub company: String,
    pub specialties: Vec<String>,
    pub industries: Vec<String>,
    pub disc: DiscProfile,
    pub years_experience: u8,
    pub bio: String,
}

/// Directory entry ranked against the viewer's own profile.
#[derive(Debug, Serialize)]
pub struct MentorMatchResponse {
    #[serde(flatten)]
    pub mentor: Mentor,
    pub compatibility: u8,
}
