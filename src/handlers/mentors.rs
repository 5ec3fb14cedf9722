use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::{
    models::{candidate::DiscProfile, mentor::MentorMatchResponse},
    services::matching::mentor_match,
    AppState,
};

/// The viewer's own DISC vector plus optional comma-separated industries.
#[derive(Debug, Deserialize)]
pub struct MentorQuery {
    pub red: u8,
    pub yellow: u8,
    pub green: u8,
    pub blue: u8,
    pub industries: Option<String>,
}

pub async fn get_mentors(
    State(state): State<AppState>,
    Query(query): Query<MentorQuery>,
) -> Json<Vec<MentorMatchResponse>> {
    let viewer = DiscProfile {
        red: query.red,
        yellow: query.yellow,
        green: query.green,
        blue: query.blue,
    };
    let industries: Vec<String> = query
        .industries
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    let mut ranked: Vec<MentorMatchResponse> = state
        .stores
        .mentors
        .list()
        .into_iter()
        .map(|mentor| {
            let compatibility = mentor_match(&viewer, &industries, &mentor);
            MentorMatchResponse {
                mentor,
                compatibility,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));
    Json(ranked)
}
