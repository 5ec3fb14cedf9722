use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;

use crate::models::candidate::Candidate;
use crate::models::interview::{Interview, InterviewStatus};
use crate::store::Stores;
use crate::utils::logger::LOGGER;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub total_jobs: usize,
    pub total_candidates: usize,
    pub status_breakdown: HashMap<String, usize>,
    pub average_match_score: f64,
    pub interview_stats: InterviewStats,
    pub hire_rate_percent: f64,
}

#[derive(Debug, Serialize)]
pub struct InterviewStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

/// Pipeline dashboard derived in full from the current store contents.
pub fn pipeline_analytics(stores: &Stores) -> AnalyticsResponse {
    let start = Instant::now();

    let candidates = stores.candidates.list();
    let interviews = stores.interviews.list();
    let total_jobs = stores.jobs.list().len();

    let response = AnalyticsResponse {
        total_jobs,
        total_candidates: candidates.len(),
        status_breakdown: status_breakdown(&candidates),
        average_match_score: average_match_score(&candidates),
        interview_stats: interview_stats(&interviews),
        hire_rate_percent: hire_rate(&candidates),
    };

    LOGGER.log_performance_metric(
        "analytics_total_duration",
        start.elapsed().as_millis() as f64,
        HashMap::new(),
    );
    response
}

fn status_breakdown(candidates: &[Candidate]) -> HashMap<String, usize> {
    let mut breakdown = HashMap::new();
    for candidate in candidates {
        *breakdown
            .entry(candidate.status.as_str().to_string())
            .or_insert(0) += 1;
    }
    breakdown
}

fn average_match_score(candidates: &[Candidate]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let sum: u32 = candidates.iter().map(|c| c.match_score as u32).sum();
    sum as f64 / candidates.len() as f64
}

fn interview_stats(interviews: &[Interview]) -> InterviewStats {
    let count = |status: InterviewStatus| interviews.iter().filter(|i| i.status == status).count();
    InterviewStats {
        total: interviews.len(),
        confirmed: count(InterviewStatus::Confirmed),
        pending: count(InterviewStatus::Pending),
        cancelled: count(InterviewStatus::Cancelled),
    }
}

fn hire_rate(candidates: &[Candidate]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let hired = candidates
        .iter()
        .filter(|c| c.status == crate::models::candidate::ApplicationStatus::Hired)
        .count();
    (hired as f64 / candidates.len() as f64) * 100.0
}
