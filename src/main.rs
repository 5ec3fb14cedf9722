mod handlers;
mod models;
mod services;
mod store;
mod utils;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::env;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::handlers::{admin, candidates, company, interviews, jobs, mentors, pricing};
use crate::store::Stores;

#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub upload_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talent_match_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "./storage/uploads".to_string());
    if let Err(e) = std::fs::create_dir_all(&upload_dir) {
        tracing::warn!("Failed to create upload directory {}: {}", upload_dir, e);
    }

    let state = AppState {
        stores: Stores::seeded(),
        upload_dir,
    };

    let cors_origin =
        env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let cors = if cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(axum::http::header::HeaderValue::from_static("*"))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    } else {
        CorsLayer::new()
            .allow_origin(cors_origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/jobs", get(jobs::get_jobs))
        .route("/jobs", post(jobs::create_job))
        .route("/jobs/:id", get(jobs::get_job))
        .route("/jobs/draft/validate", post(jobs::validate_draft))
        .route("/jobs/draft", post(jobs::submit_draft))
        .route("/saved-jobs", get(jobs::get_saved_jobs))
        .route("/saved-jobs/:job_id", post(jobs::toggle_saved_job))
        .route("/candidates", get(candidates::get_candidates))
        .route("/candidates/:id", get(candidates::get_candidate))
        .route(
            "/candidates/:id/assessment",
            get(candidates::get_assessment),
        )
        .route(
            "/candidates/:id/assessment/approve",
            post(candidates::approve_assessment),
        )
        .route(
            "/candidates/:id/assessment/amend",
            post(candidates::amend_assessment),
        )
        .route("/candidates/:id/action", post(candidates::candidate_action))
        .route("/interviews", post(interviews::schedule_interview))
        .route("/interviews/:id", get(interviews::get_interview))
        .route("/interviews/:id", put(interviews::update_interview))
        .route(
            "/interviews/:id/calendar",
            get(interviews::export_calendar),
        )
        .route("/company", get(company::get_company))
        .route("/company", put(company::update_company))
        .route("/company/logo", post(company::upload_logo))
        .route("/company/cover", post(company::upload_cover))
        .route("/mentors", get(mentors::get_mentors))
        .route("/pricing/quote", post(pricing::get_quote))
        .route("/admin/analytics", get(admin::get_analytics))
        .layer(cors)
        .layer(DefaultBodyLimit::max(
            env::var("MAX_REQUEST_BODY_MB")
                .unwrap_or_else(|_| "16".to_string())
                .parse::<usize>()
                .unwrap_or(16)
                * 1024
                * 1024,
        ))
        .with_state(state);

    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
