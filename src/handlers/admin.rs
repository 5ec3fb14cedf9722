use axum::{extract::State, response::Json};

use crate::{
    services::analytics::{pipeline_analytics, AnalyticsResponse},
    utils::logger::LOGGER,
    AppState,
};

pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    LOGGER.log_request("GET", "/admin/analytics", 200);
    Json(pipeline_analytics(&state.stores))
}
