use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::pricing::{
    classify, needs_consultation, simplified_price, ContractKind, HiringVolume,
};

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub contract_kind: ContractKind,
    pub duration_months: u32,
    pub employee_count: u32,
    pub hiring_volume: HiringVolume,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum QuoteResponse {
    Quote {
        price: u32,
        classified_as: ContractKind,
    },
    /// Larger companies and 5+ hiring volumes are handled manually.
    Consultation {
        redirect: &'static str,
    },
}

pub async fn get_quote(Json(payload): Json<QuoteRequest>) -> Json<QuoteResponse> {
    if needs_consultation(payload.employee_count, payload.hiring_volume) {
        return Json(QuoteResponse::Consultation {
            redirect: "/consultation",
        });
    }

    Json(QuoteResponse::Quote {
        price: simplified_price(payload.contract_kind, payload.duration_months),
        classified_as: classify(payload.duration_months),
    })
}
