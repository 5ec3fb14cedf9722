use axum::{
    extract::{Multipart, Query, State},
    response::Json,
};
use serde::Deserialize;
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::company::{CompanyProfileResponse, UpdateCompanyRequest},
    services::matching::role_match,
    utils::{errors::AppError, logger::LOGGER},
    AppState,
};

const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024; // 5MB

#[derive(Debug, Default, Deserialize)]
pub struct CompanyQuery {
    /// Viewing candidate; when present the open-role match scores are
    /// recomputed against that candidate's skills.
    pub candidate_id: Option<i32>,
}

pub async fn get_company(
    State(state): State<AppState>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<CompanyProfileResponse>, AppError> {
    let mut profile = state.stores.company.get()?;

    if let Some(candidate_id) = query.candidate_id {
        let candidate = state.stores.candidates.get(candidate_id)?;
        for role in &mut profile.open_roles {
            if let Ok(job) = state.stores.jobs.get(role.job_id) {
                role.match_score = role_match(&candidate, &job);
            }
        }
    }

    Ok(Json(CompanyProfileResponse::from(profile)))
}

pub async fn update_company(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyProfileResponse>, AppError> {
    payload.validate()?;
    let profile = state.stores.company.update(payload)?;
    Ok(Json(CompanyProfileResponse::from(profile)))
}

pub async fn upload_logo(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let url = store_image(&state, multipart).await?;
    state.stores.company.set_logo_url(url.clone())?;
    Ok(Json(serde_json::json!({ "url": url })))
}

pub async fn upload_cover(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let url = store_image(&state, multipart).await?;
    state.stores.company.set_cover_url(url.clone())?;
    Ok(Json(serde_json::json!({ "url": url })))
}

/// Pre-validation for an uploaded image: the declared MIME must be image/*,
/// the payload must fit the 5 MB ceiling, and the bytes themselves must
/// sniff as an image (the declared type is client-controlled). Returns the
/// extension to store the file under.
fn validate_image(declared_type: &str, data: &[u8]) -> Result<&'static str, AppError> {
    let declared: mime::Mime = declared_type
        .parse()
        .map_err(|_| AppError::BadRequest("Missing upload content type".to_string()))?;
    if declared.type_() != mime::IMAGE {
        return Err(AppError::UnsupportedMediaType(
            "Only image uploads are accepted".to_string(),
        ));
    }

    if data.len() > MAX_IMAGE_SIZE {
        return Err(AppError::PayloadTooLarge(
            "Images are limited to 5MB".to_string(),
        ));
    }

    let kind = infer::get(data)
        .ok_or_else(|| AppError::UnsupportedMediaType("Unrecognized file content".to_string()))?;
    if kind.matcher_type() != infer::MatcherType::Image {
        return Err(AppError::UnsupportedMediaType(
            "File content is not an image".to_string(),
        ));
    }
    Ok(kind.extension())
}

/// Reads the first file field, runs the image pre-validation, then writes
/// under UPLOAD_DIR.
async fn store_image(state: &AppState, mut multipart: Multipart) -> Result<String, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Malformed multipart body".to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let declared_type = field.content_type().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|_| AppError::BadRequest("Failed to read upload".to_string()))?;

        let extension = validate_image(&declared_type, &data)?;

        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let path = PathBuf::from(&state.upload_dir).join(&filename);
        fs::write(&path, &data).await.map_err(|e| {
            LOGGER.log_error(
                &format!("failed to store upload: {}", e),
                [(
                    "path".to_string(),
                    serde_json::Value::String(path.display().to_string()),
                )]
                .iter()
                .cloned()
                .collect(),
            );
            AppError::InternalServerError("Failed to store upload".to_string())
        })?;

        LOGGER.log_business_event(
            "company_image_uploaded",
            None,
            [(
                "bytes".to_string(),
                serde_json::Value::Number(serde_json::Number::from(data.len())),
            )]
            .iter()
            .cloned()
            .collect(),
        );
        return Ok(format!("/uploads/{}", filename));
    }

    Err(AppError::BadRequest("No file field in upload".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Stores;
    use pretty_assertions::assert_eq;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn oversize_payload_is_rejected_before_sniffing() {
        let mut data = PNG_MAGIC.to_vec();
        data.resize(MAX_IMAGE_SIZE + 1, 0);
        let result = validate_image("image/png", &data);
        assert!(matches!(result, Err(AppError::PayloadTooLarge(_))));
    }

    #[test]
    fn payload_at_the_ceiling_passes_the_size_gate() {
        let mut data = PNG_MAGIC.to_vec();
        data.resize(MAX_IMAGE_SIZE, 0);
        assert_eq!(validate_image("image/png", &data).unwrap(), "png");
    }

    #[test]
    fn non_image_declared_type_is_rejected() {
        let result = validate_image("application/pdf", PNG_MAGIC);
        assert!(matches!(result, Err(AppError::UnsupportedMediaType(_))));
    }

    #[test]
    fn bytes_that_do_not_sniff_as_an_image_are_rejected() {
        // gzip magic, well-formed but not an image
        let result = validate_image("image/png", &[0x1F, 0x8B, 0x08, 0x00]);
        assert!(matches!(result, Err(AppError::UnsupportedMediaType(_))));

        // bytes infer cannot classify at all
        let result = validate_image("image/png", b"plain text payload");
        assert!(matches!(result, Err(AppError::UnsupportedMediaType(_))));
    }

    #[test]
    fn missing_content_type_is_a_bad_request() {
        let result = validate_image("", PNG_MAGIC);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn open_role_scores_are_recomputed_for_a_viewing_candidate() {
        let state = AppState {
            stores: Stores::seeded(),
            upload_dir: "/tmp".to_string(),
        };

        // candidate 20 covers every required and preferred skill of job 1
        let Json(body) = get_company(
            State(state.clone()),
            Query(CompanyQuery {
                candidate_id: Some(20),
            }),
        )
        .await
        .unwrap();
        let backend = body
            .profile
            .open_roles
            .iter()
            .find(|r| r.job_id == 1)
            .unwrap();
        assert_eq!(backend.match_score, 100);

        // without a viewer the stored scores are served as-is
        let Json(body) = get_company(State(state), Query(CompanyQuery::default()))
            .await
            .unwrap();
        let backend = body
            .profile
            .open_roles
            .iter()
            .find(|r| r.job_id == 1)
            .unwrap();
        assert_eq!(backend.match_score, 92);
    }
}
