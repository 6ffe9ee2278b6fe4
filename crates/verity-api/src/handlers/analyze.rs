use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use verity_core::AnalyzeResponse;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::DetectionService;
use crate::state::AppState;
use crate::utils::upload::extract_image_field;

/// Analyze an uploaded image
///
/// Stores the `image` field of the multipart form under a generated key and
/// returns the heuristic score and label.
///
/// # Errors
/// - `AppError::MissingUpload` - no `image` field in the form
/// - `AppError::InvalidInput` - malformed form or more than one `image` field
/// - `AppError::PayloadTooLarge` - file exceeds the configured size limit
/// - `AppError::UnreadableImage` - the file does not decode as an image
/// - `AppError::Storage` - the file could not be persisted
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Form with a file field named `image`"),
    responses(
        (status = 200, description = "Image stored and classified", body = AnalyzeResponse),
        (status = 400, description = "No image uploaded or invalid form", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 422, description = "File is not a readable image", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "analyze_image"))]
pub async fn analyze_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, HttpAppError> {
    let upload = extract_image_field(multipart).await?;

    tracing::debug!(
        filename = %upload.filename,
        content_type = %upload.content_type,
        size_bytes = upload.data.len(),
        "Received upload"
    );

    let response = DetectionService::new(&state).analyze(upload).await?;

    Ok(Json(response))
}
