use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::content_type_for_key;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use futures::StreamExt;
use std::sync::Arc;
use verity_core::AppError;
use verity_storage::validate_storage_key;

#[utoipa::path(
    get,
    path = "/uploads/{key}",
    tag = "uploads",
    params(
        ("key" = String, Path, description = "Storage key returned as the file name of `saved_path`")
    ),
    responses(
        (status = 200, description = "Stored file", content_type = "application/octet-stream"),
        (status = 400, description = "Invalid storage key", body = ErrorResponse),
        (status = 404, description = "Upload not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_upload(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    validate_storage_key(&key)?;

    let content_length = state.storage.content_length(&key).await?;
    let stream = state.storage.download_stream(&key).await?;

    let body_stream = stream.map(|result| {
        result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e)))
    });

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for_key(&key))
        .header(header::CONTENT_LENGTH, content_length)
        .header(header::CACHE_CONTROL, "public, max-age=31536000, immutable")
        .body(Body::from_stream(body_stream))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            AppError::Internal(e.to_string()).into()
        })
}
