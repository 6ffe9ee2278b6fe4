//! Multipart extraction and upload checks for the analyze handler

use axum::extract::{multipart::MultipartError, Multipart};
use axum::http::StatusCode;
use verity_core::AppError;

use crate::constants::IMAGE_FIELD;

/// An uploaded file as received from the client
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    /// Client-supplied name; metadata only, never used as a path
    pub filename: String,
    pub content_type: String,
}

fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{}: request body too large", context))
    } else {
        AppError::InvalidInput(format!("{}: {}", context, err.body_text()))
    }
}

/// Extract the `image` field from a multipart form.
///
/// Other fields, and `image` parts without a filename, are drained and
/// ignored. A second `image` file is rejected;
/// a form without one yields `AppError::MissingUpload`.
pub async fn extract_image_field(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart", e))?
    {
        // Only file parts count; a plain text field named `image` is ignored
        if field.name() != Some(IMAGE_FIELD) || field.file_name().is_none() {
            continue;
        }

        if upload.is_some() {
            return Err(AppError::InvalidInput(format!(
                "Multiple '{}' fields are not allowed; send exactly one",
                IMAGE_FIELD
            )));
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file data", e))?;

        upload = Some(UploadedFile {
            data: data.to_vec(),
            filename,
            content_type,
        });
    }

    upload.ok_or(AppError::MissingUpload)
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} bytes",
            max_size
        )));
    }
    Ok(())
}

/// Content type to serve a stored object with, from its key's extension.
pub fn content_type_for_key(storage_key: &str) -> &'static str {
    let extension = storage_key
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/x-icon",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
