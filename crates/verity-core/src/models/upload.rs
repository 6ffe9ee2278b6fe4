use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::classification::{ClassificationResult, Verdict};

/// A persisted upload. The client filename is kept only as metadata; the
/// file itself lives under the generated `storage_key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub file_id: Uuid,
    pub original_filename: String,
    pub content_type: String,
    pub storage_key: String,
    /// Backend-specific location (a filesystem path for local storage)
    pub location: String,
    pub size_bytes: u64,
}

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub file_id: Uuid,
    /// Client-supplied filename, echoed back verbatim
    pub filename: String,
    /// Where the upload was persisted
    pub saved_path: String,
    #[schema(minimum = 0, maximum = 100)]
    pub score: u8,
    pub result: Verdict,
}

impl AnalyzeResponse {
    pub fn new(upload: &StoredUpload, classification: ClassificationResult) -> Self {
        Self {
            file_id: upload.file_id,
            filename: upload.original_filename.clone(),
            saved_path: upload.location.clone(),
            score: classification.score,
            result: classification.verdict,
        }
    }
}
