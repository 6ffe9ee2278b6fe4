//! Store, decode and classify one upload.

use uuid::Uuid;
use verity_core::{AnalyzeResponse, ClassificationResult, StoredUpload};
use verity_processing::ImageProcessor;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{validate_file_size, UploadedFile};

pub struct DetectionService<'a> {
    state: &'a AppState,
}

impl<'a> DetectionService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Persist the upload under a generated key, decode the stored file and
    /// classify it. A file that does not decode is removed again.
    pub async fn analyze(&self, upload: UploadedFile) -> Result<AnalyzeResponse, HttpAppError> {
        validate_file_size(upload.data.len(), self.state.config.max_file_size_bytes)?;

        let stored = self.store(upload).await?;

        let classification = match self.classify_stored(&stored).await {
            Ok(classification) => classification,
            Err(err) => {
                self.discard(&stored).await;
                return Err(err);
            }
        };

        tracing::info!(
            file_id = %stored.file_id,
            filename = %stored.original_filename,
            score = classification.score,
            verdict = %classification.verdict,
            rule = %classification.rule,
            "Upload classified"
        );

        Ok(AnalyzeResponse::new(&stored, classification))
    }

    async fn store(&self, upload: UploadedFile) -> Result<StoredUpload, HttpAppError> {
        let file_id = Uuid::new_v4();
        let size_bytes = upload.data.len() as u64;

        let (storage_key, location) = self
            .state
            .storage
            .upload(file_id, &upload.filename, &upload.content_type, upload.data)
            .await?;

        Ok(StoredUpload {
            file_id,
            original_filename: upload.filename,
            content_type: upload.content_type,
            storage_key,
            location,
            size_bytes,
        })
    }

    async fn classify_stored(
        &self,
        stored: &StoredUpload,
    ) -> Result<ClassificationResult, HttpAppError> {
        let data = self.state.storage.download(&stored.storage_key).await?;
        let facts = ImageProcessor::probe_blocking(data).await?;

        Ok(self
            .state
            .classifier
            .classify(&stored.original_filename, &facts))
    }

    async fn discard(&self, stored: &StoredUpload) {
        if let Err(e) = self.state.storage.delete(&stored.storage_key).await {
            tracing::error!(
                error = %e,
                storage_key = %stored.storage_key,
                "Failed to remove undecodable upload"
            );
        }
    }
}
