//! Image processor - decode and dimension probe

use image::GenericImageView;
use image::ImageReader;
use std::io::Cursor;
use std::path::Path;
use verity_core::ImageFacts;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The bytes are not an image the decoder understands
    #[error("{0}")]
    Unreadable(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode task failed: {0}")]
    TaskFailed(String),
}

impl From<image::ImageError> for ProbeError {
    fn from(err: image::ImageError) -> Self {
        ProbeError::Unreadable(err.to_string())
    }
}

pub struct ImageProcessor;

impl ImageProcessor {
    /// Decode `data` and return its pixel dimensions.
    pub fn dimensions(data: &[u8]) -> Result<(u32, u32), ProbeError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ProbeError::Unreadable(e.to_string()))?;

        if reader.format().is_none() {
            return Err(ProbeError::Unreadable(
                "Unrecognized image format".to_string(),
            ));
        }

        let img = reader.decode()?;
        Ok(img.dimensions())
    }

    /// Decoded facts the classifier needs.
    pub fn probe(data: &[u8]) -> Result<ImageFacts, ProbeError> {
        let (width, height) = Self::dimensions(data)?;
        Ok(ImageFacts::new(data.len() as u64, width, height))
    }

    /// [`probe`](Self::probe) on the blocking pool.
    pub async fn probe_blocking(data: Vec<u8>) -> Result<ImageFacts, ProbeError> {
        let start = std::time::Instant::now();
        let facts = tokio::task::spawn_blocking(move || Self::probe(&data))
            .await
            .map_err(|e| ProbeError::TaskFailed(e.to_string()))??;

        tracing::debug!(
            width = facts.width,
            height = facts.height,
            byte_len = facts.byte_len,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Image decoded"
        );

        Ok(facts)
    }

    /// Read and probe a local file.
    pub fn probe_file(path: &Path) -> Result<ImageFacts, ProbeError> {
        let data = std::fs::read(path).map_err(|source| ProbeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::probe(&data)
    }
}
