use std::sync::Arc;

use axum::{extract::State, response::Html};
use verity_core::AppError;

use crate::constants::INDEX_FILE;
use crate::error::HttpAppError;
use crate::state::AppState;

/// Serve the landing page from the static directory.
#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, HttpAppError> {
    let path = state.config.static_dir.join(INDEX_FILE);

    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Ok(Html(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound("Landing page not found".to_string()).into())
        }
        Err(e) => Err(AppError::Internal(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))
        .into()),
    }
}
