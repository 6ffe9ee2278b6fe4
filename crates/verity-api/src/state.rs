//! Application state shared by all handlers.

use std::sync::Arc;
use verity_core::{Classifier, Config};
use verity_storage::Storage;

/// Immutable after startup; handlers receive it as `State<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub classifier: Classifier,
    /// Include error details in responses (off in production)
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self {
            expose_error_details: !config.is_production(),
            config,
            storage,
            classifier: Classifier::default(),
        }
    }
}
