//! Startup validation

use anyhow::Result;
use verity_core::Config;

use crate::constants::INDEX_FILE;

/// Validate configuration before anything is bound or created.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins");
    }

    let index = config.static_dir.join(INDEX_FILE);
    if !index.is_file() {
        tracing::warn!(path = %index.display(), "Landing page not found; GET / will return 404");
    }

    Ok(())
}
