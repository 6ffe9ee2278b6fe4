//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use verity_core::models;

/// Returns the OpenAPI document served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Verity API",
        version = "0.1.0",
        description = "Heuristic image authenticity checks. Upload an image to /analyze to store it and receive a score from 0 to 100 with one of three labels."
    ),
    paths(
        handlers::analyze::analyze_image,
        handlers::uploads::get_upload,
        handlers::health::health_check,
        handlers::health::liveness_check,
    ),
    components(schemas(
        models::AnalyzeResponse,
        models::Verdict,
        error::ErrorResponse,
        handlers::health::HealthCheckResponse,
    )),
    tags(
        (name = "analysis", description = "Upload and classify images"),
        (name = "uploads", description = "Retrieve stored uploads"),
        (name = "health", description = "Liveness and health probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_lists_public_routes() {
        let spec = get_openapi_spec();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        for path in ["/analyze", "/uploads/{key}", "/health", "/live"] {
            assert!(paths.iter().any(|p| p.as_str() == path), "missing {path}");
        }
    }
}
