/// Multipart field carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

/// Landing page file name inside the static directory
pub const INDEX_FILE: &str = "index.html";

/// Path the OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api/openapi.json";

/// Script origin of the RapiDoc viewer served at /docs
pub const DOCS_SCRIPT_ORIGIN: &str = "https://unpkg.com";
