use axum::http::{header, HeaderValue};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Security headers configuration
#[derive(Clone, Debug)]
pub struct SecurityHeadersConfig {
    /// Extra origins allowed to serve scripts (the API docs viewer)
    pub script_origins: Vec<String>,
    pub is_production: bool,
}

impl SecurityHeadersConfig {
    pub fn new(script_origins: Vec<String>, is_production: bool) -> Self {
        Self {
            script_origins,
            is_production,
        }
    }

    /// Build Content-Security-Policy header value
    fn build_csp(&self) -> String {
        let script_src = std::iter::once("'self'".to_string())
            .chain(self.script_origins.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        [
            "default-src 'self'".to_string(),
            format!("script-src {}", script_src),
            "style-src 'self' 'unsafe-inline'".to_string(),
            "img-src 'self' data: blob:".to_string(),
            "connect-src 'self'".to_string(),
            "form-action 'self'".to_string(),
            "frame-ancestors 'none'".to_string(),
        ]
        .join("; ")
    }
}

/// Adds security headers to all HTTP responses
pub async fn security_headers_middleware(
    State(config): State<Arc<SecurityHeadersConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    // HSTS header (only set in production)
    if config.is_production {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    if let Ok(header_value) = HeaderValue::from_str(&config.build_csp()) {
        headers.insert(header::CONTENT_SECURITY_POLICY, header_value);
    }

    headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );

    // Stored uploads set their own caching policy
    headers
        .entry(header::CACHE_CONTROL)
        .or_insert(HeaderValue::from_static("no-store, private"));

    response
}
