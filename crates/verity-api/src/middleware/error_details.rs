use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::error::DetailedErrorBody;
use crate::state::AppState;

/// Replace error bodies with their detailed form when the configuration
/// allows it. Production responses keep the public body.
pub async fn error_details_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(DetailedErrorBody(detailed)) =
        response.extensions_mut().remove::<DetailedErrorBody>()
    else {
        return response;
    };

    if !state.expose_error_details {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    let body = Json(detailed).into_response().into_body();
    Response::from_parts(parts, body)
}
