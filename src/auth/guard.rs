use axum::{extract::State, http::Request, middleware::Next, response::Response};

use crate::{app::models::api_error::ApiError, AppState};

use super::errors::AuthApiError;

/// Refuses pane routes until the access gate has been unlocked.
pub async fn require_access<B>(
    State(state): State<AppState>,
    request: Request<B>,
    next: Next<B>,
) -> Result<Response, ApiError> {
    if !state.gate.is_open() {
        return Err(AuthApiError::AccessDenied.value());
    }

    Ok(next.run(request).await)
}
