use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PanesApiError {
    PaneNotFound,
}

impl PanesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PaneNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Pane not found.".to_string(),
            },
        }
    }
}
