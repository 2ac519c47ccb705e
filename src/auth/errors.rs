use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    IncorrectPassword,
    AccessDenied,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::IncorrectPassword => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Incorrect password.".to_string(),
            },
            Self::AccessDenied => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Access denied.".to_string(),
            },
        }
    }
}
