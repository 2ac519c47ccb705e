use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationsApiError {
    GenerationFailed,
    NoImageUrl,
}

impl GenerationsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::GenerationFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to generate image.".to_string(),
            },
            Self::NoImageUrl => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "No image URL found in the result.".to_string(),
            },
        }
    }
}
