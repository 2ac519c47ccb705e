use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SketchesApiError {
    UndecodableImage,
    EncodingFailed,
}

impl SketchesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::UndecodableImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Could not decode image.".to_string(),
            },
            Self::EncodingFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Could not encode sketch.".to_string(),
            },
        }
    }
}
