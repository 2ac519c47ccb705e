use serde::Serialize;

use crate::app::util::time;

use super::generation_request::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub url: String,
    pub request_id: String,
    pub completed_at: i64,
}

impl GenerationResult {
    pub fn from_request(request: &GenerationRequest, url: String) -> Self {
        Self {
            url,
            request_id: request.id.to_string(),
            completed_at: time::current_time_in_secs(),
        }
    }
}
