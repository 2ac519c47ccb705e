use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FalQueueResponse {
    pub request_id: String,
    pub status_url: Option<String>,
    pub response_url: Option<String>,
}
