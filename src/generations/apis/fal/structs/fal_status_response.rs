use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FalStatusResponse {
    pub status: String,
    pub queue_position: Option<u32>,
    pub logs: Option<Vec<FalLog>>,
}

#[derive(Debug, Deserialize)]
pub struct FalLog {
    pub message: String,
}
