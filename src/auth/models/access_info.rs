use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccessInfo {
    pub unlocked: bool,
}
