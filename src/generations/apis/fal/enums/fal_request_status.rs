#[derive(Debug)]
pub enum FalRequestStatus {
    InQueue,
    InProgress,
    Completed,
}

impl FalRequestStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::InQueue => "IN_QUEUE",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}
