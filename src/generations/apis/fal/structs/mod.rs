pub mod fal_queue_response;
pub mod fal_status_response;
