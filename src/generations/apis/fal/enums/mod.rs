pub mod fal_request_status;
