pub mod access_gate;
pub mod access_info;
