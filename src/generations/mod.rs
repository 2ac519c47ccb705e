pub mod apis;
pub mod errors;
pub mod generator;
pub mod models;
pub mod service;
