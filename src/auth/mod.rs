pub mod controller;
pub mod dtos;
pub mod errors;
pub mod guard;
pub mod models;
pub mod service;
