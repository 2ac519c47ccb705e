pub mod controller;
pub mod env;
pub mod errors;
pub mod models;
pub mod router;
pub mod util;

#[cfg(test)]
pub mod testing;
