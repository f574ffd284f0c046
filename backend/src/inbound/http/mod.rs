//! HTTP inbound adapter exposing the Chirpy REST endpoints and file servers.

pub mod admin;
pub mod assets;
pub mod chirps;
pub mod error;
pub mod health;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
