//! HTTP inbound adapter exposing REST endpoints.

pub mod deals;
pub mod error;
pub mod health;
pub mod identity;
pub mod jobs;
pub mod market;
pub mod movies;
pub mod news;
pub mod preferences;
pub mod recipes;
pub mod session;
pub mod social;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod videos;
pub mod weather;

pub use error::ApiResult;
