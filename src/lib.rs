//! Recipe API - A small REST service for recipe records
//!
//! Maps create, list, get, update and delete onto a MongoDB collection.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::ApiError;
