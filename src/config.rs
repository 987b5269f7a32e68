//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Server configuration parameters.
///
/// Everything except the MongoDB connection string has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_url: String,
    /// Database holding the recipe collection
    pub database_name: String,
    /// Collection name for recipe documents
    pub collection_name: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MONGODB_URL` - MongoDB connection string (required)
    /// - `DATABASE_NAME` - Database name (default: sandbox_db)
    /// - `COLLECTION_NAME` - Collection name (default: recipes)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mongodb_url = env::var("MONGODB_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("MONGODB_URL"))?;

        Ok(Self {
            mongodb_url,
            database_name: env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
            collection_name: env::var("COLLECTION_NAME").unwrap_or(defaults.collection_name),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_url: "mongodb://localhost:27017".to_string(),
            database_name: "sandbox_db".to_string(),
            collection_name: "recipes".to_string(),
            server_port: 8000,
        }
    }
}
