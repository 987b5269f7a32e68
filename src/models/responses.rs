//! Response DTOs for the recipe API
//!
//! Shapes shared by all endpoints: the error body and the health report.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("healthy" or "unhealthy")
    pub status: String,
    /// Storage reachability ("up" or "down")
    pub storage: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a HealthResponse with the current timestamp
    pub fn new(storage_up: bool) -> Self {
        let (status, storage) = if storage_up {
            ("healthy", "up")
        } else {
            ("unhealthy", "down")
        };
        Self {
            status: status.to_string(),
            storage: storage.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::new(true);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
        assert!(resp.is_healthy());
    }

    #[test]
    fn test_health_response_storage_down() {
        let resp = HealthResponse::new(false);
        assert_eq!(resp.status, "unhealthy");
        assert_eq!(resp.storage, "down");
        assert!(!resp.is_healthy());
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
