//! Request and Response models for the recipe API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod recipe;
pub mod responses;

// Re-export commonly used types
pub use recipe::{Recipe, RecipeList, RecipeUpdate, MAX_LIST_RESULTS};
pub use responses::{ErrorResponse, HealthResponse};
