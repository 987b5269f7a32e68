//! API Module
//!
//! HTTP handlers and routing for the recipe REST API.
//!
//! # Endpoints
//! - `POST /recipes/` - Create a recipe
//! - `GET /recipes/` - List recipes
//! - `GET /recipes/:id` - Fetch a recipe by id
//! - `PUT /recipes/:id` - Partially update a recipe
//! - `DELETE /recipes/:id` - Delete a recipe
//! - `GET /health` - Health check endpoint
//! - `GET /openapi.json` - Generated OpenAPI document

pub mod docs;
pub mod extract;
pub mod handlers;
pub mod routes;


pub use docs::ApiDoc;
pub use extract::ApiJson;
pub use handlers::*;
pub use routes::create_router;
