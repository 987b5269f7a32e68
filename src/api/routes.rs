//! API Routes
//!
//! Configures the Axum router with all recipe endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::docs::openapi_json;
use super::handlers::{
    create_recipe, delete_recipe, get_recipe, health_handler, list_recipes, update_recipe,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /recipes/` - Create a recipe
/// - `GET /recipes/` - List recipes (at most 1000)
/// - `GET /recipes/:id` - Fetch one recipe
/// - `PUT /recipes/:id` - Partially update a recipe
/// - `DELETE /recipes/:id` - Delete a recipe
/// - `GET /health` - Health check endpoint
/// - `GET /openapi.json` - OpenAPI document
///
/// The collection routes also answer without the trailing slash.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/recipes/", post(create_recipe).get(list_recipes))
        .route("/recipes", post(create_recipe).get(list_recipes))
        .route(
            "/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/health", get(health_handler))
        .route("/openapi.json", get(openapi_json))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
