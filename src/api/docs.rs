//! OpenAPI Document
//!
//! Generated from the handler annotations and served at `GET /openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use super::handlers;
use crate::models::{ErrorResponse, HealthResponse, Recipe, RecipeList, RecipeUpdate};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "sandbox recipe api",
        description = "A sample application showing how to add a REST API to a MongoDB collection."
    ),
    paths(
        handlers::create_recipe,
        handlers::list_recipes,
        handlers::get_recipe,
        handlers::update_recipe,
        handlers::delete_recipe,
        handlers::health_handler,
    ),
    components(schemas(Recipe, RecipeUpdate, RecipeList, ErrorResponse, HealthResponse)),
    tags(
        (name = "recipes", description = "Recipe records"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Handler for GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
