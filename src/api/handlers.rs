//! API Handlers
//!
//! HTTP request handlers for each recipe endpoint. Every handler that takes
//! an `{id}` path segment translates it to a native id before touching
//! storage.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use super::extract::ApiJson;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ErrorResponse, HealthResponse, Recipe, RecipeList, RecipeUpdate, MAX_LIST_RESULTS,
};
use crate::store::{parse_object_id, MemoryStore, MongoStore, RecipeDocument, RecipeStore};

/// Application state shared across all handlers.
///
/// Holds the single storage handle created at startup.
#[derive(Clone)]
pub struct AppState {
    /// Shared recipe storage
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    /// Creates an AppState backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Creates an AppState from configuration.
    ///
    /// Builds the MongoDB client described by the Config.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store = MongoStore::connect(config).await?;
        Ok(Self::new(Arc::new(store)))
    }
}

/// Handler for POST /recipes/
///
/// Inserts a new recipe and returns it as stored, with its assigned id.
#[utoipa::path(
    post,
    path = "/recipes/",
    tag = "recipes",
    request_body = Recipe,
    responses(
        (status = 201, description = "Add new recipe", body = Recipe),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    ApiJson(recipe): ApiJson<Recipe>,
) -> Result<(StatusCode, Json<Recipe>)> {
    if let Some(error_msg) = recipe.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let id = state.store.insert_one(RecipeDocument::from(recipe)).await?;

    // Re-read so the response matches exactly what was persisted
    let created = state.store.find_one(id).await?.ok_or_else(|| {
        ApiError::Storage(format!("recipe {} missing right after insert", id))
    })?;

    info!("Created recipe {}", id);
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Handler for GET /recipes/
///
/// Lists recipes, capped at `MAX_LIST_RESULTS`.
#[utoipa::path(
    get,
    path = "/recipes/",
    tag = "recipes",
    responses(
        (status = 200, description = "List all recipes, at most 1000", body = RecipeList)
    )
)]
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<RecipeList>> {
    let docs = state.store.find_many(MAX_LIST_RESULTS).await?;
    debug!("Listing {} recipes", docs.len());

    Ok(Json(RecipeList::new(
        docs.into_iter().map(Recipe::from).collect(),
    )))
}

/// Handler for GET /recipes/:id
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id (24 hex digits)")
    ),
    responses(
        (status = 200, description = "Get a single recipe", body = Recipe),
        (status = 400, description = "Malformed recipe id", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>> {
    let oid = parse_object_id(&id)?;

    match state.store.find_one(oid).await? {
        Some(doc) => Ok(Json(doc.into())),
        None => Err(ApiError::NotFound(id)),
    }
}

/// Handler for PUT /recipes/:id
///
/// Applies only the fields present in the body. An empty body changes
/// nothing and returns the current record.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id (24 hex digits)")
    ),
    request_body = RecipeUpdate,
    responses(
        (status = 200, description = "Update a recipe", body = Recipe),
        (status = 400, description = "Malformed recipe id or body", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(changes): ApiJson<RecipeUpdate>,
) -> Result<Json<Recipe>> {
    if let Some(error_msg) = changes.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let oid = parse_object_id(&id)?;

    let updated = if changes.is_empty() {
        debug!("Empty update for recipe {}, returning current state", id);
        state.store.find_one(oid).await?
    } else {
        state.store.find_one_and_update(oid, &changes).await?
    };

    match updated {
        Some(doc) => {
            info!("Updated recipe {}", id);
            Ok(Json(doc.into()))
        }
        None => Err(ApiError::NotFound(id)),
    }
}

/// Handler for DELETE /recipes/:id
///
/// Responds 204 with an empty body once the record is gone.
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id (24 hex digits)")
    ),
    responses(
        (status = 204, description = "Delete a recipe"),
        (status = 400, description = "Malformed recipe id", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let oid = parse_object_id(&id)?;

    if state.store.delete_one(oid).await? == 1 {
        info!("Deleted recipe {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}

/// Handler for GET /health
///
/// Reports healthy only when the storage engine answers a ping.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Storage reachable", body = HealthResponse),
        (status = 503, description = "Storage unreachable", body = HealthResponse)
    )
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::new(true))),
        Err(err) => {
            warn!("Health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new(false)),
            )
        }
    }
}
