//! Storage Module
//!
//! The `RecipeStore` trait is the only path handlers use to reach the
//! document database. `MongoStore` talks to MongoDB; `MemoryStore` keeps
//! documents in process and serves as the test double for handler tests.

mod document;
mod memory;
mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::{ApiError, Result};
use crate::models::RecipeUpdate;

// Re-export public types
pub use document::RecipeDocument;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

// == Store Trait ==
/// Single-document operations against the recipe collection.
///
/// Every call is keyed on the native `ObjectId`; translating wire ids is
/// the caller's job (see [`parse_object_id`]).
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Inserts a document and returns the id the engine assigned to it.
    async fn insert_one(&self, recipe: RecipeDocument) -> Result<ObjectId>;

    async fn find_one(&self, id: ObjectId) -> Result<Option<RecipeDocument>>;

    /// Returns at most `limit` documents in the engine's natural order.
    async fn find_many(&self, limit: usize) -> Result<Vec<RecipeDocument>>;

    /// Atomically sets the fields present in `changes` and returns the
    /// document as it is after the write, or `None` if nothing matched.
    async fn find_one_and_update(
        &self,
        id: ObjectId,
        changes: &RecipeUpdate,
    ) -> Result<Option<RecipeDocument>>;

    /// Deletes at most one document and returns the number removed.
    async fn delete_one(&self, id: ObjectId) -> Result<u64>;

    /// Checks that the engine is reachable.
    async fn ping(&self) -> Result<()>;
}

// == Identifier Translation ==
/// Parses a wire-level id into the storage engine's native id.
///
/// Fails with `MalformedId` rather than `NotFound` so callers can tell a
/// bad id from a missing record.
pub fn parse_object_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::MalformedId(raw.to_string()))
}
