//! MongoDB Store
//!
//! `RecipeStore` over the official MongoDB driver. The driver's `Client`
//! owns a connection pool, so one store is built at startup and shared by
//! every request.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
    Client, Collection, Database,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::RecipeUpdate;
use crate::store::{RecipeDocument, RecipeStore};

/// Recipe collection handle plus its database, used for pings.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<RecipeDocument>,
}

impl MongoStore {
    /// Builds a store on an existing database handle.
    pub fn new(database: Database, collection_name: &str) -> Self {
        let collection = database.collection::<RecipeDocument>(collection_name);
        Self {
            database,
            collection,
        }
    }

    /// Creates the client from the configured connection string.
    ///
    /// The driver connects lazily; an unreachable server surfaces on the
    /// first operation, not here.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_url).await?;
        info!(
            "MongoDB client created for database '{}', collection '{}'",
            config.database_name, config.collection_name
        );
        Ok(Self::new(
            client.database(&config.database_name),
            &config.collection_name,
        ))
    }
}

#[async_trait]
impl RecipeStore for MongoStore {
    async fn insert_one(&self, recipe: RecipeDocument) -> Result<ObjectId> {
        let result = self.collection.insert_one(recipe, None).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            ApiError::Storage(format!(
                "engine returned a non-ObjectId id: {}",
                result.inserted_id
            ))
        })
    }

    async fn find_one(&self, id: ObjectId) -> Result<Option<RecipeDocument>> {
        Ok(self.collection.find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_many(&self, limit: usize) -> Result<Vec<RecipeDocument>> {
        let options = FindOptions::builder()
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .build();
        let cursor = self.collection.find(None, options).await?;
        let docs: Vec<RecipeDocument> = cursor.try_collect().await?;

        debug!("Fetched {} documents", docs.len());
        Ok(docs)
    }

    async fn find_one_and_update(
        &self,
        id: ObjectId,
        changes: &RecipeUpdate,
    ) -> Result<Option<RecipeDocument>> {
        let set = bson::to_document(changes).map_err(|e| ApiError::Storage(e.to_string()))?;
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        Ok(self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set }, options)
            .await?)
    }

    async fn delete_one(&self, id: ObjectId) -> Result<u64> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
