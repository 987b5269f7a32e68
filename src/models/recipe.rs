//! Recipe DTOs
//!
//! Wire shapes for recipe records. Ids travel as hex strings here; the
//! storage layer owns the translation to native ids.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upper bound on the number of recipes returned by a list call.
pub const MAX_LIST_RESULTS: usize = 1000;

/// A single recipe as sent and received over HTTP.
///
/// `id` is assigned by the storage engine on create. Any value a client
/// sends in a create body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Costco chicken bake",
    "author": "jdoe@example.com",
    "img_url": "https://www.allrecipes.com/thmb/copycat-costco-chicken-bake.jpg"
}))]
pub struct Recipe {
    /// Storage-assigned id, absent until first persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Recipe name
    pub name: String,
    /// Author, usually an email address
    pub author: String,
    /// Image URL
    pub img_url: String,
}

impl Recipe {
    /// Creates an unsaved recipe.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        img_url: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            author: author.into(),
            img_url: img_url.into(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("name cannot be empty".to_string());
        }
        if self.author.trim().is_empty() {
            return Some("author cannot be empty".to_string());
        }
        None
    }
}

/// A sparse set of changes to an existing recipe.
///
/// Missing and `null` fields are both left as `None` and never applied.
/// Serializes only the fields that are set, which makes the serialized
/// form usable directly as a change-set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Costco chicken bake"}))]
pub struct RecipeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
}

impl RecipeUpdate {
    /// True when no field would be applied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.author.is_none() && self.img_url.is_none()
    }

    /// Validates the fields that are present.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Some("name cannot be empty".to_string());
        }
        if matches!(&self.author, Some(author) if author.trim().is_empty()) {
            return Some("author cannot be empty".to_string());
        }
        None
    }
}

/// Wrapper for recipe lists.
///
/// Lists are never sent as a bare top-level JSON array, which avoids
/// JSON hijacking of array-rooted payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeList {
    pub recipes: Vec<Recipe>,
}

impl RecipeList {
    /// Wraps the given recipes
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }
}
