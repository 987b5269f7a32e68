//! Stored Recipe Shape
//!
//! Mirrors `Recipe` with the id held under MongoDB's reserved `_id` key
//! as a native `ObjectId`.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{Recipe, RecipeUpdate};

/// A recipe as persisted in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDocument {
    /// Left off on insert so the engine generates it
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub author: String,
    pub img_url: String,
}

impl RecipeDocument {
    /// Sets every field present in `changes`. The id is never touched.
    pub fn apply(&mut self, changes: &RecipeUpdate) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(author) = &changes.author {
            self.author = author.clone();
        }
        if let Some(img_url) = &changes.img_url {
            self.img_url = img_url.clone();
        }
    }
}

impl From<Recipe> for RecipeDocument {
    /// Drops any client-supplied id; ids come from the engine only.
    fn from(recipe: Recipe) -> Self {
        Self {
            id: None,
            name: recipe.name,
            author: recipe.author,
            img_url: recipe.img_url,
        }
    }
}

impl From<RecipeDocument> for Recipe {
    fn from(doc: RecipeDocument) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()),
            name: doc.name,
            author: doc.author,
            img_url: doc.img_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn soup() -> RecipeDocument {
        RecipeDocument::from(Recipe::new("Soup", "a@b.com", "http://x/y.jpg"))
    }

    #[test]
    fn test_client_id_is_dropped() {
        let mut recipe = Recipe::new("Soup", "a@b.com", "http://x/y.jpg");
        recipe.id = Some(ObjectId::new().to_hex());
        assert!(RecipeDocument::from(recipe).id.is_none());
    }

    #[test]
    fn test_new_document_has_no_id_key() {
        let doc = bson::to_document(&soup()).unwrap();
        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "Soup");
    }

    #[test]
    fn test_id_maps_to_underscore_id() {
        let id = ObjectId::new();
        let stored = RecipeDocument {
            id: Some(id),
            ..soup()
        };
        let doc = bson::to_document(&stored).unwrap();
        assert_eq!(doc.get_object_id("_id").unwrap(), id);

        let back: RecipeDocument = bson::from_document(doc).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn test_wire_id_is_hex() {
        let id = ObjectId::new();
        let recipe = Recipe::from(RecipeDocument {
            id: Some(id),
            ..soup()
        });
        assert_eq!(recipe.id, Some(id.to_hex()));
        assert_eq!(recipe.name, "Soup");
    }

    #[test]
    fn test_apply_only_touches_set_fields() {
        let id = ObjectId::new();
        let mut doc = RecipeDocument {
            id: Some(id),
            ..soup()
        };
        doc.apply(&RecipeUpdate {
            author: Some("c@d.com".to_string()),
            ..Default::default()
        });
        assert_eq!(doc.id, Some(id));
        assert_eq!(doc.name, "Soup");
        assert_eq!(doc.author, "c@d.com");
        assert_eq!(doc.img_url, "http://x/y.jpg");
    }
}
