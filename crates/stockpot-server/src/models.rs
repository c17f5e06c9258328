use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recipe as stored in the `recipes` collection. Absent optional fields are
/// kept out of the stored document entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chef: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A recipe as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    /// Hex form of the storage ObjectId.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chef: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directions: Option<String>,
    /// Preparation time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation time, read out of the ObjectId the store assigned.
    pub created_at: DateTime<Utc>,
}

impl From<RecipeDocument> for RecipeResponse {
    fn from(document: RecipeDocument) -> Self {
        let (id, created_at) = match document.id {
            Some(oid) => {
                let millis = oid.timestamp().timestamp_millis();
                (
                    oid.to_hex(),
                    DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH),
                )
            }
            None => (String::new(), DateTime::UNIX_EPOCH),
        };

        RecipeResponse {
            id,
            title: document.title,
            chef: document.chef,
            ingredients: document.ingredients,
            directions: document.directions,
            prep_time: document.prep_time,
            image_url: document.image_url,
            created_at,
        }
    }
}
