//! Thin typed client for the recipe endpoints.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recipe as the server returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: Option<String>,
    pub chef: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub directions: Option<String>,
    /// Preparation time in minutes.
    pub prep_time: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields sent when creating a recipe. Absent fields stay out of the body.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecipe {
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

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Confirmation {
    message: String,
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(server: &str) -> ApiClient {
        ApiClient {
            base_url: server.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let response = self
            .http
            .get(format!("{}/recipes", self.base_url))
            .send()
            .await?;

        parse(response).await
    }

    pub async fn get_recipe(&self, id: &str) -> Result<Recipe> {
        let response = self
            .http
            .get(format!("{}/recipes/{}", self.base_url, id))
            .send()
            .await?;

        parse(response).await
    }

    pub async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe> {
        let response = self
            .http
            .post(format!("{}/recipes", self.base_url))
            .json(recipe)
            .send()
            .await?;

        parse(response).await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_recipe(&self, id: &str) -> Result<String> {
        let response = self
            .http
            .delete(format!("{}/recipes/{}", self.base_url, id))
            .send()
            .await?;

        let confirmation: Confirmation = parse(response).await?;
        Ok(confirmation.message)
    }
}

/// Decode a success body, or turn an error response into a failure carrying
/// the server's message.
async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        anyhow::bail!("Request failed with status {}: {}", status, message);
    }

    Ok(response.json().await?)
}
