use crate::api::ErrorResponse;
use crate::models::{RecipeDocument, RecipeResponse};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};
use serde::Deserialize;
use utoipa::ToSchema;

/// Partial update; only fields that are present with a non-empty, non-zero
/// value overwrite the stored ones.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub chef: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub directions: Option<String>,
    pub prep_time: Option<i32>,
    pub image_url: Option<String>,
}

impl UpdateRecipeRequest {
    fn apply_to(self, document: &mut RecipeDocument) {
        if let Some(title) = self.title.filter(|t| !t.is_empty()) {
            document.title = Some(title);
        }
        if let Some(chef) = self.chef.filter(|c| !c.is_empty()) {
            document.chef = Some(chef);
        }
        if let Some(ingredients) = self.ingredients.filter(|i| !i.is_empty()) {
            document.ingredients = Some(ingredients);
        }
        if let Some(directions) = self.directions.filter(|d| !d.is_empty()) {
            document.directions = Some(directions);
        }
        if let Some(prep_time) = self.prep_time.filter(|p| *p != 0) {
            document.prep_time = Some(prep_time);
        }
        if let Some(image_url) = self.image_url.filter(|u| !u.is_empty()) {
            document.image_url = Some(image_url);
        }
    }
}

#[utoipa::path(
    patch,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Updated recipe", body = RecipeResponse),
        (status = 400, description = "Malformed body, unknown recipe or store rejection", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(db): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRecipeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: rejection.body_text(),
                }),
            )
                .into_response()
        }
    };

    // Fetch failures of every kind surface as 400 on this path.
    let object_id = match ObjectId::parse_str(&id) {
        Ok(oid) => oid,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
    };

    let mut document = match db.recipes.find_one(doc! { "_id": object_id }).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    };

    request.apply_to(&mut document);

    // Full-document replace; concurrent writers race and the last one wins.
    match db
        .recipes
        .replace_one(doc! { "_id": object_id }, &document)
        .await
    {
        Ok(result) if result.matched_count == 0 => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Ok(_) => (StatusCode::OK, Json(RecipeResponse::from(document))).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: e.to_string(),
            }),
        )
            .into_response(),
    }
}
