use crate::api::ErrorResponse;
use crate::models::{RecipeDocument, RecipeResponse};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Recognized fields for a new recipe; anything else in the body is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub chef: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub directions: Option<String>,
    /// Preparation time in minutes.
    pub prep_time: Option<i32>,
    pub image_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponse),
        (status = 400, description = "Malformed body or store rejection", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(db): State<AppState>,
    payload: Result<Json<CreateRecipeRequest>, JsonRejection>,
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

    // The store assigns the id on insert.
    let document = RecipeDocument {
        id: None,
        title: request.title,
        chef: request.chef,
        ingredients: request.ingredients,
        directions: request.directions,
        prep_time: request.prep_time,
        image_url: request.image_url,
    };

    let inserted_id = match db.recipes.insert_one(&document).await {
        Ok(result) => result.inserted_id,
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

    let created = RecipeDocument {
        id: inserted_id.as_object_id(),
        ..document
    };

    (StatusCode::CREATED, Json(RecipeResponse::from(created))).into_response()
}
