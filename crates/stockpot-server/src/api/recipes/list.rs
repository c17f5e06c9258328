use crate::api::ErrorResponse;
use crate::models::{RecipeDocument, RecipeResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "Every stored recipe, in collection order", body = [RecipeResponse]),
        (status = 500, description = "Store unavailable or query failed", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(db): State<AppState>) -> impl IntoResponse {
    let cursor = match db.recipes.find(doc! {}).await {
        Ok(cursor) => cursor,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    };

    let documents: Vec<RecipeDocument> = match cursor.try_collect().await {
        Ok(documents) => documents,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    };

    let recipes: Vec<RecipeResponse> = documents.into_iter().map(RecipeResponse::from).collect();

    (StatusCode::OK, Json(recipes)).into_response()
}
