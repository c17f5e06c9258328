use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::{doc, oid::ObjectId};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Removal confirmed, whether or not the recipe existed", body = DeleteRecipeResponse),
        (status = 500, description = "Malformed id or store failure", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(State(db): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let object_id = match ObjectId::parse_str(&id) {
        Ok(oid) => oid,
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

    // No existence check; removing an absent recipe still confirms.
    match db.recipes.delete_one(doc! { "_id": object_id }).await {
        Ok(_) => (
            StatusCode::OK,
            Json(DeleteRecipeResponse {
                message: "Recipe deleted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: e.to_string(),
            }),
        )
            .into_response(),
    }
}
