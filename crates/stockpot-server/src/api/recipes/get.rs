use crate::api::ErrorResponse;
use crate::models::RecipeResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(State(db): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    // Malformed ids, unmatched ids and store failures all collapse into the
    // same fixed not-found response on this path.
    let oid = match ObjectId::parse_str(&id) {
        Ok(oid) => oid,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
    };

    match db.recipes.find_one(doc! { "_id": oid }).await {
        Ok(Some(document)) => {
            (StatusCode::OK, Json(RecipeResponse::from(document))).into_response()
        }
        Ok(None) | Err(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                message: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
    }
}
