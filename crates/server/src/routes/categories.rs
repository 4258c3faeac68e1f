use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use models::{Category, CategoryInput};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// All categories with every field.
#[utoipa::path(get, path = "/categories", tag = "categories", responses((status = 200, description = "OK", body = [crate::openapi::CategoryDoc]), (status = 500, description = "Storage failure", body = crate::openapi::ErrorResponse)))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Category>>, JsonApiError> {
    Ok(Json(state.categories.list().await?))
}

#[utoipa::path(post, path = "/categories", tag = "categories", request_body = crate::openapi::CategoryRequest, responses((status = 201, description = "Created", body = crate::openapi::CategoryDoc), (status = 400, description = "Name missing", body = crate::openapi::ErrorResponse)))]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), JsonApiError> {
    let Json(input) = payload?;
    let category = input.validate()?;
    let saved = state.categories.save(category).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}
