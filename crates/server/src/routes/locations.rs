use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use models::{Location, LocationInput, Record, Summary};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

const ENTITY: &str = "Location";

/// Locations reduced to `{id, name}`.
#[utoipa::path(get, path = "/locations", tag = "locations", responses((status = 200, description = "OK", body = [crate::openapi::SummaryDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Summary>>, JsonApiError> {
    let locations = state.locations.list().await?;
    Ok(Json(locations.iter().map(Record::summary).collect()))
}

#[utoipa::path(get, path = "/locations/{id}", tag = "locations", params(("id" = String, Path, description = "Location id")), responses((status = 200, description = "OK", body = crate::openapi::LocationDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Location>, JsonApiError> {
    match state.locations.get_by_id(&id).await? {
        Some(location) => Ok(Json(location)),
        None => Err(JsonApiError::not_found(ENTITY)),
    }
}

#[utoipa::path(post, path = "/locations", tag = "locations", request_body = crate::openapi::LocationRequest, responses((status = 201, description = "Created", body = crate::openapi::LocationDoc), (status = 400, description = "Name missing", body = crate::openapi::ErrorResponse)))]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<LocationInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Location>), JsonApiError> {
    let Json(input) = payload?;
    let location = input.validate()?;
    let saved = state.locations.save(location).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Replaces `name` and `description`; an omitted description is cleared.
#[utoipa::path(put, path = "/locations/{id}", tag = "locations", params(("id" = String, Path, description = "Location id")), request_body = crate::openapi::LocationRequest, responses((status = 200, description = "Updated", body = crate::openapi::LocationDoc), (status = 400, description = "Name missing", body = crate::openapi::ErrorResponse), (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<LocationInput>, JsonRejection>,
) -> Result<Json<Location>, JsonApiError> {
    let Json(input) = payload?;
    let patch = input.into_patch()?;
    match state.locations.update(&id, patch).await? {
        Some(location) => Ok(Json(location)),
        None => Err(JsonApiError::not_found(ENTITY)),
    }
}

#[utoipa::path(delete, path = "/locations/{id}", tag = "locations", params(("id" = String, Path, description = "Location id")), responses((status = 200, description = "Deleted", body = crate::openapi::MessageResponse), (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    if state.locations.get_by_id(&id).await?.is_none() {
        return Err(JsonApiError::not_found(ENTITY));
    }
    state.locations.delete(&id).await?;
    Ok(Json(serde_json::json!({"message": "Location deleted successfully"})))
}
