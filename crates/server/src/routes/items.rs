use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Multipart, Path, Request, State},
    http::{header, StatusCode},
    Json,
};
use models::{Item, ItemInput, Record, Summary};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

const ENTITY: &str = "Item";

/// Items reduced to `{id, name}`.
#[utoipa::path(get, path = "/items", tag = "items", responses((status = 200, description = "OK", body = [crate::openapi::SummaryDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Summary>>, JsonApiError> {
    let items = state.items.list().await?;
    Ok(Json(items.iter().map(Record::summary).collect()))
}

#[utoipa::path(get, path = "/items/{id}", tag = "items", params(("id" = String, Path, description = "Item id")), responses((status = 200, description = "OK", body = crate::openapi::ItemDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)))]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, JsonApiError> {
    match state.items.get_by_id(&id).await? {
        Some(item) => Ok(Json(item)),
        None => Err(JsonApiError::not_found(ENTITY)),
    }
}

struct UploadedImage {
    file_name: Option<String>,
    bytes: Bytes,
}

/// Create an item from a multipart form (optional `image` file) or a JSON body.
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body(content = crate::openapi::ItemForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc),
        (status = 400, description = "Required field missing", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    req: Request,
) -> Result<(StatusCode, Json<Item>), JsonApiError> {
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    let (input, upload) = if is_multipart {
        let multipart = Multipart::from_request(req, &state).await?;
        read_form(multipart).await?
    } else {
        let Json(input) = Json::<ItemInput>::from_request(req, &state).await?;
        (input, None)
    };

    // validate before touching the uploads directory
    let mut item = input.validate(None)?;
    if let Some(upload) = upload {
        item.image = Some(state.uploads.store(upload.file_name.as_deref(), &upload.bytes).await?);
    }

    let saved = state.items.save(item).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn read_form(mut multipart: Multipart) -> Result<(ItemInput, Option<UploadedImage>), JsonApiError> {
    let mut input = ItemInput::default();
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    upload = Some(UploadedImage { file_name, bytes });
                }
            }
            "categoryId" => input.category_id = Some(field.text().await?),
            "locationId" => input.location_id = Some(field.text().await?),
            "name" => input.name = Some(field.text().await?),
            "description" => input.description = Some(field.text().await?),
            _ => {}
        }
    }
    Ok((input, upload))
}

/// Replaces the four text fields; the stored image is kept.
#[utoipa::path(put, path = "/items/{id}", tag = "items", params(("id" = String, Path, description = "Item id")), request_body = crate::openapi::ItemRequest, responses((status = 200, description = "Updated", body = crate::openapi::ItemDoc), (status = 400, description = "Required field missing", body = crate::openapi::ErrorResponse), (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<Json<Item>, JsonApiError> {
    let Json(input) = payload?;
    let patch = input.into_patch()?;
    match state.items.update(&id, patch).await? {
        Some(item) => Ok(Json(item)),
        None => Err(JsonApiError::not_found(ENTITY)),
    }
}

#[utoipa::path(delete, path = "/items/{id}", tag = "items", params(("id" = String, Path, description = "Item id")), responses((status = 200, description = "Deleted", body = crate::openapi::MessageResponse), (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    if state.items.get_by_id(&id).await?.is_none() {
        return Err(JsonApiError::not_found(ENTITY));
    }
    state.items.delete(&id).await?;
    Ok(Json(serde_json::json!({"message": "Item deleted successfully"})))
}
