use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct SummaryDoc { pub id: String, pub name: String }

#[derive(ToSchema)]
pub struct CategoryDoc { pub id: String, pub name: String, pub description: Option<String> }

#[derive(ToSchema)]
pub struct CategoryRequest { pub name: String, pub description: Option<String> }

#[derive(ToSchema)]
pub struct LocationDoc { pub id: String, pub name: String, pub description: Option<String> }

#[derive(ToSchema)]
pub struct LocationRequest { pub name: String, pub description: Option<String> }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ItemDoc {
    pub id: String,
    pub category_id: String,
    pub location_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Stored filename, served under `/images/{image}`
    pub image: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ItemRequest {
    pub category_id: String,
    pub location_id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ItemForm {
    pub category_id: String,
    pub location_id: String,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categories::list,
        crate::routes::categories::create,
        crate::routes::locations::list,
        crate::routes::locations::get,
        crate::routes::locations::create,
        crate::routes::locations::update,
        crate::routes::locations::delete,
        crate::routes::items::list,
        crate::routes::items::get,
        crate::routes::items::create,
        crate::routes::items::update,
        crate::routes::items::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            MessageResponse,
            SummaryDoc,
            CategoryDoc,
            CategoryRequest,
            LocationDoc,
            LocationRequest,
            ItemDoc,
            ItemRequest,
            ItemForm,
        )
    ),
    tags(
        (name = "health"),
        (name = "categories"),
        (name = "locations"),
        (name = "items")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_inventory_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/categories", "/locations", "/locations/{id}", "/items", "/items/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
