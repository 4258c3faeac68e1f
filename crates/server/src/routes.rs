use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::repository::{CategoryRepository, ItemRepository, LocationRepository};
use service::RecordStore;

use crate::openapi::ApiDoc;
use crate::uploads::{ImageUploads, MAX_UPLOAD_BYTES};

pub mod categories;
pub mod locations;
pub mod items;

/// Shared handler state: one repository per collection plus the upload target.
#[derive(Clone)]
pub struct ServerState {
    pub categories: Arc<dyn CategoryRepository>,
    pub locations: Arc<dyn LocationRepository>,
    pub items: Arc<dyn ItemRepository>,
    pub uploads: ImageUploads,
}

impl ServerState {
    pub fn new(store: RecordStore, uploads: ImageUploads) -> Self {
        Self {
            categories: store.categories,
            locations: store.locations,
            items: store.items,
            uploads,
        }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: inventory CRUD, uploaded images and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let images = ServeDir::new(state.uploads.dir());

    let api = Router::new()
        .route("/health", get(health))
        .route("/categories", get(categories::list).post(categories::create))
        .route("/locations", get(locations::list).post(locations::create))
        .route(
            "/locations/:id",
            get(locations::get).put(locations::update).delete(locations::delete),
        )
        .route(
            "/items",
            get(items::list)
                .post(items::create)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/items/:id",
            get(items::get).put(items::update).delete(items::delete),
        )
        .with_state(state);

    api.nest_service("/images", images)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
