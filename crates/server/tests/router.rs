use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use configs::AppConfig;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes, startup};

struct TestApp {
    router: Router,
    cfg: AppConfig,
    root: PathBuf,
}

impl TestApp {
    async fn new() -> anyhow::Result<Self> {
        let root = std::env::temp_dir().join(format!("inventory_router_{}", Uuid::new_v4()));
        let mut cfg = AppConfig::default();
        cfg.storage.data_dir = root.join("data");
        cfg.storage.uploads_dir = root.join("images");
        let state = startup::build_state(&cfg).await?;
        let router = routes::build_router(state, CorsLayer::very_permissive());
        Ok(Self { router, cfg, root })
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&b)?))?,
            None => builder.body(Body::empty())?,
        };
        let res = self.router.clone().oneshot(req).await?;
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
        Ok((status, value))
    }

    async fn cleanup(self) {
        let _ = tokio::fs::remove_dir_all(&self.root).await;
    }
}

#[tokio::test]
async fn health_ok() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let (status, body) = app.send("GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn categories_create_and_list() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, created) = app.send("POST", "/categories", Some(json!({"name": "Tools"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["name"], "Tools");
    assert!(created.get("description").is_none());

    let (status, list) = app.send("GET", "/categories", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([{"id": id, "name": "Tools"}]));

    let (status, err) = app.send("POST", "/categories", Some(json!({"description": "x"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err, json!({"error": "Name is a required field"}));

    // categories have no per-id routes
    let (status, _) = app.send("DELETE", &format!("/categories/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn locations_full_lifecycle() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, shelf) = app
        .send("POST", "/locations", Some(json!({"name": "Shelf", "description": "by the door"})))
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = shelf["id"].as_str().unwrap_or_default().to_string();

    // list hides the description
    let (_, list) = app.send("GET", "/locations", None).await?;
    assert_eq!(list, json!([{"id": id, "name": "Shelf"}]));

    let (status, full) = app.send("GET", &format!("/locations/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(full["description"], "by the door");

    // PUT without description clears it
    let (status, updated) = app
        .send("PUT", &format!("/locations/{id}"), Some(json!({"name": "Big Shelf"})))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": id, "name": "Big Shelf"}));

    let (status, _) = app.send("PUT", &format!("/locations/{id}"), Some(json!({"description": "x"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, err) = app.send("PUT", "/locations/missing", Some(json!({"name": "X"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err, json!({"error": "Location not found"}));

    let (status, msg) = app.send("DELETE", &format!("/locations/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg, json!({"message": "Location deleted successfully"}));

    let (status, _) = app.send("DELETE", &format!("/locations/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.send("GET", &format!("/locations/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn items_json_create_update_delete() -> anyhow::Result<()> {
    let app = TestApp::new().await?;

    let (status, err) = app
        .send("POST", "/items", Some(json!({"categoryId": "c1", "name": "Hammer"})))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Category ID, Location ID, and Name are required fields");

    let (status, hammer) = app
        .send("POST", "/items", Some(json!({"categoryId": "c1", "locationId": "l1", "name": "Hammer"})))
        .await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = hammer["id"].as_str().unwrap_or_default().to_string();
    assert!(hammer.get("image").is_none());

    let (status, updated) = app
        .send(
            "PUT",
            &format!("/items/{id}"),
            Some(json!({"categoryId": "c1", "locationId": "l1", "name": "Big Hammer"})),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Big Hammer");

    let (_, fetched) = app.send("GET", &format!("/items/{id}"), None).await?;
    assert_eq!(fetched["categoryId"], "c1");
    assert_eq!(fetched["locationId"], "l1");

    let (_, list) = app.send("GET", "/items", None).await?;
    assert_eq!(list, json!([{"id": id, "name": "Big Hammer"}]));

    let (status, msg) = app.send("DELETE", &format!("/items/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(msg, json!({"message": "Item deleted successfully"}));

    let (status, err) = app.send("GET", &format!("/items/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err, json!({"error": "Item not found"}));

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn corrupt_collection_yields_500() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    tokio::fs::write(app.cfg.storage.items_path(), "not json").await?;

    let (status, body) = app.send("GET", "/items", None).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal Server Error"}));

    // other collections are unaffected
    let (status, _) = app.send("GET", "/locations", None).await?;
    assert_eq!(status, StatusCode::OK);

    app.cleanup().await;
    Ok(())
}

#[tokio::test]
async fn malformed_json_body_is_rejected() -> anyhow::Result<()> {
    let app = TestApp::new().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/locations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))?;
    let res = app.router.clone().oneshot(req).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // nothing was written
    let (_, list) = app.send("GET", "/locations", None).await?;
    assert_eq!(list, json!([]));

    app.cleanup().await;
    Ok(())
}
