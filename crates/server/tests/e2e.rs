use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use configs::AppConfig;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::{routes, startup};

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
    root: PathBuf,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Use isolated temp dirs for collections and uploads per test
    let root = std::env::temp_dir().join(format!("inventory_e2e_{}", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.data_dir = root.join("data");
    cfg.storage.uploads_dir = root.join("images");
    service::runtime::ensure_env(&cfg.storage.data_dir, &cfg.storage.uploads_dir).await?;

    let state = startup::build_state(&cfg).await?;
    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, root })
}

fn item_form(name: &str) -> Form {
    Form::new()
        .text("categoryId", "c1")
        .text("locationId", "l1")
        .text("name", name.to_string())
}

#[tokio::test]
async fn e2e_multipart_item_with_image() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let photo = b"\x89PNG fake image bytes".to_vec();
    let form = item_form("Hammer")
        .text("description", "claw hammer")
        .part("image", Part::bytes(photo.clone()).file_name("hammer.png").mime_str("image/png")?);
    let res = c.post(format!("{}/items", app.base_url)).multipart(form).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let item = res.json::<Value>().await?;
    let id = item["id"].as_str().unwrap_or_default().to_string();
    let image = item["image"].as_str().unwrap_or_default().to_string();
    assert!(image.ends_with(".png"));
    assert_eq!(item["description"], "claw hammer");

    // uploaded file is served back
    let res = c.get(format!("{}/images/{}", app.base_url, image)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.bytes().await?.to_vec(), photo);

    // PUT replaces text fields but keeps the image
    let res = c
        .put(format!("{}/items/{}", app.base_url, id))
        .json(&json!({"categoryId": "c2", "locationId": "l1", "name": "Big Hammer"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["categoryId"], "c2");
    assert_eq!(updated["image"], image.as_str());
    assert!(updated.get("description").is_none());

    let _ = tokio::fs::remove_dir_all(&app.root).await;
    Ok(())
}

#[tokio::test]
async fn e2e_multipart_without_image_or_required_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/items", app.base_url)).multipart(item_form("Saw")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let item = res.json::<Value>().await?;
    assert!(item.get("image").is_none());

    let form = Form::new()
        .text("name", "Orphan")
        .part("image", Part::bytes(b"data".to_vec()).file_name("orphan.jpg"));
    let res = c.post(format!("{}/items", app.base_url)).multipart(form).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Category ID, Location ID, and Name are required fields");

    // rejected request left no file behind
    let mut entries = tokio::fs::read_dir(app.root.join("images")).await?;
    assert!(entries.next_entry().await?.is_none());

    let _ = tokio::fs::remove_dir_all(&app.root).await;
    Ok(())
}

#[tokio::test]
async fn e2e_concurrent_creates_all_persist() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let requests = (0..10).map(|i| {
        let c = c.clone();
        let url = format!("{}/categories", app.base_url);
        async move { c.post(url).json(&json!({"name": format!("cat-{i}")})).send().await }
    });
    for res in spawn_all(requests).await {
        assert_eq!(res?.status(), HttpStatusCode::CREATED);
    }

    let list = c.get(format!("{}/categories", app.base_url)).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 10);

    let _ = tokio::fs::remove_dir_all(&app.root).await;
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/api-docs/openapi.json", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/items/{id}"].is_object());

    let _ = tokio::fs::remove_dir_all(&app.root).await;
    Ok(())
}

/// Drive a batch of request futures concurrently on the test runtime.
async fn spawn_all<F, T>(futs: impl Iterator<Item = F>) -> Vec<T>
where
    F: std::future::Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handles: Vec<_> = futs.map(tokio::spawn).collect();
    let mut out = Vec::with_capacity(handles.len());
    for h in handles {
        out.push(h.await.expect("request task panicked"));
    }
    out
}
