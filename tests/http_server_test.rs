use kora_catalog::adapters::http::setup_and_serve;
use kora_catalog::{CatalogService, JsonFileStore, SeedFixture};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::oneshot;

async fn free_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}

async fn wait_until_up(client: &reqwest::Client, base_url: &str) {
    for _ in 0..50 {
        if client
            .get(format!("{}/api/health", base_url))
            .send()
            .await
            .is_ok()
        {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server did not start at {}", base_url);
}

#[tokio::test]
async fn test_end_to_end_over_tcp_with_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path(), "kora_db", "properties");
    let catalog = Arc::new(CatalogService::new(store, SeedFixture::embedded().unwrap()));

    let port = free_port().await;
    let bind_address = format!("127.0.0.1:{}", port);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        setup_and_serve(catalog, &bind_address, async {
            shutdown_rx.await.ok();
        })
        .await
    });

    let client = reqwest::Client::new();
    let base_url = format!("http://127.0.0.1:{}", port);
    wait_until_up(&client, &base_url).await;

    let seeded: Value = client
        .post(format!("{}/api/seed", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seeded["count"], 5);

    let listed: Value = client
        .get(format!("{}/api/properties", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed["properties"].as_array().unwrap().len(), 5);

    let missing = client
        .get(format!("{}/api/properties/PROP-999", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    assert!(temp_dir.path().join("kora_db").join("properties.json").exists());

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
