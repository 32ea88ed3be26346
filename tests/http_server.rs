//! HTTP preview server tests against a real listener

use docnav::config::Config;
use docnav::transport::http::{router, AppState};
use std::net::SocketAddr;
use std::path::Path;
use tempfile::TempDir;

async fn spawn_server(sidebar: &Path) -> SocketAddr {
    let mut config = Config::default();
    config.site.title = "Test Docs".to_string();
    let state = AppState::new(&config, sidebar.to_path_buf());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_health() {
    let tmp = TempDir::new().unwrap();
    let nav = tmp.path().join("nav.json");
    std::fs::write(&nav, "[]").unwrap();
    let addr = spawn_server(&nav).await;

    let body: serde_json::Value = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["sidebar"], nav.display().to_string());
}

#[tokio::test]
async fn test_index_and_fragment() {
    let tmp = TempDir::new().unwrap();
    let nav = tmp.path().join("nav.json");
    std::fs::write(&nav, r#"[["Intro", "/intro", null]]"#).unwrap();
    let addr = spawn_server(&nav).await;

    let page = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Test Docs</title>"));
    assert!(page.contains("<a class=\"px-3 py-2"));

    let fragment = reqwest::get(format!("http://{}/sidebar", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(fragment.starts_with("<div class=\"relative\">"));
    assert!(fragment.contains("href=\"/intro\""));
}

#[tokio::test]
async fn test_edits_show_up_on_next_request() {
    let tmp = TempDir::new().unwrap();
    let nav = tmp.path().join("nav.json");
    std::fs::write(&nav, r#"[["Intro", "/intro", null]]"#).unwrap();
    let addr = spawn_server(&nav).await;
    let url = format!("http://{}/sidebar.json", addr);

    let first: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
    assert_eq!(first, serde_json::json!([["Intro", "/intro", null]]));

    std::fs::write(&nav, r#"[["Guides", [["Setup", "/setup", null]], null]]"#).unwrap();
    let second: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
    assert_eq!(
        second,
        serde_json::json!([["Guides", [["Setup", "/setup", null]], null]])
    );
}

#[tokio::test]
async fn test_broken_file_is_a_server_error() {
    let tmp = TempDir::new().unwrap();
    let nav = tmp.path().join("nav.json");
    std::fs::write(&nav, "{ not a tree").unwrap();
    let addr = spawn_server(&nav).await;

    let resp = reqwest::get(format!("http://{}/sidebar", addr)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(resp.text().await.unwrap().contains("Invalid JSON navigation tree"));
}
