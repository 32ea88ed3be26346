//! HTTP preview server
//!
//! Every request reloads the sidebar file and renders it from scratch, so
//! edits show up on refresh and no render state is carried between requests.

use crate::config::Config;
use crate::nav::{self, NavTree};
use crate::render;
use crate::transport::cli::link_policy;
use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared, read-only server state
#[derive(Debug, Clone)]
pub struct AppState {
    pub sidebar: PathBuf,
    pub title: String,
    pub routed_links: bool,
}

impl AppState {
    pub fn new(config: &Config, sidebar: PathBuf) -> Self {
        Self {
            sidebar,
            title: config.site.title.clone(),
            routed_links: config.render.routed_links,
        }
    }

    /// Read and parse the sidebar off the async runtime
    async fn load(&self) -> Result<NavTree, AppError> {
        let path = self.sidebar.clone();
        tokio::task::spawn_blocking(move || nav::load_file(&path))
            .await
            .map_err(|e| AppError(e.into()))?
            .map_err(|e| AppError(e.into()))
    }
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    sidebar: String,
}

/// Load or parse failure, surfaced as a 500 with the error text
struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Failed to render sidebar: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render sidebar: {:#}", self.0),
        )
            .into_response()
    }
}

/// Build the router; exposed so tests can bind their own listener
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/sidebar", get(sidebar_fragment))
        .route("/sidebar.json", get(sidebar_json))
        .route("/health", get(health_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(Arc::new(state))
}

pub async fn run_http_server(host: &str, port: u16, state: AppState) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Preview server listening on http://{}, sidebar: {:?}",
        addr,
        state.sidebar
    );
    axum::serve(listener, router(state)).await?;

    Ok(())
}

async fn index_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let tree = state.load().await?;
    let fragment = render::sidebar_html(&tree, link_policy(state.routed_links));
    Ok(Html(render::page(&state.title, &fragment)))
}

async fn sidebar_fragment(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let tree = state.load().await?;
    Ok(Html(render::sidebar_html(
        &tree,
        link_policy(state.routed_links),
    )))
}

async fn sidebar_json(State(state): State<Arc<AppState>>) -> Result<Json<NavTree>, AppError> {
    Ok(Json(state.load().await?))
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sidebar: state.sidebar.display().to_string(),
    })
}
