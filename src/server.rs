// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP boundary: `/search` plus static assets.
//!
//! | Route                          | Response                                 |
//! |--------------------------------|------------------------------------------|
//! | `GET /search?q=..`             | JSON array of snippet strings            |
//! | `GET /search?q=..&detail=true` | JSON array of `{offset,start,end,text}`  |
//! | anything else                  | file from the static directory           |
//!
//! A missing or empty `q` is rejected with 400 before reaching the engine.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServeConfig;
use crate::error::ServerError;
use crate::search::Searcher;

/// Shared, read-only application state.
pub type SharedSearcher = Arc<Searcher>;

pub const MISSING_QUERY: &str = "missing search query in URL params";
pub const ENCODING_FAILURE: &str = "encoding failure";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(default)]
    pub detail: bool,
}

/// Build the router: `/search` and a static-file fallback.
pub fn create_router(searcher: SharedSearcher, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(searcher)
}

pub async fn handle_search(
    State(searcher): State<SharedSearcher>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response(),
    };

    if params.detail {
        json_response(&searcher.search_snippets(query))
    } else {
        json_response(&searcher.search(query))
    }
}

fn json_response<T: Serialize>(body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode search results");
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE).into_response()
        }
    }
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn serve(searcher: SharedSearcher, config: &ServeConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let app = create_router(searcher, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(
        %addr,
        static_dir = %config.static_dir.display(),
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
