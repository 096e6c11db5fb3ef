//! HTTP endpoint for the voice platform
//!
//! `POST /skill` takes one request envelope and answers with the response
//! envelope. `GET /health` is a liveness probe.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::models::SkillRequest;
use crate::skill::Skill;

/// Routes for the skill endpoint
pub fn router(skill: Arc<Skill>) -> Router {
    Router::new()
        .route("/skill", post(handle_turn))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(skill)
}

async fn health() -> &'static str {
    "OK"
}

async fn handle_turn(
    State(skill): State<Arc<Skill>>,
    Json(request): Json<SkillRequest>,
) -> Response {
    // Forecast fetches block, so the turn runs off the async workers
    match tokio::task::spawn_blocking(move || skill.respond(request)).await {
        Ok(Some(response)) => Json(response).into_response(),
        Ok(None) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::error!("Turn handler did not complete: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Serve the skill until Ctrl-C
pub async fn run(skill: Arc<Skill>, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Skill endpoint listening at http://{}/skill", addr);

    axum::serve(listener, router(skill))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Cannot listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutting down");
        })
        .await
        .context("Server error")?;

    Ok(())
}
