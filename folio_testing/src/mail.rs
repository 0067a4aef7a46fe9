use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing, Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

const SEND_ROUTE: &str = "/emails";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting mail provider testing server on {host}:{port}");
    info!("Send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Api key: {api_key:?}");
    info!("Every authorized message is accepted and logged, nothing is delivered");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(api_key: String) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(api_key.into())
}

async fn send(
    state: State<Arc<str>>,
    headers: HeaderMap,
    Json(message): Json<serde_json::Value>,
) -> Result<Json<SendResponse>, StatusCode> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|key| key == &**state);

    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let id = Uuid::new_v4();
    info!("Received message {id}: {message:#}");

    Ok(Json(SendResponse { id }))
}

#[derive(Serialize)]
struct SendResponse {
    id: Uuid,
}
