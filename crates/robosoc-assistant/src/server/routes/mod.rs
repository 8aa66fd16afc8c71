//! HTTP routes for the assistant

pub mod chat;

use axum::{
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Health check reply body
pub const PING_RESPONSE: &str = "Server is running";

/// Build all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // `get` also answers HEAD
        .route("/ping", get(ping))
        .route("/", post(chat::chat))
}

/// GET|HEAD /ping - Health check
async fn ping() -> &'static str {
    PING_RESPONSE
}
