//! HTTP server for the assistant

pub mod routes;
pub mod state;

use axum::Router;
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AssistantConfig;
use crate::error::{Error, Result};
use state::AppState;

/// Assistant HTTP server
pub struct AssistantServer {
    config: AssistantConfig,
    state: AppState,
}

impl AssistantServer {
    /// Create a new server. Runs document extraction and fails on fatal
    /// configuration errors before anything is bound.
    pub async fn new(config: AssistantConfig) -> Result<Self> {
        Ok(Self::with_state(AppState::new(config).await?))
    }

    /// Create from prebuilt state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config().clone(),
            state,
        }
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .server
            .address()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = build_router(self.state, self.config.server.enable_cors);

        tracing::info!("Starting assistant server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        self.config.server.address()
    }
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let router = routes::routes()
        .with_state(state)
        // Middleware layers (order matters - applied bottom to top)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if !enable_cors {
        return router;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    router.layer(cors)
}
