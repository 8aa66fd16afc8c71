//! Assistant server binary
//!
//! Run with: cargo run -p robosoc-assistant --bin robosoc-assistant-server

use robosoc_assistant::{config::AssistantConfig, server::AssistantServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may come from the real environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "robosoc_assistant=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                      RoboAssistant                        ║
║           Robotics Society NITH chat backend              ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration
    let config = AssistantConfig::load().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - Max tokens: {}", config.llm.max_tokens);
    tracing::info!("  - Static directory: {}", config.documents.static_root().display());
    for source in &config.documents.sources {
        tracing::info!("  - Document: {} ({})", source.label, source.path.display());
    }

    // Extract documents and build the system prompt before accepting traffic
    let server = AssistantServer::new(config).await.map_err(|e| {
        tracing::error!("Startup failed: {}", e);
        e
    })?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/ping", server.address());
    println!("\nEndpoints:");
    println!("  GET  /ping - Health check");
    println!("  POST /     - Chat ({{\"message\": \"...\"}})");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
