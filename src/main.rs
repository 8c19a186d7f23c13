use anyhow::Context;

use todo_api_rust::state::AppState;
use todo_api_rust::{app, config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("starting Todo API in {:?} mode", config.environment);

    let state = AppState::from_config(config).await?;
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("🚀 Todo API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;

    Ok(())
}
