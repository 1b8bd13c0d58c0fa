use std::env;

use anyhow::Result;
use coach_api::build_app;
use coach_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("coach_api");

    let bind = env::var("COACH_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let app = build_app();

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(bind = %bind, "carnivore coach api started");

    axum::serve(listener, app).await?;
    Ok(())
}
