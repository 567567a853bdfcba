// src/main.rs

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use mailtriage::api::http::http_router;
use mailtriage::config::{SERVICE_NAME, TriageConfig};
use mailtriage::state::create_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TriageConfig::from_env();

    // Initialize tracing
    let level = config.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting {}", SERVICE_NAME);
    info!("Model: {}", config.model);
    if config.anthropic_api_key.is_empty() {
        warn!("ANTHROPIC_API_KEY is not set; classification requests will fail");
    }

    // Spooled uploads live here for the duration of one request each.
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let bind_address = config.bind_address();
    let app_state = create_app_state(config);

    let app = http_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
