use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use vetlife::config::AppConfig;
use vetlife::handlers;
use vetlife::models::Catalog;
use vetlife::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(whatsapp_number = %config.whatsapp_number, "clinic WhatsApp configured");

    let state = Arc::new(AppState {
        config: config.clone(),
        catalog: Catalog::default(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::pages::index_page))
        .route("/agendamento", get(handlers::pages::agendamento_page))
        .route(
            "/api/agendamento/opcoes",
            get(handlers::agendamento::get_opcoes),
        )
        .route(
            "/api/contato/whatsapp",
            get(handlers::agendamento::get_contato),
        )
        .route(
            "/api/agendamentos",
            post(handlers::agendamento::create_agendamento),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
