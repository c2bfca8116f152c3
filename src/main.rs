mod config;
mod db;
mod entities;
mod error;
mod models;
mod routes;
mod store;
mod templates;

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::{config::Config, store::TheatreStore};

#[derive(Clone)]
pub struct AppState {
    pub store: TheatreStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,marquee=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = TheatreStore::new(db);

    let state = Arc::new(AppState { store });

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
