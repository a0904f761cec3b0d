//! AnimalBeats veterinary clinic backend.
//!
//! Layered Axum service: `router` dispatches to `controller` handlers,
//! which call `service` business logic backed by `data` repositories over
//! SeaORM entities. Uploaded images land on local disk via `media` and are
//! served statically. The wire format, including route and payload casing,
//! is Spanish throughout and is pinned by the clients already in the field.

mod config;
mod controller;
mod data;
mod error;
mod media;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use config::Config;
use media::MediaStore;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "animalbeats=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let media = MediaStore::new(&config.upload_dir, &config.app_url);
    let state = AppState::new(db, media, config.jwt_secret.clone());

    let app = router::router(&config.upload_dir).with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
