//! HTTP API for a board-game review catalogue.
//!
//! The application follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input
//!   validation, and DTO conversion
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain
//!   model conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **DTO Layer** (`dto/`) - Wire-format request and response bodies
//! - **Error Layer** (`error/`) - Application error types and HTTP response
//!   mapping
//!
//! Supporting modules provide infrastructure: `config` (environment-based
//! configuration), `startup` (database connection and migrations), `state`
//! (shared application state), and `router` (route configuration and API
//! documentation).

mod config;
mod controller;
mod data;
mod dto;
mod error;
mod model;
mod router;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("listening on {}", config.listen_addr);

    axum::serve(listener, router::app(state)).await?;

    Ok(())
}
