use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};

use mergington::errors::{Report, WrapErr};
use mergington::log;

mod config;
mod handlers;
mod routes;
mod services;

use config::Config;
use services::{ActivityServiceInMemory, catalog};

/// State shared by every handler through the `State` extractor.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(activities: ActivityServiceInMemory) -> Self {
        Self {
            activities,
            started_at: Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    mergington::log::setup()?;

    let config = Config::from_env()?;
    log::debug!("Loaded configuration: {:?}", config);

    // Load the catalog
    let activities = match &config.activities_file {
        Some(path) => {
            log::info!("Loading activities from {}", path.display());
            catalog::load(path)?
        }
        None => catalog::seed(),
    };
    log::info!("Serving {} activities", activities.len());

    let state = Arc::new(AppState::new(ActivityServiceInMemory::new(activities)));

    // Setup the routes
    let app = routes::setup_routes(state, &config.static_dir);

    // Setup the server
    let listener = TcpListener::bind(config.addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", config.addr))?;
    log::info!("Starting server on http://{}", config.addr);
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
