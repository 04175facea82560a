//! HTTP endpoint layer for the taskd service.
//!
//! Maps HTTP verbs and paths onto task store operations and translates
//! typed errors into status codes. The server itself is a thin axum
//! wrapper with graceful shutdown on SIGINT/SIGTERM.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use crate::libs::config::ServerConfig;
use crate::libs::messages::Message;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Binds the listener and serves until a shutdown signal arrives.
    pub async fn run(self, router: Router) -> Result<()> {
        let address = self.config.socket_addr();

        tracing::info!("{}", Message::ServerStarting(address.clone()));

        let listener = TcpListener::bind(&address).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("{}", Message::ServerStopped);

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
