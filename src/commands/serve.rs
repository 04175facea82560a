//! HTTP server command.
//!
//! Loads configuration from the environment, applies command-line
//! overrides, opens the store, and runs the axum server until shutdown.

use crate::db::db::Db;
use crate::libs::config::Config;
use crate::server::routes::create_router;
use crate::server::state::AppState;
use crate::server::Server;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind the listener to (overrides TASKD_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides TASKD_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database file (overrides TASKD_DB_PATH)
    #[arg(long)]
    db_path: Option<PathBuf>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(db_path) = args.db_path {
        config.database.path = db_path;
    }

    tracing::debug!("Using database at {}", config.database.path.display());

    let db = Db::open(&config.database.path)?;
    let state = AppState::new(db);
    let router = create_router(state);

    Server::new(config.server).run(router).await
}
