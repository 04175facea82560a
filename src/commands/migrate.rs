//! Database migration command.
//!
//! `taskd migrate` brings the schema up to date and reports the
//! resulting version; `--status` only reports without applying.

use crate::db::migrations;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use anyhow::Result;
use clap::Args;
use rusqlite::Connection;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Report the current schema version without applying migrations
    #[arg(long)]
    status: bool,

    /// SQLite database file (overrides TASKD_DB_PATH)
    #[arg(long)]
    db_path: Option<PathBuf>,
}

pub fn cmd(args: MigrateArgs) -> Result<()> {
    let config = Config::from_env()?;
    let path = args.db_path.unwrap_or(config.database.path);

    let mut conn = Connection::open(&path)?;

    if args.status {
        let version = migrations::get_db_version(&conn)?;
        println!("{}", Message::DatabaseVersion(version));
        if migrations::needs_migration(&conn)? {
            println!("{}", Message::DatabaseNeedsUpdate);
        } else {
            println!("{}", Message::DatabaseUpToDate);
        }
        return Ok(());
    }

    migrations::init_with_migrations(&mut conn)?;
    let version = migrations::get_db_version(&conn)?;
    println!("{}", Message::DatabaseVersion(version));

    Ok(())
}
