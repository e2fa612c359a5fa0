// ABOUTME: Exercise log server binary
// ABOUTME: Loads configuration, opens the SQLite store, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! # Exercise Log Server Binary
//!
//! Starts the exercise log REST API. Configuration comes from the
//! environment; the flags below override individual values.

use anyhow::{Context, Result};
use clap::Parser;
use exercise_log_server::{
    config::{DatabaseUrl, ServerConfig},
    database::SqliteExerciseStore,
    logging,
    resources::ServerResources,
    server::ExerciseServer,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "exercise-server")]
#[command(about = "Exercise Log API - record strength-training sets over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override database URL (`sqlite:<path>` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&url).context("Invalid --database-url")?;
    }

    logging::init_from_config(&config)?;
    info!("{}", config.summary());

    let store = SqliteExerciseStore::connect(&config.database)
        .await
        .context("Failed to open exercise store")?;
    info!(
        "Database initialized successfully: {}",
        config.database.url
    );

    let resources = Arc::new(ServerResources::new(Arc::new(store), config));
    if let Err(e) = ExerciseServer::new(resources).run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
