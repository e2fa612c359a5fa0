// ABOUTME: HTTP server assembly and lifecycle for the exercise log API
// ABOUTME: Merges route groups, applies middleware layers, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! # Server
//!
//! [`ExerciseServer::router`] builds the complete application so tests can
//! drive it without a socket; [`ExerciseServer::run`] binds the configured
//! address and serves until Ctrl-C (or SIGTERM on Unix).

use crate::{
    middleware::{propagate_request_id_layer, set_request_id_layer, setup_cors, trace_layer},
    resources::ServerResources,
    routes::{ExerciseRoutes, HealthRoutes},
};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Exercise log HTTP server
pub struct ExerciseServer {
    resources: Arc<ServerResources>,
}

impl ExerciseServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full router with middleware
    ///
    /// Layer order (outermost first): request id assignment, tracing span,
    /// request id propagation onto the response, CORS.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(ExerciseRoutes::routes(Arc::clone(&self.resources)))
            .merge(HealthRoutes::routes(Arc::clone(&self.resources)))
            .layer(setup_cors(&self.resources.config))
            .layer(propagate_request_id_layer())
            .layer(trace_layer())
            .layer(set_request_id_layer())
    }

    /// Bind the configured address and serve until a shutdown signal
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        info!(
            address = %address,
            backend = self.resources.store.backend_info(),
            "Exercise log server listening"
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Exercise log server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
