// API Server Implementation

use crate::api::{middleware, routes, state::AppState};
use crate::config::CheckerConfig;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// API Server
#[derive(Debug)]
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create new API server
    pub fn new(config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        let state = Arc::new(AppState::new(config)?);

        Ok(Self { state })
    }

    /// Build the router
    ///
    /// Every path and method reaches the status handler.
    pub fn build_router(&self) -> Router {
        Router::new()
            .fallback(routes::status::certificate_status)
            // Add logging
            .layer(middleware::logging_layer())
            // Add shared state
            .with_state(self.state.clone())
    }

    /// Run the server on the configured listen address
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serve requests on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let app = self.build_router();

        info!("certchecker listening on {}", listener.local_addr()?);
        info!(
            "Watching {} (warning window {})",
            self.state.config.watch,
            humantime::format_duration(self.state.config.warning_duration)
        );

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get the application state
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }
}
