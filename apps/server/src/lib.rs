//! # IPNT Server
//!
//! Serves the mesh network site: HTML pages, the `/api/data` JSON endpoint,
//! `/health`, the Scalar API reference at `/api` and static assets.
//!
//! ## Example
//! ```no_run
//! use ipnt_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(5000)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use ipnt::domain::config::ApiConfig;
use ipnt::kernel::server::ApiState;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    fn validate_ssl_config(&self) -> Result<()> {
        let Some(ssl) = &self.cfg.server.ssl else {
            return Ok(());
        };
        if !ssl.cert.exists() {
            anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
        }
        if !ssl.key.exists() {
            anyhow::bail!("SSL key not found at: {}", ssl.key.display());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = ssl.key.metadata()?;
            if metadata.permissions().mode() & 0o077 != 0 {
                warn!(key = %ssl.key.display(), "SSL private key is readable by group/others (should be 600)");
            }
        }
        Ok(())
    }

    /// Consumes the builder, initialises every feature slice and assembles the state.
    ///
    /// # Errors
    /// Returns an error if the SSL files are missing or a slice fails to initialise.
    pub fn build(self) -> Result<Server> {
        self.validate_ssl_config()?;

        if !self.cfg.storage.static_dir.is_dir() {
            warn!(path = %self.cfg.storage.static_dir.display(), "Static directory not found, /assets will 404");
        }

        let slices =
            ipnt::init(&self.cfg).map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;

        let state = ApiState::builder()
            .config(self.cfg)
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state registry")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application router with state applied.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    pub const fn state(&self) -> &ApiState {
        &self.state
    }

    /// Serves until Ctrl+C or SIGTERM, then drains connections.
    ///
    /// # Errors
    /// Returns an error if binding fails or the TLS material cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);
        let app = self.router();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, draining connections");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        if let Some(ssl) = &cfg.server.ssl {
            info!("Listening on https://{address}");

            let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                .await
                .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTPS server failed")?;
        } else {
            info!("Listening on http://{address}");

            axum_server::bind(address)
                .handle(handle)
                .serve(app.into_make_service())
                .await
                .context("HTTP server failed")?;
        }

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
