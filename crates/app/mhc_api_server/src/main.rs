//! Resource catalog API server binary.
//!
//! Serves the read-only catalog over HTTP until interrupted.

use std::path::PathBuf;

use clap::Parser;
use mhc_api::config::ApiConfig;
use tracing::info;

/// CLI arguments for the API server. Unset flags fall back to
/// [`ApiConfig::from_env`].
#[derive(Parser, Debug)]
#[command(name = "mhc_api_server", about = "Mental health resource catalog API server")]
struct Args {
    /// Host to bind.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (0 = ephemeral).
    #[arg(long)]
    port: Option<u16>,

    /// Prefix to mount the resource routes under (e.g. `/api/resources`).
    #[arg(long)]
    mount_path: Option<String>,

    /// JSON or YAML file replacing the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl Args {
    /// Overlay explicit flags on the environment-derived config.
    fn into_config(self, mut config: ApiConfig) -> ApiConfig {
        if self.host.is_some() || self.port.is_some() {
            let (env_host, env_port) = config
                .bind_addr
                .rsplit_once(':')
                .map(|(h, p)| (h.to_string(), p.parse().unwrap_or(5000)))
                .unwrap_or_else(|| (config.bind_addr.clone(), 5000));
            let host = self.host.unwrap_or(env_host);
            let port = self.port.unwrap_or(env_port);
            config.bind_addr = format!("{host}:{port}");
        }
        if let Some(mount_path) = self.mount_path {
            config.mount_path = mount_path;
        }
        if let Some(catalog) = self.catalog {
            config.catalog_path = Some(catalog);
        }
        config
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mhc_api=debug,mhc_core=debug,tower_http=debug".into()),
        )
        .init();

    let config = Args::parse().into_config(ApiConfig::from_env());

    info!(
        bind_addr = %config.bind_addr,
        mount_path = %config.normalized_mount_path(),
        "starting mhc_api_server"
    );

    let state = mhc_api::AppState::from_config(config.clone())?;
    let app = mhc_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}
