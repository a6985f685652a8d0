//! API server configuration.

use std::path::PathBuf;

/// Default listener address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Configuration for the API server.
#[derive(Clone, Debug, Default)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Prefix the resource routes are mounted under. Empty serves them at
    /// the root.
    pub mount_path: String,
    /// Optional JSON/YAML file replacing the built-in catalog seed.
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable       | Default          |
    /// |----------------|------------------|
    /// | `BIND_ADDR`    | `127.0.0.1:5000` |
    /// | `MOUNT_PATH`   | *(root)*         |
    /// | `CATALOG_PATH` | built-in seed    |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into()),
            mount_path: std::env::var("MOUNT_PATH").unwrap_or_default(),
            catalog_path: std::env::var_os("CATALOG_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Mount path with a single leading slash and no trailing slash, or an
    /// empty string for the root.
    pub fn normalized_mount_path(&self) -> String {
        let trimmed = self.mount_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}
