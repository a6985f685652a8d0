//! # mhc_api
//!
//! HTTP API library for the mental health companion.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use axum::Router;
use axum::routing::get;
use mhc_core::catalog::Catalog;
use mhc_core::seed::{Seed, SeedError};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ApiConfig;
use crate::handlers::{fallback, resources};

/// Shared application state passed to all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Read-only resource catalog.
    pub catalog: Catalog,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the state, loading the catalog seed named by `config`.
    pub fn from_config(config: ApiConfig) -> Result<Self, SeedError> {
        let seed = Seed::load(config.catalog_path.as_deref())?;
        let source = config
            .catalog_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".into());
        info!(records = seed.len(), %source, "catalog seed loaded");
        Ok(Self {
            catalog: Catalog::new(seed),
            config,
        })
    }
}

/// Resource routes, relative to the mount path.
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(routes::GET_RESOURCES, get(resources::list_resources_handler))
        .route(
            routes::GET_RESOURCES_CATEGORY,
            get(resources::resources_by_category_handler),
        )
        .route(
            routes::GET_RESOURCES_CATEGORY_SLASH,
            get(resources::resources_by_category_handler),
        )
        .route(
            routes::GET_RESOURCES_CATEGORY_EMPTY,
            get(resources::empty_category_handler),
        )
        .route(routes::GET_RESOURCES_ID, get(resources::get_resource_handler))
        .route(routes::GET_RESOURCES_ID_SLASH, get(resources::get_resource_handler))
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mount = state.config.normalized_mount_path();
    let app = if mount.is_empty() {
        resource_routes()
    } else {
        Router::new().nest(&mount, resource_routes())
    };

    app.fallback(fallback::not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
