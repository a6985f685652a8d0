use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("Json::{}", .0)]
    Json(#[from] serde_json::Error),

    #[error("{}", .0)]
    Seed(#[from] mhc_core::seed::SeedError),

    #[error("{}", .0)]
    Catalog(#[from] mhc_core::catalog::CatalogError),

    #[error("Chat task failed: {}", .0)]
    Join(#[from] tokio::task::JoinError),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),
}
