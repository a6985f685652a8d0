//! Domain models shared by the catalog, the HTTP API and the CLI.

pub mod resource;

pub use resource::{CategoryResources, ResourceList, ResourceRecord};
