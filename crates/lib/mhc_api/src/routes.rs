//! Route path constants for the resource endpoints.
//!
//! Paths are relative to [`crate::config::ApiConfig::mount_path`]. Each
//! parameterised route also answers with a trailing slash.

pub const GET_RESOURCES: &str = "/";
pub const GET_RESOURCES_CATEGORY: &str = "/category/{category}";
pub const GET_RESOURCES_CATEGORY_SLASH: &str = "/category/{category}/";
/// `/category/` with no name is looked up as the id `"category"`.
pub const GET_RESOURCES_CATEGORY_EMPTY: &str = "/category/";
pub const GET_RESOURCES_ID: &str = "/{id}";
pub const GET_RESOURCES_ID_SLASH: &str = "/{id}/";
