//! Resource catalog models.
//!
//! Field names match the JSON wire shape served by the API, so the same
//! types are used for seed files and responses.

use serde::{Deserialize, Serialize};

/// A single catalog entry describing one piece of educational or wellness
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Positive, unique and stable identifier.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Free-text label, matched case-insensitively.
    pub category: String,
    /// Target of "read more".
    pub link: String,
}

/// Response of `GET /` — every record in seed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    pub total: usize,
    pub resources: Vec<ResourceRecord>,
}

/// Response of `GET /category/{category}`.
///
/// `category` echoes the caller's input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResources {
    pub category: String,
    pub count: usize,
    pub resources: Vec<ResourceRecord>,
}
