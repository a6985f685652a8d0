//! Read-only resource catalog.
//!
//! The catalog is built once from a validated [`Seed`] and never mutated
//! afterwards. Clones share the same backing slice, so a single instance can
//! be handed to every request handler without locking. Every query returns
//! owned copies of the records it matched.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::models::{CategoryResources, ResourceList, ResourceRecord};
use crate::seed::Seed;

/// Catalog query errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Resource not found: {id}")]
    NotFound { id: String },
}

/// Immutable, cheaply cloneable view over the seed records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[ResourceRecord]>,
}

impl Catalog {
    pub fn new(seed: Seed) -> Self {
        let records: Arc<[ResourceRecord]> = seed.into_records().into();
        debug!(count = records.len(), "resource catalog initialised");
        Self { records }
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record, in seed order.
    pub fn list_all(&self) -> ResourceList {
        ResourceList {
            total: self.records.len(),
            resources: self.records.to_vec(),
        }
    }

    /// Records whose category equals `category` ignoring case.
    ///
    /// `category` is echoed back unchanged. Unknown or empty input simply
    /// yields no matches.
    pub fn list_by_category(&self, category: &str) -> CategoryResources {
        let wanted = category.to_lowercase();
        let resources: Vec<ResourceRecord> = self
            .records
            .iter()
            .filter(|r| r.category.to_lowercase() == wanted)
            .cloned()
            .collect();

        debug!(category, count = resources.len(), "category query");

        CategoryResources {
            category: category.to_string(),
            count: resources.len(),
            resources,
        }
    }

    /// Exact lookup by numeric id.
    pub fn get_by_id(&self, id: i64) -> Result<ResourceRecord, CatalogError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Lookup by an id in textual form, as received in a URL path.
    ///
    /// Input that does not start with an integer is reported as
    /// [`CatalogError::NotFound`], the same as an unknown id.
    pub fn get_by_raw_id(&self, raw: &str) -> Result<ResourceRecord, CatalogError> {
        match parse_leading_int(raw) {
            Some(id) => self.get_by_id(id).map_err(|_| CatalogError::NotFound {
                id: raw.to_string(),
            }),
            None => {
                debug!(raw, "unparseable resource id");
                Err(CatalogError::NotFound { id: raw.to_string() })
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Seed::default())
    }
}

/// Parse the integer at the start of `raw`.
///
/// Leading whitespace and a single sign are accepted and anything after the
/// digits is ignored, so `"3"`, `" 3"` and `"3abc"` all yield `3`. A `0x` or
/// `0X` prefix switches to base 16 (`"0x3"` is `3`). Returns `None` when no
/// digits are present or the value overflows `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, unsigned),
    };

    let digits_len = body
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&body[..digits_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
