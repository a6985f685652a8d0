//! Catalog seed data — the built-in records and file-based overrides.
//!
//! A [`Seed`] is validated once at start-up and then handed to
//! [`crate::catalog::Catalog::new`]. Nothing in this module is reachable
//! after the catalog has been built.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::ResourceRecord;

/// Errors raised while loading or validating seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON seed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML seed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported seed format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("Invalid seed data: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// A validated, ordered collection of resource records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    records: Vec<ResourceRecord>,
}

impl Seed {
    /// Validate `records` and wrap them. Order is preserved.
    pub fn from_records(records: Vec<ResourceRecord>) -> Result<Self, SeedError> {
        let problems = validate_records(&records);
        if !problems.is_empty() {
            return Err(SeedError::Invalid(problems));
        }
        Ok(Self { records })
    }

    /// Load a seed from a JSON or YAML file holding a top-level array.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let is_yaml = match extension.as_str() {
            "json" => false,
            "yaml" | "yml" => true,
            _ => return Err(SeedError::UnsupportedFormat(path.display().to_string())),
        };

        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let records: Vec<ResourceRecord> = if is_yaml {
            serde_yaml::from_str(&contents)?
        } else {
            serde_json::from_str(&contents)?
        };

        debug!(path = %path.display(), count = records.len(), "loaded seed file");
        Self::from_records(records)
    }

    /// Load from `path` when given, otherwise fall back to the built-in records.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn into_records(self) -> Vec<ResourceRecord> {
        self.records
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            records: default_records(),
        }
    }
}

/// Collect every problem in `records` rather than stopping at the first.
fn validate_records(records: &[ResourceRecord]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        if record.id <= 0 {
            problems.push(format!("record {index}: id must be positive, got {}", record.id));
        }
        if !seen.insert(record.id) {
            problems.push(format!("record {index}: duplicate id {}", record.id));
        }
        for (field, value) in [
            ("title", &record.title),
            ("description", &record.description),
            ("category", &record.category),
        ] {
            if value.trim().is_empty() {
                problems.push(format!("record {index}: {field} must not be empty"));
            }
        }
        if let Err(e) = Url::parse(&record.link) {
            problems.push(format!("record {index}: invalid link '{}': {e}", record.link));
        }
    }

    problems
}

fn record(id: i64, title: &str, description: &str, category: &str, link: &str) -> ResourceRecord {
    ResourceRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        link: link.to_string(),
    }
}

/// The six records served when no seed file is configured.
pub fn default_records() -> Vec<ResourceRecord> {
    vec![
        record(
            1,
            "Understanding Anxiety Disorders",
            "Learn about different types of anxiety disorders and evidence-based treatment options.",
            "Mental Health",
            "https://www.mind.org.uk/information-support/types-of-mental-health-problems/anxiety-and-panic-attacks/",
        ),
        record(
            2,
            "Meditation for Beginners",
            "A comprehensive guide to starting a meditation practice for mental health.",
            "Wellness",
            "https://www.headspace.com/work/meditation",
        ),
        record(
            3,
            "Sleep Better Tonight",
            "Evidence-based techniques to improve sleep quality and manage insomnia.",
            "Sleep",
            "https://www.sleepfoundation.org/sleep-hygiene",
        ),
        record(
            4,
            "Building Healthy Habits",
            "Create sustainable habits that improve mental and physical wellbeing.",
            "Lifestyle",
            "https://www.verywellmind.com/habit-formation-3288897",
        ),
        record(
            5,
            "Stress Management Techniques",
            "Practical techniques to manage daily stress and prevent burnout.",
            "Stress",
            "https://www.apa.org/topics/stress",
        ),
        record(
            6,
            "Social Connection Tips",
            "Build and maintain meaningful relationships for better mental health.",
            "Social",
            "https://www.apa.org/science/about/psa/social-connection",
        ),
    ]
}
