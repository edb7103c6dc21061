//! The immutable record set behind the page.
//!
//! A [`Catalog`] is validated once when built and never mutated afterwards.
//! Each catalog carries a [`Fingerprint`] of its resources, which is what
//! [`crate::FilteredView`] uses to notice that the catalog changed.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::data;
use crate::error::{CatalogError, Result};
use crate::types::{ResourceRecord, TopicRecord};

/// SHA-256 over every searchable and displayed field of the resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    fn of(resources: &[ResourceRecord]) -> Self {
        let mut hasher = Sha256::new();
        for record in resources {
            for field in [
                &record.id,
                &record.title,
                &record.subtitle,
                &record.level,
                &record.resource_url,
                &record.updated_date,
            ] {
                hasher.update(field.as_bytes());
                hasher.update([0u8]);
            }
            hasher.update(record.estimated_minutes.to_le_bytes());
            hasher.update((record.tags.len() as u64).to_le_bytes());
            for tag in &record.tags {
                hasher.update(tag.as_bytes());
                hasher.update([0u8]);
            }
            hasher.update([0xffu8]);
        }
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Ordered resources and topics, validated and frozen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    resources: Vec<ResourceRecord>,
    topics: Vec<TopicRecord>,
    #[serde(skip)]
    fingerprint: Fingerprint,
}

/// On-disk shape. Omitting `topics` keeps the built-in topics.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    resources: Vec<ResourceRecord>,
    topics: Option<Vec<TopicRecord>>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate resource ids.
    pub fn new(resources: Vec<ResourceRecord>, topics: Vec<TopicRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(resources.len());
        for (idx, record) in resources.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(idx));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self::from_parts(resources, topics))
    }

    /// Skips id validation; only for content known to be well-formed.
    pub(crate) fn from_parts(resources: Vec<ResourceRecord>, topics: Vec<TopicRecord>) -> Self {
        let fingerprint = Fingerprint::of(&resources);
        Self {
            resources,
            topics,
            fingerprint,
        }
    }

    /// Catalog with no resources and no topics.
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// The compiled-in catalog.
    pub fn builtin() -> &'static Catalog {
        &data::BUILTIN
    }

    /// Parse a JSON catalog document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_file(file)
    }

    /// Parse a TOML catalog document (`[[resources]]` / `[[topics]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_file(file)
    }

    /// Load a catalog file, picking the parser from the extension.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(
            path = %path.display(),
            resources = catalog.resources.len(),
            topics = catalog.topics.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn from_file(file: CatalogFile) -> Result<Self> {
        let topics = file
            .topics
            .unwrap_or_else(|| data::BUILTIN.topics.clone());
        Self::new(file.resources, topics)
    }

    /// Resources in display order.
    pub fn resources(&self) -> &[ResourceRecord] {
        &self.resources
    }

    /// Topics in display order.
    pub fn topics(&self) -> &[TopicRecord] {
        &self.topics
    }

    /// Identity of the resource list, for cache invalidation.
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Look up a resource by id.
    pub fn get(&self, id: &str) -> Option<&ResourceRecord> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Non-fatal problems worth fixing before publishing.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for record in &self.resources {
            if NaiveDate::parse_from_str(&record.updated_date, "%Y-%m-%d").is_err() {
                warnings.push(format!(
                    "{}: updated_date `{}` is not YYYY-MM-DD",
                    record.id, record.updated_date
                ));
            }
            if record.estimated_minutes == 0 {
                warnings.push(format!("{}: estimated_minutes is 0", record.id));
            }
            if record.resource_url.trim().is_empty() {
                warnings.push(format!("{}: resource_url is empty", record.id));
            }
        }
        warnings
    }
}

impl Default for Catalog {
    fn default() -> Self {
        data::BUILTIN.clone()
    }
}
