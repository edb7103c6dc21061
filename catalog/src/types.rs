//! Records rendered by the landing page.
//!
//! These types are designed to be:
//!
//! - **Serializable** - catalogs can be loaded from JSON or TOML via serde
//! - **Clone-friendly** - UI components take owned copies
//! - **Display-only** - nothing here is validated beyond what [`crate::Catalog`] checks
//!
//! # Example
//!
//! ```rust
//! use techmentorlab_catalog::types::ResourceRecord;
//!
//! let record: ResourceRecord = serde_json::from_str(r#"{
//!     "id": "helm-101",
//!     "title": "Helm Charts",
//!     "subtitle": "Templates • Values • Releases",
//!     "level": "Intermediate",
//!     "estimated_minutes": 15,
//!     "resource_url": "/pdfs/helm.pdf",
//!     "updated_date": "2026-03-01"
//! }"#).unwrap();
//!
//! // `tags` is optional (missing or null) and defaults to empty
//! assert!(record.tags.is_empty());
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// One downloadable item in the library.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Stable identifier, unique within a catalog
    pub id: String,
    /// Headline shown on the card
    pub title: String,
    /// Secondary line under the title
    pub subtitle: String,
    /// Difficulty label, e.g. "Beginner" (free-form)
    pub level: String,
    /// Rough reading time in minutes
    #[serde(alias = "minutes")]
    pub estimated_minutes: u32,
    /// Tags in display order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    /// Location of the PDF, relative or absolute
    #[serde(alias = "url")]
    pub resource_url: String,
    /// Last update, display-only (`YYYY-MM-DD` by convention)
    #[serde(alias = "updated")]
    pub updated_date: String,
}

impl ResourceRecord {
    /// Card footer line: `~25 min • Updated 2026-02-09`.
    pub fn meta_line(&self) -> String {
        format!("~{} min • Updated {}", self.estimated_minutes, self.updated_date)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Symbolic glyph name; the presentation layer maps each to SVG data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    /// Document / notes
    FileText,
    /// Launch / real-world usage
    Rocket,
    /// Security / enterprise
    Shield,
    /// Tools and utilities
    Wrench,
    /// Learning material
    BookOpen,
    /// Site brand mark
    Globe,
    /// Opens in a new tab
    ExternalLink,
    /// Save locally
    Download,
    /// Search input
    Search,
}

impl IconRef {
    /// Human-readable name, used as the SVG accessible label.
    pub fn name(self) -> &'static str {
        match self {
            IconRef::FileText => "file text",
            IconRef::Rocket => "rocket",
            IconRef::Shield => "shield",
            IconRef::Wrench => "wrench",
            IconRef::BookOpen => "book",
            IconRef::Globe => "globe",
            IconRef::ExternalLink => "external link",
            IconRef::Download => "download",
            IconRef::Search => "search",
        }
    }
}

/// A card in the topics grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Topic name
    pub title: String,
    /// One-line pitch
    #[serde(alias = "desc")]
    pub description: String,
    /// Glyph shown next to the title
    pub icon: IconRef,
}

impl TopicRecord {
    /// URL-safe slug for the pre-rendered topic page.
    ///
    /// Lower-cased ASCII alphanumerics, every other run collapsed to `-`.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}

/// Branding shown in the nav bar and hero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Site name
    pub name: String,
    /// Short line under the name
    pub tagline: String,
    /// Hero paragraph
    pub description: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "TechMentorLab".into(),
            tagline: "Visual, practical tech notes — built for busy engineers.".into(),
            description: "Learn Docker, Kubernetes, OpenShift, DevOps, and cloud concepts \
                          with diagrams, cheat sheets, and downloadable PDFs."
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tags_default_to_empty() {
        let json = r#"{
            "id": "x",
            "title": "T",
            "subtitle": "S",
            "level": "Beginner",
            "estimated_minutes": 5,
            "resource_url": "/pdfs/x.pdf",
            "updated_date": "2026-01-01"
        }"#;
        let record: ResourceRecord = serde_json::from_str(json).expect("parse record");
        assert!(record.tags.is_empty());
    }

    #[test]
    fn null_tags_default_to_empty() {
        let json = r#"{
            "id": "x",
            "title": "T",
            "subtitle": "S",
            "level": "Beginner",
            "estimated_minutes": 5,
            "tags": null,
            "resource_url": "/pdfs/x.pdf",
            "updated_date": "2026-01-01"
        }"#;
        let record: ResourceRecord = serde_json::from_str(json).expect("parse record");
        assert!(record.tags.is_empty());
    }

    #[test]
    fn accepts_short_field_aliases() {
        let json = r#"{
            "id": "x",
            "title": "T",
            "subtitle": "S",
            "level": "Advanced",
            "minutes": 40,
            "tags": ["Docker"],
            "url": "/pdfs/x.pdf",
            "updated": "2026-01-01"
        }"#;
        let record: ResourceRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record.estimated_minutes, 40);
        assert_eq!(record.resource_url, "/pdfs/x.pdf");
        assert_eq!(record.updated_date, "2026-01-01");
    }

    #[test]
    fn meta_line_format() {
        let record = ResourceRecord {
            estimated_minutes: 25,
            updated_date: "2026-02-09".into(),
            ..Default::default()
        };
        assert_eq!(record.meta_line(), "~25 min • Updated 2026-02-09");
    }

    #[test]
    fn icon_ref_uses_kebab_case() {
        let icon: IconRef = serde_json::from_str("\"file-text\"").expect("parse icon");
        assert_eq!(icon, IconRef::FileText);
        assert_eq!(
            serde_json::to_string(&IconRef::ExternalLink).expect("serialize icon"),
            "\"external-link\""
        );
    }

    #[test]
    fn topic_slug_collapses_punctuation() {
        let topic = TopicRecord {
            title: "Tools (Coming Soon)".into(),
            description: String::new(),
            icon: IconRef::Wrench,
        };
        assert_eq!(topic.slug(), "tools-coming-soon");

        let topic = TopicRecord {
            title: "Kubernetes".into(),
            description: String::new(),
            icon: IconRef::Rocket,
        };
        assert_eq!(topic.slug(), "kubernetes");
    }
}
