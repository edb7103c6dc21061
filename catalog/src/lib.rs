//! # techmentorlab-catalog
//!
//! Data model and search logic behind the TechMentorLab landing page.
//!
//! The crate has no UI dependency: the Leptos components in
//! `techmentorlab-site` and the `techmentorlab` CLI both build on it.
//!
//! ## Quick Start
//!
//! ```rust
//! use techmentorlab_catalog::{Catalog, search};
//!
//! let catalog = Catalog::builtin();
//! let hits = search::filter("  KUBERNETES ", catalog.resources());
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, "containers-101");
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - records shown on the page (resources, topics, branding)
//! - [`catalog`] - the immutable, validated record set (built-in content included)
//! - [`search`] - query normalization and the substring filter
//! - [`view`] - cached filtered view keyed on (query, catalog)
//! - [`config`] - optional `techmentorlab.toml`
//! - [`error`] - crate error type

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
mod data;
pub mod error;
pub mod search;
pub mod types;
pub mod view;

pub use catalog::{Catalog, Fingerprint};
pub use config::SiteConfig;
pub use error::{CatalogError, Result};
pub use types::{IconRef, ResourceRecord, SiteInfo, TopicRecord};
pub use view::FilteredView;
