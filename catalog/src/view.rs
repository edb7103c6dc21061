//! Cached filtered view.
//!
//! [`FilteredView`] owns the derived half of the search state: it remembers
//! the last `(normalized query, catalog fingerprint)` pair and the matching
//! positions, and only re-runs [`crate::search`] when either changes.
//! Queries that differ only in case or surrounding whitespace share an entry.

use tracing::debug;

use crate::catalog::{Catalog, Fingerprint};
use crate::search;
use crate::types::ResourceRecord;

/// Memo of the last filter result.
#[derive(Debug, Default, Clone)]
pub struct FilteredView {
    key: Option<(String, Fingerprint)>,
    indices: Vec<usize>,
    recomputes: u64,
    hits: u64,
}

impl FilteredView {
    /// Empty view; the first lookup always computes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions in `catalog.resources()` matching `query`.
    pub fn indices(&mut self, query: &str, catalog: &Catalog) -> &[usize] {
        let normalized = search::normalize_query(query);
        let fingerprint = catalog.fingerprint();

        let fresh = matches!(
            &self.key,
            Some((q, fp)) if *q == normalized && *fp == fingerprint
        );

        if fresh {
            self.hits += 1;
        } else {
            self.indices = search::indices_for_normalized(&normalized, catalog.resources());
            self.recomputes += 1;
            debug!(
                query = %normalized,
                catalog = %fingerprint,
                matches = self.indices.len(),
                "recomputed filtered view"
            );
            self.key = Some((normalized, fingerprint));
        }

        &self.indices
    }

    /// Matching records in catalog order.
    pub fn resolve<'c>(&mut self, query: &str, catalog: &'c Catalog) -> Vec<&'c ResourceRecord> {
        let resources = catalog.resources();
        self.indices(query, catalog)
            .iter()
            .map(|&idx| &resources[idx])
            .collect()
    }

    /// How many lookups had to run the filter.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// How many lookups were served from the memo.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Forget the memo; the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog_with(tags: &[&str]) -> Catalog {
        Catalog::new(
            vec![ResourceRecord {
                id: "r1".into(),
                title: "Containers".into(),
                subtitle: "Intro".into(),
                level: "Beginner".into(),
                estimated_minutes: 5,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                resource_url: "/pdfs/r1.pdf".into(),
                updated_date: "2026-01-01".into(),
            }],
            vec![],
        )
        .expect("catalog")
    }

    #[test]
    fn repeated_query_is_served_from_memo() {
        let catalog = Catalog::builtin();
        let mut view = FilteredView::new();

        assert_eq!(view.indices("docker", catalog), &[0]);
        assert_eq!(view.indices("docker", catalog), &[0]);
        assert_eq!(view.indices("  DOCKER ", catalog), &[0]);

        assert_eq!(view.recomputes(), 1);
        assert_eq!(view.hits(), 2);
    }

    #[test]
    fn query_change_recomputes() {
        let catalog = Catalog::builtin();
        let mut view = FilteredView::new();

        assert_eq!(view.indices("docker", catalog).len(), 1);
        assert!(view.indices("azure", catalog).is_empty());
        assert_eq!(view.recomputes(), 2);
    }

    #[test]
    fn catalog_change_recomputes() {
        let without = catalog_with(&[]);
        let with = catalog_with(&["Docker"]);
        let mut view = FilteredView::new();

        assert!(view.indices("docker", &without).is_empty());
        assert_eq!(view.indices("docker", &with), &[0]);
        assert_eq!(view.recomputes(), 2);
        assert_eq!(view.hits(), 0);
    }

    #[test]
    fn resolve_matches_pure_filter() {
        let catalog = Catalog::builtin();
        let mut view = FilteredView::new();
        for q in ["", "kube", "beginner", "nothing-here"] {
            assert_eq!(
                view.resolve(q, catalog),
                search::filter(q, catalog.resources()),
                "query {q:?}"
            );
        }
    }

    #[test]
    fn invalidate_forces_recompute() {
        let catalog = Catalog::builtin();
        let mut view = FilteredView::new();
        view.indices("docker", catalog);
        view.invalidate();
        view.indices("docker", catalog);
        assert_eq!(view.recomputes(), 2);
    }
}
