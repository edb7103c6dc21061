//! Free-text search over the resource list.
//!
//! The filter is a pure function of `(query, resources)`:
//!
//! 1. the query is trimmed and lower-cased ([`normalize_query`]);
//! 2. an empty query keeps every record, in order;
//! 3. otherwise a record is kept when its [`haystack`] contains the query as
//!    a contiguous substring.
//!
//! Matching is substring, not token: "kube" matches "Kubernetes", and a query
//! may run across field boundaries ("orchestration docker").

use crate::types::ResourceRecord;

/// Trim surrounding whitespace and lower-case.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Title, subtitle, level and tags joined by single spaces, lower-cased.
pub fn haystack(record: &ResourceRecord) -> String {
    let mut hay = String::with_capacity(
        record.title.len()
            + record.subtitle.len()
            + record.level.len()
            + record.tags.iter().map(|t| t.len() + 1).sum::<usize>()
            + 2,
    );
    hay.push_str(&record.title);
    hay.push(' ');
    hay.push_str(&record.subtitle);
    hay.push(' ');
    hay.push_str(&record.level);
    for tag in &record.tags {
        hay.push(' ');
        hay.push_str(tag);
    }
    hay.to_lowercase()
}

/// Whether `record` matches an already-normalized query.
pub fn matches_normalized(record: &ResourceRecord, normalized: &str) -> bool {
    normalized.is_empty() || haystack(record).contains(normalized)
}

/// Positions of the matching records, ascending.
pub fn filter_indices(query: &str, resources: &[ResourceRecord]) -> Vec<usize> {
    let normalized = normalize_query(query);
    indices_for_normalized(&normalized, resources)
}

pub(crate) fn indices_for_normalized(normalized: &str, resources: &[ResourceRecord]) -> Vec<usize> {
    if normalized.is_empty() {
        return (0..resources.len()).collect();
    }
    resources
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_normalized(record, normalized))
        .map(|(idx, _)| idx)
        .collect()
}

/// Matching records in catalog order.
pub fn filter<'a>(query: &str, resources: &'a [ResourceRecord]) -> Vec<&'a ResourceRecord> {
    filter_indices(query, resources)
        .into_iter()
        .map(|idx| &resources[idx])
        .collect()
}
