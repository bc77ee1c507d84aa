//! Row classification: which identities are "active" in an export, and the
//! first-seen row per identity used as content fallback in the report.

use std::collections::HashSet;

use crate::core::first_seen::FirstSeenMap;
use crate::models::record::{Dataset, Record};

/// Decides whether a category value marks a row as active.
#[derive(Debug, Clone)]
pub enum ActiveRule {
    /// Trim and lowercase the cell, then test membership.
    AnyOf(HashSet<String>),
    /// Literal comparison against the raw cell value.
    Equals(String),
}

impl ActiveRule {
    /// Membership rule over the given category names (stored lowercased).
    pub fn any_of(values: &[&str]) -> Self {
        ActiveRule::AnyOf(values.iter().map(|v| v.to_lowercase()).collect())
    }

    pub fn equals(value: &str) -> Self {
        ActiveRule::Equals(value.to_string())
    }

    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ActiveRule::AnyOf(set) => set.contains(&raw.trim().to_lowercase()),
            ActiveRule::Equals(expected) => raw == expected.as_str(),
        }
    }
}

/// Column wiring plus activity rule for one export.
#[derive(Debug, Clone)]
pub struct Classifier {
    identity_column: String,
    category_column: String,
    rule: ActiveRule,
}

/// Result of classifying one export.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Identities with at least one active row.
    pub active: HashSet<String>,
    /// First row seen per identity, active or not.
    pub fallback: FirstSeenMap<Record>,
}

impl Classification {
    pub fn is_active(&self, identity: &str) -> bool {
        self.active.contains(identity)
    }
}

impl Classifier {
    pub fn new(identity_column: &str, category_column: &str, rule: ActiveRule) -> Self {
        Self {
            identity_column: identity_column.to_string(),
            category_column: category_column.to_string(),
            rule,
        }
    }

    /// Walk the rows in input order. Rows with a blank identity are skipped
    /// entirely; every surviving row feeds the fallback map, so an identity
    /// keeps its first row even when a later row is the active one.
    pub fn classify(&self, dataset: &Dataset) -> Classification {
        let mut result = Classification::default();

        for record in &dataset.records {
            let identity = record.get(&self.identity_column).trim();
            if identity.is_empty() {
                continue;
            }
            if self.rule.matches(record.get(&self.category_column)) {
                result.active.insert(identity.to_string());
            }
            result.fallback.insert_if_absent(identity, record.clone());
        }

        result
    }
}
