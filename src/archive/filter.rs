use serde::{Deserialize, Serialize};

use crate::archive::models::{ArchiveEntry, ArchiveQuery};

pub const EMPTY_RESULT_MESSAGE: &str = "No e-papers found for the selected criteria";

/// Search and month/year constraints over the archive. The default value is
/// the cleared filter and matches every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveFilter {
    pub search: String,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl ArchiveFilter {
    pub fn new(search: impl Into<String>, month: Option<&str>, year: Option<&str>) -> Self {
        Self {
            search: search.into(),
            month: non_empty(month),
            year: non_empty(year),
        }
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.month.is_none() && self.year.is_none()
    }

    pub fn matches_search(&self, entry: &ArchiveEntry) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        entry.display_label.to_lowercase().contains(&needle)
            || entry.canonical_id.as_str().to_lowercase().contains(&needle)
    }

    pub fn matches_month(&self, entry: &ArchiveEntry) -> bool {
        self.month
            .as_deref()
            .map_or(true, |month| entry.canonical_id.month() == month)
    }

    pub fn matches_year(&self, entry: &ArchiveEntry) -> bool {
        self.year
            .as_deref()
            .map_or(true, |year| entry.canonical_id.year() == year)
    }

    pub fn matches(&self, entry: &ArchiveEntry) -> bool {
        self.matches_search(entry) && self.matches_month(entry) && self.matches_year(entry)
    }

    /// Returns the matching entries in their original order.
    pub fn apply(&self, entries: &[ArchiveEntry]) -> Vec<ArchiveEntry> {
        entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }
}

impl From<ArchiveQuery> for ArchiveFilter {
    fn from(query: ArchiveQuery) -> Self {
        Self::new(
            query.q.unwrap_or_default(),
            query.month.as_deref(),
            query.year.as_deref(),
        )
    }
}

pub fn filter(
    entries: &[ArchiveEntry],
    search: &str,
    month: Option<&str>,
    year: Option<&str>,
) -> Vec<ArchiveEntry> {
    ArchiveFilter::new(search, month, year).apply(entries)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
