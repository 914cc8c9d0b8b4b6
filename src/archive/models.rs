use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::edition::{format_display_date, CanonicalId};

/// One day's issue in the rolling archive.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct ArchiveEntry {
    #[schema(value_type = String, example = "2025-07-20")]
    pub iso_date: NaiveDate,
    pub canonical_id: CanonicalId,
    #[schema(example = "20-07-25.pdf")]
    pub filename: String,
    #[schema(example = "Sunday, 20 July 2025")]
    pub display_label: String,
    #[schema(example = 8)]
    pub page_count: u32,
}

impl ArchiveEntry {
    pub fn new(date: NaiveDate, page_count: u32) -> Self {
        let canonical_id = CanonicalId::encode(date);
        Self {
            iso_date: date,
            filename: canonical_id.filename(),
            display_label: format_display_date(date),
            canonical_id,
            page_count,
        }
    }
}

#[derive(Debug, Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArchiveQuery {
    /// Case-insensitive text matched against the label or the `DD-MM-YY` id.
    pub q: Option<String>,
    /// Two-digit month, `01` to `12`.
    pub month: Option<String>,
    /// Two-digit year, e.g. `25`.
    pub year: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArchiveResponse {
    #[schema(value_type = String, example = "2025-07-20")]
    pub reference_date: NaiveDate,
    pub total: usize,
    pub entries: Vec<ArchiveEntry>,
    #[schema(example = "No e-papers found for the selected criteria")]
    pub empty_message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct FilterOption {
    #[schema(example = "07")]
    pub value: String,
    #[schema(example = "July")]
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FilterOptionsResponse {
    pub months: Vec<FilterOption>,
    pub years: Vec<FilterOption>,
}
