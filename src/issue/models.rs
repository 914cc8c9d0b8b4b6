use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::edition::CanonicalId;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct IssueResolution {
    #[schema(example = "/public/20-07-25.pdf")]
    pub url: String,
    pub canonical_id: CanonicalId,
    #[schema(example = "Sunday, 20 July 2025")]
    pub date_label: String,
    /// Set when the requested issue was missing and the placeholder is served.
    #[schema(example = "Today's e-paper (20-07-25.pdf) is not yet available. Showing demo.")]
    pub warning: Option<String>,
}

impl IssueResolution {
    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}
