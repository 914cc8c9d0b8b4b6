use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use crate::edition::{format_display_date, CanonicalId, CodecError};
use crate::issue::models::IssueResolution;
use crate::issue::probe::IssueProbe;

#[derive(Clone)]
pub struct IssueResolver {
    probe: Arc<dyn IssueProbe + Send + Sync>,
    fallback_url: String,
}

impl IssueResolver {
    pub fn new(probe: Arc<dyn IssueProbe + Send + Sync>, fallback_url: impl Into<String>) -> Self {
        Self {
            probe,
            fallback_url: fallback_url.into(),
        }
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    /// Resolves today's issue with one existence probe. Any probe failure
    /// degrades to the placeholder with a warning.
    pub async fn resolve_today(&self, today: NaiveDate) -> IssueResolution {
        let canonical_id = CanonicalId::encode(today);
        let filename = canonical_id.filename();
        let path = canonical_id.issue_path();
        let date_label = format_display_date(today);

        match self.probe.probe(&path).await {
            Ok(()) => {
                info!("Today's issue {} is available", filename);
                IssueResolution {
                    url: path,
                    canonical_id,
                    date_label,
                    warning: None,
                }
            }
            Err(e) => {
                warn!(
                    "Today's issue {} unavailable ({}), serving {}",
                    filename, e, self.fallback_url
                );
                IssueResolution {
                    url: self.fallback_url.clone(),
                    canonical_id,
                    date_label,
                    warning: Some(missing_issue_warning(&filename)),
                }
            }
        }
    }

    /// Resolves an issue picked from the archive. Archive entries are
    /// displayed directly, without probing.
    pub fn resolve_selected(
        &self,
        canonical_id: &CanonicalId,
    ) -> Result<IssueResolution, CodecError> {
        Ok(IssueResolution {
            url: canonical_id.issue_path(),
            date_label: canonical_id.display_label()?,
            canonical_id: canonical_id.clone(),
            warning: None,
        })
    }
}

pub fn missing_issue_warning(filename: &str) -> String {
    format!(
        "Today's e-paper ({}) is not yet available. Showing demo.",
        filename
    )
}
