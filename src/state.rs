use chrono::NaiveDate;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::issue::{HttpIssueProbe, IssueProbe, IssueResolver};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub resolver: IssueResolver,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.probe_timeout)
            .pool_idle_timeout(std::time::Duration::from_secs(900))
            .user_agent("flash-epaper-server/1.0")
            .build()?;

        let probe = Arc::new(HttpIssueProbe::new(
            http_client,
            config.content_origin.clone(),
        ));

        Ok(Self::with_probe(config, probe))
    }

    /// Builds state around an arbitrary probe, e.g. an in-memory one in tests.
    pub fn with_probe(config: AppConfig, probe: Arc<dyn IssueProbe + Send + Sync>) -> Self {
        let resolver = IssueResolver::new(probe, config.fallback_url.clone());
        AppState {
            config: Arc::new(config),
            resolver,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.config.today()
    }
}
