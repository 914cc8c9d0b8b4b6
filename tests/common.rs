#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use flash_epaper_server::issue::{IssueProbe, ProbeError};
use flash_epaper_server::{AppConfig, AppState};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory stand-in for the content origin.
pub struct MockIssueProbe {
    published: Mutex<HashSet<String>>,
    probed: Mutex<Vec<String>>,
}

impl MockIssueProbe {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(HashSet::new()),
            probed: Mutex::new(Vec::new()),
        }
    }

    pub async fn publish(&self, path: &str) {
        self.published.lock().await.insert(path.to_string());
    }

    pub async fn probed_paths(&self) -> Vec<String> {
        self.probed.lock().await.clone()
    }
}

#[async_trait]
impl IssueProbe for MockIssueProbe {
    async fn probe(&self, path: &str) -> Result<(), ProbeError> {
        self.probed.lock().await.push(path.to_string());
        if self.published.lock().await.contains(path) {
            Ok(())
        } else {
            Err(ProbeError::Status(404))
        }
    }
}

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()
}

/// Config pinned to 2025-07-20 so responses are deterministic.
pub fn test_config() -> AppConfig {
    AppConfig {
        reference_date: Some(reference_date()),
        ..AppConfig::default()
    }
}

pub fn test_app_state(probe: Arc<MockIssueProbe>) -> AppState {
    AppState::with_probe(test_config(), probe)
}
