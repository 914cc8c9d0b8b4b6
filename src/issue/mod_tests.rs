use super::*;
use crate::edition::CanonicalId;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

struct RecordingProbe {
    status: Option<u16>,
    seen: Mutex<Vec<String>>,
}

impl RecordingProbe {
    fn answering(status: Option<u16>) -> Arc<Self> {
        Arc::new(Self {
            status,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl IssueProbe for RecordingProbe {
    async fn probe(&self, path: &str) -> Result<(), ProbeError> {
        self.seen.lock().unwrap().push(path.to_string());
        match self.status {
            Some(code) if (200..300).contains(&code) => Ok(()),
            Some(code) => Err(ProbeError::Status(code)),
            None => Err(ProbeError::Status(0)),
        }
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()
}

#[tokio::test]
async fn test_resolve_today_when_published() {
    let probe = RecordingProbe::answering(Some(200));
    let resolver = IssueResolver::new(probe.clone(), "/demo-epaper.pdf");

    let resolution = resolver.resolve_today(today()).await;

    assert_eq!(resolution.url, "/public/20-07-25.pdf");
    assert_eq!(resolution.canonical_id.as_str(), "20-07-25");
    assert_eq!(resolution.date_label, "Sunday, 20 July 2025");
    assert!(resolution.warning.is_none());
    assert!(!resolution.is_fallback());
    assert_eq!(*probe.seen.lock().unwrap(), vec!["/public/20-07-25.pdf".to_string()]);
}

#[tokio::test]
async fn test_resolve_today_falls_back_on_missing_issue() {
    let probe = RecordingProbe::answering(Some(404));
    let resolver = IssueResolver::new(probe.clone(), "/demo-epaper.pdf");

    let resolution = resolver.resolve_today(today()).await;

    assert_eq!(resolution.url, "/demo-epaper.pdf");
    assert_eq!(resolution.date_label, "Sunday, 20 July 2025");
    let warning = resolution.warning.expect("warning expected");
    assert!(warning.contains("20-07-25.pdf"));
    assert_eq!(probe.seen.lock().unwrap().len(), 1, "probe is attempted once");
}

#[tokio::test]
async fn test_resolve_today_falls_back_on_probe_error() {
    let probe = RecordingProbe::answering(None);
    let resolver = IssueResolver::new(probe, "/fallback.pdf");

    let resolution = resolver.resolve_today(today()).await;

    assert_eq!(resolution.url, "/fallback.pdf");
    assert!(resolution.is_fallback());
}

#[test]
fn test_resolve_selected_does_not_probe() {
    let probe = RecordingProbe::answering(Some(500));
    let resolver = IssueResolver::new(probe.clone(), "/fallback.pdf");
    let id = CanonicalId::parse("13-07-25").unwrap();

    let resolution = resolver.resolve_selected(&id).unwrap();

    assert_eq!(resolution.url, "/public/13-07-25.pdf");
    assert_eq!(resolution.date_label, "Sunday, 13 July 2025");
    assert!(resolution.warning.is_none());
    assert!(probe.seen.lock().unwrap().is_empty());
}

#[test]
fn test_missing_issue_warning_text() {
    assert_eq!(
        resolver::missing_issue_warning("20-07-25.pdf"),
        "Today's e-paper (20-07-25.pdf) is not yet available. Showing demo."
    );
}

#[test]
fn test_http_probe_url_joining() {
    let probe = HttpIssueProbe::new(reqwest::Client::new(), "https://cdn.example.com/");
    assert_eq!(
        probe.url_for("/public/20-07-25.pdf"),
        "https://cdn.example.com/public/20-07-25.pdf"
    );
}

#[test]
fn test_probe_error_messages() {
    assert_eq!(
        ProbeError::Status(404).to_string(),
        "existence probe returned status 404"
    );
}
