//! Environment driven configuration.
//!
//! Values are read after `.env` has been loaded. Anything missing falls back
//! to a default suitable for local development; anything present but
//! unparsable aborts startup.

use chrono::{Local, NaiveDate};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::archive::{DEFAULT_WINDOW_DAYS, PLACEHOLDER_PAGE_COUNT};

pub const DEFAULT_FALLBACK_URL: &str = "/demo-epaper.pdf";
const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://localhost:3000,http://localhost:8080,http://127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub content_origin: String,
    pub public_dir: PathBuf,
    pub fallback_url: String,
    pub archive_days: u32,
    pub page_count: u32,
    pub probe_timeout: Duration,
    pub reference_date: Option<NaiveDate>,
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            content_origin: "http://127.0.0.1:8080".to_string(),
            public_dir: PathBuf::from("./public"),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            archive_days: DEFAULT_WINDOW_DAYS,
            page_count: PLACEHOLDER_PAGE_COUNT,
            probe_timeout: Duration::from_secs(10),
            reference_date: None,
            allowed_origins: split_list(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let reference_date = match lookup("EPAPER_REFERENCE_DATE").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
                    ConfigError::Invalid {
                        key: "EPAPER_REFERENCE_DATE",
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?,
            ),
            None => None,
        };

        Ok(Self {
            host: text("HOST", defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            content_origin: text("EPAPER_CONTENT_ORIGIN", defaults.content_origin)
                .trim_end_matches('/')
                .to_string(),
            public_dir: PathBuf::from(text(
                "EPAPER_PUBLIC_DIR",
                defaults.public_dir.to_string_lossy().into_owned(),
            )),
            fallback_url: text("EPAPER_FALLBACK_URL", defaults.fallback_url),
            archive_days: parse_or(&lookup, "EPAPER_ARCHIVE_DAYS", defaults.archive_days)?,
            page_count: parse_or(&lookup, "EPAPER_PAGE_COUNT", defaults.page_count)?,
            probe_timeout: Duration::from_secs(parse_or(
                &lookup,
                "EPAPER_PROBE_TIMEOUT_SECS",
                defaults.probe_timeout.as_secs(),
            )?),
            reference_date,
            allowed_origins: lookup("EPAPER_ALLOWED_ORIGINS")
                .map(|v| split_list(&v))
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.allowed_origins),
        })
    }

    /// The date treated as "today": the pinned reference date if one is
    /// configured, otherwise the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => {
            log::debug!("{key} not set, using default");
            Ok(default)
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
