//! Date/filename codec for daily issues.
//!
//! Every issue is addressed by a canonical id of the form `DD-MM-YY`, and its
//! PDF lives at `/public/DD-MM-YY.pdf`. All date-to-filename derivation goes
//! through [`CanonicalId`] so the archive, the today resolver and the HTTP
//! layer cannot drift apart.
//!
//! Years are stored with two digits and always read back as `20YY`. Issues
//! from before 2000 or after 2099 cannot be told apart from their 2000s
//! namesakes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

pub const ISSUE_EXTENSION: &str = ".pdf";
pub const PUBLIC_PREFIX: &str = "/public/";

const CENTURY_BASE: i32 = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed canonical id '{0}': expected DD-MM-YY")]
    Malformed(String),
    #[error("canonical id '{0}' does not name a calendar date")]
    InvalidDate(String),
}

/// A `DD-MM-YY` issue identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String")]
#[schema(value_type = String, example = "20-07-25")]
pub struct CanonicalId(String);

impl CanonicalId {
    pub fn encode(date: NaiveDate) -> Self {
        Self(format!(
            "{:02}-{:02}-{:02}",
            date.day(),
            date.month(),
            date.year().rem_euclid(100)
        ))
    }

    /// Parses a client supplied id. A trailing `.pdf` is accepted so that
    /// filenames can be passed straight through.
    pub fn parse(raw: &str) -> Result<Self, CodecError> {
        let trimmed = raw.trim();
        let id = trimmed.strip_suffix(ISSUE_EXTENSION).unwrap_or(trimmed);

        let bytes = id.as_bytes();
        let well_formed = bytes.len() == 8
            && bytes[2] == b'-'
            && bytes[5] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !well_formed {
            return Err(CodecError::Malformed(raw.to_string()));
        }

        let candidate = Self(id.to_string());
        candidate.date()?;
        Ok(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn day(&self) -> &str {
        &self.0[0..2]
    }

    pub fn month(&self) -> &str {
        &self.0[3..5]
    }

    pub fn year(&self) -> &str {
        &self.0[6..8]
    }

    /// The calendar date this id names, with the year read as `20YY`.
    pub fn date(&self) -> Result<NaiveDate, CodecError> {
        let invalid = || CodecError::InvalidDate(self.0.clone());
        let day: u32 = self.day().parse().map_err(|_| invalid())?;
        let month: u32 = self.month().parse().map_err(|_| invalid())?;
        let year: i32 = self.year().parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(CENTURY_BASE + year, month, day).ok_or_else(invalid)
    }

    pub fn filename(&self) -> String {
        format!("{}{}", self.0, ISSUE_EXTENSION)
    }

    /// Origin-relative path the issue is served and probed at.
    pub fn issue_path(&self) -> String {
        format!("{}{}", PUBLIC_PREFIX, self.filename())
    }

    pub fn display_label(&self) -> Result<String, CodecError> {
        self.date().map(format_display_date)
    }
}

impl TryFrom<String> for CanonicalId {
    type Error = CodecError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl fmt::Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Long English (India) date label, e.g. `Sunday, 20 July 2025`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

/// Renders the display label for a raw `DD-MM-YY` id.
pub fn to_display_label(canonical_id: &str) -> Result<String, CodecError> {
    CanonicalId::parse(canonical_id)?.display_label()
}
