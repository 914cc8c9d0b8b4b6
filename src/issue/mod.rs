//! Resolution of the issue to display: today's paper (probed, with a
//! fallback) or an issue picked from the archive.

pub mod handlers;
pub mod models;
pub mod probe;
pub mod resolver;

pub use models::IssueResolution;
pub use probe::{HttpIssueProbe, IssueProbe, ProbeError};
pub use resolver::IssueResolver;

#[cfg(test)]
mod mod_tests;
