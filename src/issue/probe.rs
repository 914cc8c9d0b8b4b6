use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("existence probe request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("existence probe returned status {0}")]
    Status(u16),
}

/// Checks whether an issue is published without downloading it.
#[async_trait]
pub trait IssueProbe {
    /// `path` is origin-relative, e.g. `/public/20-07-25.pdf`.
    async fn probe(&self, path: &str) -> Result<(), ProbeError>;
}

/// Probes the content origin with a single HEAD request.
pub struct HttpIssueProbe {
    client: reqwest::Client,
    origin: String,
}

impl HttpIssueProbe {
    pub fn new(client: reqwest::Client, origin: impl Into<String>) -> Self {
        Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.origin, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl IssueProbe for HttpIssueProbe {
    async fn probe(&self, path: &str) -> Result<(), ProbeError> {
        let url = self.url_for(path);
        log::debug!("Probing {} with HEAD", url);
        let response = self.client.head(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ProbeError::Status(status.as_u16()))
        }
    }
}
