//! Blocking page fetch
//!
//! The extraction core only ever sees the outcome: a parsed document or nothing.

use std::time::Duration;

use scraper::Html;
use tracing::{info, warn};
use url::Url;

use crate::error::FetchError;

pub struct Fetcher {
    agent: ureq::Agent,
    user_agent: String,
}

impl Fetcher {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            user_agent: user_agent.into(),
        }
    }

    pub fn agent(&self) -> &ureq::Agent {
        &self.agent
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET the page and parse it; non-2xx answers are errors
    pub fn fetch_document(&self, url: &Url) -> Result<Html, FetchError> {
        let response = self
            .agent
            .get(url.as_str())
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|source| FetchError::Body {
                url: url.to_string(),
                source,
            })?;

        info!(url = %url, bytes = body.len(), "fetched page");
        Ok(Html::parse_document(&body))
    }

    /// Like [`Fetcher::fetch_document`], with every failure reduced to `None`
    pub fn fetch_optional(&self, url: &Url) -> Option<Html> {
        match self.fetch_document(url) {
            Ok(document) => Some(document),
            Err(err) => {
                warn!(error = %err, "page fetch failed");
                None
            }
        }
    }
}
