// src/core/net.rs
// Page fetching. One blocking client, one GET per page, no retry.

use reqwest::blocking::Client;
use url::Url;

use crate::config::NetOptions;
use crate::error::{Result, ScrapeError};

/// Anything that can hand back the HTML body behind a URL.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> Result<String>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &NetOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()
            .map_err(ScrapeError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, url: &Url) -> Result<String> {
        tracing::debug!(%url, "GET");
        let http_err = |source| ScrapeError::Http { url: url.to_string(), source };

        let resp = self.client.get(url.clone()).send().map_err(http_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = resp.text().map_err(http_err)?;
        tracing::trace!(%url, bytes = body.len(), "body received");
        Ok(body)
    }
}

/// Resolve a page link against the site root. Absolute hrefs pass through.
pub fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href.trim())
        .map_err(|source| ScrapeError::Url { url: s!(href), source })
}
