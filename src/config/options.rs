// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub net: NetOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HeroSelector {
    #[default]
    All,
    Names(Vec<String>),
}

impl HeroSelector {
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() { HeroSelector::All } else { HeroSelector::Names(names) }
    }

    /// Case-insensitive match against an index title.
    pub fn wants(&self, display_name: &str) -> bool {
        match self {
            HeroSelector::All => true,
            HeroSelector::Names(v) => v.iter().any(|n| n.trim().eq_ignore_ascii_case(display_name)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    base_url: String,
    pub author: String,
    pub heroes: HeroSelector,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            author: s!(GUIDE_AUTHOR),
            heroes: HeroSelector::All,
        }
    }
}

impl ScrapeOptions {
    /// Accepts a site root with or without a trailing slash.
    pub fn set_base_url(&mut self, text: &str) {
        self.base_url = s!(text.trim().trim_end_matches('/'));
    }

    pub fn base_url(&self) -> Result<Url> {
        parse_url(&self.base_url)
    }

    pub fn index_url(&self) -> Result<Url> {
        parse_url(&join!(&self.base_url, INDEX_PATH))
    }
}

fn parse_url(text: &str) -> Result<Url> {
    Url::parse(text).map_err(|source| ScrapeError::Url { url: s!(text), source })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub timeout: Duration,
    pub pause: Duration,
    pub user_agent: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn set_out_dir(&mut self, dir: impl Into<PathBuf>) {
        self.out_dir = dir.into();
    }
}
