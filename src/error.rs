// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("hero [{0}] has no entry in the hero catalog")]
    UnmappedHero(String),

    #[error("{author} guide not found for hero [{hero}]")]
    GuideNotFound { hero: String, author: String },

    #[error("cannot build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid url {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{what} not found ({context})")]
    MissingFragment { what: &'static str, context: String },

    #[error("unrecognised ability icon token {0:?}")]
    AbilityIcon(String),

    #[error("bad selector {css:?}: {msg}")]
    Selector { css: String, msg: String },

    #[error("hero catalog: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn missing(what: &'static str, context: impl Into<String>) -> Self {
        Self::MissingFragment { what, context: context.into() }
    }

    /// Skips are expected outcomes; everything else counts as a failure.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::GuideNotFound { .. })
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
