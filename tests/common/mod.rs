// tests/common/mod.rs
//
// Offline page source over the HTML fixtures.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use url::Url;

use hon_guides::config::AppOptions;
use hon_guides::core::PageSource;
use hon_guides::ScrapeError;

pub const BASE: &str = "https://guides.test";

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// Serves fixtures by path; anything else is a 404. Records every request.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn standard() -> Self {
        Self::default()
            .page("/guides/index", "index.html")
            .page("/guides/hero/krixi", "hero_krixi.html")
            .page("/guides/hero/rocky", "hero_rocky.html")
            .page("/guides/hero/dwarf_magi", "hero_dwarf_magi.html")
            .page("/guides/view/12", "guide_krixi.html")
    }

    pub fn page(mut self, path: &str, fixture_name: &str) -> Self {
        self.pages.insert(path.to_string(), fixture(fixture_name));
        self
    }

    pub fn raw(mut self, path: &str, body: &str) -> Self {
        self.pages.insert(path.to_string(), body.to_string());
        self
    }
}

impl PageSource for FakeSite {
    fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        self.requests.borrow_mut().push(url.path().to_string());
        match self.pages.get(url.path()) {
            Some(body) => Ok(body.clone()),
            None => Err(ScrapeError::Status { url: url.to_string(), status: 404 }),
        }
    }
}

pub fn options(out_dir: &std::path::Path) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.scrape.set_base_url(BASE);
    opts.net.pause = std::time::Duration::ZERO;
    opts.export.set_out_dir(out_dir);
    opts
}

pub fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap().and_hms_opt(13, 5, 9).unwrap()
}
