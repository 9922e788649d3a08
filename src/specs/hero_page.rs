// src/specs/hero_page.rs
//! Per-hero guide list. Each guide is an `a.iconHolder`; the author is the
//! leading part of its `div.subTitle`.

use scraper::Html;
use url::Url;

use crate::config::consts::{SEL_ICON_HOLDER, SEL_SUBTITLE};
use crate::core::{html::text_of, net::resolve};
use crate::error::{Result, ScrapeError};

/// URL of the first guide whose subtitle starts with `author`.
/// Anchors without a subtitle never match.
pub fn find_guide(doc: &str, base: &Url, hero: &str, author: &str) -> Result<Url> {
    let html = Html::parse_document(doc);
    let holder = sel!(SEL_ICON_HOLDER)?;
    let subtitle = sel!(SEL_SUBTITLE)?;

    let anchor = html.select(&holder).find(|a| {
        text_of(*a, &subtitle).is_some_and(|t| t.starts_with(author))
    });

    let Some(anchor) = anchor else {
        return Err(ScrapeError::GuideNotFound { hero: s!(hero), author: s!(author) });
    };
    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| ScrapeError::missing("href", format!("{author} guide for [{hero}]")))?;
    resolve(base, href)
}
