// src/specs/index.rs
//! Guide index (`/guides/index`): one `a.iconHolder` per hero, title in `div.title`.

use scraper::Html;
use url::Url;

use crate::config::consts::{SEL_ICON_HOLDER, SEL_TITLE};
use crate::core::{html::text_of, net::resolve};
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroLink {
    pub display_name: String,
    pub url: Url,
}

pub fn parse(doc: &str, base: &Url) -> Result<Vec<HeroLink>> {
    let html = Html::parse_document(doc);
    let holder = sel!(SEL_ICON_HOLDER)?;
    let title = sel!(SEL_TITLE)?;

    let mut links = Vec::new();
    for (i, a) in html.select(&holder).enumerate() {
        let display_name = text_of(a, &title)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ScrapeError::missing("div.title", format!("index entry {i}")))?;
        let href = a
            .value()
            .attr("href")
            .ok_or_else(|| ScrapeError::missing("href", format!("index entry [{display_name}]")))?;
        links.push(HeroLink { url: resolve(base, href)?, display_name });
    }
    tracing::debug!(count = links.len(), "index parsed");
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.heroesofnewerth.com").unwrap()
    }

    #[test]
    fn reads_titles_and_links_in_order() {
        let doc = r#"
            <div class="heroes">
              <a class="iconHolder" href="/guides/hero/12"><div class="title">Moon Queen</div></a>
              <a class="iconHolder" href="/guides/hero/3"><div class="title">Pebbles</div></a>
              <a class="other" href="/nope"><div class="title">Ignored</div></a>
            </div>
        "#;
        let links = parse(doc, &base()).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].display_name, "Moon Queen");
        assert_eq!(links[0].url.as_str(), "https://www.heroesofnewerth.com/guides/hero/12");
        assert_eq!(links[1].display_name, "Pebbles");
    }

    #[test]
    fn entry_without_title_fails() {
        let doc = r#"<a class="iconHolder" href="/guides/hero/1"><span>?</span></a>"#;
        assert!(matches!(
            parse(doc, &base()),
            Err(ScrapeError::MissingFragment { what: "div.title", .. })
        ));
    }

    #[test]
    fn empty_index_is_empty() {
        assert!(parse("<html><body></body></html>", &base()).unwrap().is_empty());
    }
}
