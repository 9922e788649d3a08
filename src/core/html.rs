// src/core/html.rs
use scraper::{ElementRef, Selector};

use super::sanitize::normalize_ws;

/// First descendant matching `sel`.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Whitespace-normalized text of the first descendant matching `sel`.
pub fn text_of(el: ElementRef<'_>, sel: &Selector) -> Option<String> {
    first(el, sel).map(|e| normalize_ws(&e.text().collect::<String>()))
}

/// Attribute of the first descendant matching `sel`.
pub fn attr_of<'a>(el: ElementRef<'a>, sel: &Selector, name: &str) -> Option<&'a str> {
    first(el, sel).and_then(|e| e.value().attr(name))
}

/// Last `/`-delimited segment. The whole string if there is no slash.
pub fn last_segment(s: &str) -> &str {
    s.rsplit('/').next().unwrap_or(s)
}

/// File-name stem as the site names its icons: everything before the first `.`.
/// `item_0.png` → `item_0`, `a.b.png` → `a`.
pub fn file_stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn last_segment_and_stem() {
        assert_eq!(last_segment("/images/items/item_0.png"), "item_0.png");
        assert_eq!(last_segment("plain"), "plain");
        assert_eq!(last_segment("trailing/"), "");
        assert_eq!(file_stem("item_0.png"), "item_0");
        assert_eq!(file_stem("noext"), "noext");
        assert_eq!(file_stem(".png"), "");
    }

    #[test]
    fn text_and_attr_lookups() {
        let doc = Html::parse_fragment(
            r#"<a href="/x"><div class="title">  Moon
                 Queen </div><img src="/i/a.png"></a>"#,
        );
        let title = Selector::parse("div.title").unwrap();
        let img = Selector::parse("img").unwrap();
        let root = doc.root_element();
        assert_eq!(text_of(root, &title).as_deref(), Some("Moon Queen"));
        assert_eq!(attr_of(root, &img, "src"), Some("/i/a.png"));
        assert_eq!(attr_of(root, &img, "alt"), None);
    }
}
