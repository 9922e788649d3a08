// src/specs/guide_page.rs
//! A single guide. The inventory is a flat run of `div.backpack` slots with an
//! `img` each; the skill order is a run of `div.abilHolder`, each wrapping a
//! `div.icon` whose `style` points at the ability icon.

use scraper::Html;

use super::ability_icon::AbilityIcon;
use crate::config::consts::{SEL_ABILITY, SEL_ABILITY_ICON, SEL_BACKPACK, SEL_ITEM_IMG};
use crate::core::html::{attr_of, file_stem, first, last_segment};
use crate::error::{Result, ScrapeError};
use crate::guide::{GuideBuild, ItemSlots};
use crate::heroes::Hero;

pub fn parse(doc: &str, hero: &Hero) -> Result<GuideBuild> {
    let html = Html::parse_document(doc);
    let build = GuideBuild {
        items: extract_items(&html)?,
        abilities: extract_abilities(&html, hero)?,
    };
    tracing::debug!(
        hero = %hero.display_name,
        items = build.items.len(),
        abilities = build.abilities.len(),
        "guide page parsed"
    );
    Ok(build)
}

pub fn extract_items(html: &Html) -> Result<ItemSlots> {
    let backpack = sel!(SEL_BACKPACK)?;
    let img = sel!(SEL_ITEM_IMG)?;

    let slots = html.select(&backpack).map(|slot| {
        attr_of(slot, &img, "src")
            .map(|src| file_stem(last_segment(src)))
            .filter(|name| !name.is_empty())
            .map(String::from)
    });
    Ok(ItemSlots::from_slots(slots))
}

/// A missing `div.icon` or `style` fails the hero. An icon whose file name no
/// longer decodes is logged and left out; the rest of the build is kept.
pub fn extract_abilities(html: &Html, hero: &Hero) -> Result<Vec<String>> {
    let holder = sel!(SEL_ABILITY)?;
    let icon = sel!(SEL_ABILITY_ICON)?;
    let special = hero.special_name();

    let mut abilities = Vec::new();
    for (i, h) in html.select(&holder).enumerate() {
        let ctx = || format!("ability {} of [{}]", i + 1, hero.display_name);
        let icon_el = first(h, &icon).ok_or_else(|| ScrapeError::missing("div.icon", ctx()))?;
        let style = icon_el
            .value()
            .attr("style")
            .ok_or_else(|| ScrapeError::missing("icon style", ctx()))?;

        match AbilityIcon::from_style(style) {
            Ok(decoded) => abilities.push(decoded.identifier(&special)),
            Err(e) => tracing::warn!(hero = %hero.display_name, level = i + 1, "{e}; ability dropped"),
        }
    }
    Ok(abilities)
}
