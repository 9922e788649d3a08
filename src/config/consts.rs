// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.heroesofnewerth.com";
pub const INDEX_PATH: &str = "/guides/index";
pub const USER_AGENT: &str = concat!("hon_guides/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Scrape
pub const GUIDE_AUTHOR: &str = "`WhatYouGot";

// Selectors (site markup)
pub const SEL_ICON_HOLDER: &str = "a.iconHolder";
pub const SEL_TITLE: &str = "div.title";
pub const SEL_SUBTITLE: &str = "div.subTitle";
pub const SEL_BACKPACK: &str = "div.backpack";
pub const SEL_ITEM_IMG: &str = "img";
pub const SEL_ABILITY: &str = "div.abilHolder";
pub const SEL_ABILITY_ICON: &str = "div.icon";

// Inventory layout: 4 windows of 8 backpack slots
pub const ITEM_WINDOW: usize = 8;
pub const ITEM_WINDOWS: usize = 4;

// Export
pub const DEFAULT_OUT_DIR: &str = "guides";
pub const GUIDE_VERSION: &str = "1.00";
