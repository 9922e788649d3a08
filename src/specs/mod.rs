// src/specs/mod.rs
//! # Page readers
//!
//! One module per page kind on the guide site. Each knows *where the data
//! lives in the HTML* and turns a fetched body into a small typed result.
//!
//! ## What lives here
//! - **Pure HTML parsing** over `scraper` selectors (constants in
//!   `config::consts`).
//! - **Positional rules** the client depends on (e.g. backpack slots 0–7 are the
//!   starting items).
//! - **Site naming conventions**, isolated (`ability_icon`).
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), formatting (`guide`), writing (`file`), or the
//!   per-hero flow and its error boundary (`runner`).
//!
//! ## Typical call chain
//! ```text
//! runner → PageSource::fetch(index)     → index::parse       → [HeroLink]
//!        → PageSource::fetch(hero page) → hero_page::find_guide → guide URL
//!        → PageSource::fetch(guide)     → guide_page::parse  → GuideBuild
//! ```
//!
//! ## Conventions
//! - Readers take `&str` bodies so they can be tested offline against fixtures.
//! - A missing fragment the client needs is an error, not a silent default.
//!   An item slot without an image is the exception: it is simply empty.
pub mod ability_icon;
pub mod guide_page;
pub mod hero_page;
pub mod index;
