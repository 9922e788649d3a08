// src/runner.rs
use std::path::PathBuf;
use std::thread;

use chrono::{Local, NaiveDateTime};
use url::Url;

use crate::{
    config::{AppOptions, HeroSelector},
    core::PageSource,
    error::Result,
    file,
    guide::Guide,
    heroes::HeroCatalog,
    progress::Progress,
    specs::{self, index::HeroLink},
};

/// What a run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub written: Vec<PathBuf>,
    /// Heroes without a guide by the configured author.
    pub skipped: Vec<String>,
    /// (hero, error) for every hero whose pipeline failed.
    pub failed: Vec<(String, String)>,
}

/// Scrape every selected hero using the local wall clock for guide timestamps.
pub fn run(
    opts: &AppOptions,
    catalog: &HeroCatalog,
    source: &dyn PageSource,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    run_with_clock(opts, catalog, source, progress, || Local::now().naive_local())
}

/// Index failures abort the run. After that every hero is isolated: its error
/// is logged and reported, and the next hero proceeds.
pub fn run_with_clock<F>(
    opts: &AppOptions,
    catalog: &HeroCatalog,
    source: &dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
    now: F,
) -> Result<RunSummary>
where
    F: Fn() -> NaiveDateTime,
{
    let base = opts.scrape.base_url()?;
    let index_url = opts.scrape.index_url()?;
    tracing::info!(%index_url, "reading guide index");

    let index_doc = source.fetch(&index_url)?;
    let mut links = specs::index::parse(&index_doc, &base)?;
    links.retain(|l| opts.scrape.heroes.wants(&l.display_name));
    warn_missing(&opts.scrape.heroes, &links);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut summary = RunSummary::default();
    for (i, link) in links.iter().enumerate() {
        if i > 0 && !opts.net.pause.is_zero() {
            thread::sleep(opts.net.pause); // be polite
        }
        let hero = link.display_name.as_str();
        if let Some(p) = progress.as_deref_mut() {
            p.item_start(hero);
        }

        match process_hero(opts, catalog, source, &base, link, &now) {
            Ok(path) => {
                tracing::info!(hero, path = %path.display(), "guide written");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(hero, &path);
                }
                summary.written.push(path);
            }
            Err(e) if e.is_skip() => {
                tracing::info!(hero, "{e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(hero, &e.to_string());
                }
                summary.skipped.push(s!(hero));
            }
            Err(e) => {
                tracing::warn!(hero, "{e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(hero, &e.to_string());
                }
                summary.failed.push((s!(hero), e.to_string()));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

// fetch hero page → find guide → fetch guide → extract → format → write
fn process_hero<F>(
    opts: &AppOptions,
    catalog: &HeroCatalog,
    source: &dyn PageSource,
    base: &Url,
    link: &HeroLink,
    now: &F,
) -> Result<PathBuf>
where
    F: Fn() -> NaiveDateTime,
{
    let hero = catalog.lookup(&link.display_name)?;

    let hero_doc = source.fetch(&link.url)?;
    let guide_url = specs::hero_page::find_guide(&hero_doc, base, &hero.display_name, &opts.scrape.author)?;
    tracing::debug!(hero = %hero.display_name, %guide_url, "guide found");

    let guide_doc = source.fetch(&guide_url)?;
    let build = specs::guide_page::parse(&guide_doc, hero)?;

    let guide = Guide::new(hero, build, now());
    file::write_guide(opts.export.out_dir(), hero, &guide.to_client_text())
}

fn warn_missing(sel: &HeroSelector, links: &[HeroLink]) {
    if let HeroSelector::Names(names) = sel {
        for n in names {
            if !links.iter().any(|l| l.display_name.eq_ignore_ascii_case(n.trim())) {
                tracing::warn!(hero = %n, "requested hero not on the guide index");
            }
        }
    }
}
