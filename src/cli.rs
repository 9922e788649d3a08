// src/cli.rs
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::{consts, AppOptions, HeroSelector};
use crate::core::HttpSource;
use crate::heroes::{Hero, HeroCatalog};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Scrape Heroes of Newerth web guides into client guide files.
#[derive(Debug, Parser)]
#[command(name = "hon_guides", version, about)]
pub struct Args {
    /// Directory the guide files are written to
    #[arg(short, long, value_name = "DIR", default_value = consts::DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Subtitle prefix identifying the guide author
    #[arg(long, value_name = "TAG", default_value = consts::GUIDE_AUTHOR)]
    pub author: String,

    /// Site root the guide pages are fetched from
    #[arg(long, value_name = "URL", default_value = consts::BASE_URL)]
    pub base_url: String,

    /// Only process these heroes (display names; repeatable)
    #[arg(long = "hero", value_name = "NAME")]
    pub heroes: Vec<String>,

    /// Load the hero table from a TOML file instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Per-request timeout
    #[arg(long, value_name = "N", default_value_t = consts::TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pause between heroes
    #[arg(long, value_name = "N", default_value_t = consts::REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Print the hero table and exit
    #[arg(long)]
    pub list_heroes: bool,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.set_base_url(&self.base_url);
        opts.scrape.author = self.author.clone();
        opts.scrape.heroes = HeroSelector::from_names(self.heroes.clone());
        opts.net.timeout = Duration::from_secs(self.timeout_secs);
        opts.net.pause = Duration::from_millis(self.pause_ms);
        opts.export.set_out_dir(&self.out);
        opts
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref())?;

    let owned;
    let catalog = match &args.catalog {
        Some(path) => {
            owned = HeroCatalog::load(path)
                .wrap_err_with(|| format!("loading hero catalog {}", path.display()))?;
            &owned
        }
        None => HeroCatalog::embedded()?,
    };

    if args.list_heroes {
        for h in catalog.iter() {
            println!("{}", hero_row(h));
        }
        return Ok(());
    }

    let opts = args.to_options();
    let source = HttpSource::new(&opts.net)?;
    let mut console = ConsoleProgress::default();

    let summary = runner::run(&opts, catalog, &source, Some(&mut console))
        .wrap_err("reading the guide index")?;
    print_summary(&summary, opts.export.out_dir());
    Ok(())
}

/// `--list-heroes` line: `display name,internal id,special name`.
fn hero_row(h: &Hero) -> String {
    format!("{},{},{}", h.display_name, h.internal_id, h.special_name())
}

fn print_summary(summary: &RunSummary, out_dir: &Path) {
    println!(
        "Wrote {} guide(s) to {} ({} skipped, {} failed)",
        summary.written.len(),
        out_dir.display(),
        summary.skipped.len(),
        summary.failed.len(),
    );
    for (hero, err) in &summary.failed {
        println!("  failed [{hero}]: {err}");
    }
}

/// Prints one status line per hero on stdout.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Found {total} hero(es) on the guide index");
    }

    fn item_start(&mut self, hero: &str) {
        self.done += 1;
        print!("[{}/{}] Processing hero [{hero}]... ", self.done, self.total);
        let _ = std::io::stdout().flush();
    }

    fn item_done(&mut self, hero: &str, path: &Path) {
        println!("parsed [{hero}] → {}", path.display());
    }

    fn item_skipped(&mut self, _hero: &str, reason: &str) {
        println!("{reason}");
    }

    fn item_failed(&mut self, hero: &str, error: &str) {
        println!("FAILED [{hero}]: {error}");
    }
}
