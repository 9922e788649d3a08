// src/log.rs
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ScrapeError};

/// Default filter for a verbosity count (`-v`, `-vv`, ...).
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,hon_guides=info",
        2 => "warn,hon_guides=debug",
        _ => "trace",
    }
}

/// Install the global subscriber: coloured stderr always, plus `log_file`
/// (appended, plain text) if given. `RUST_LOG` overrides the verbosity-derived filter.
pub fn init(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let file = log_file.map(open_log_file).transpose()?;

    subscriber(filter, file).init();
    tracing::debug!(?log_file, "logging initialized");
    Ok(())
}

fn subscriber(filter: EnvFilter, file: Option<File>) -> impl Subscriber + Send + Sync + 'static {
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let file_layer = file.map(|f| {
        fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(f))
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ScrapeError::io(parent, e))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ScrapeError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_ladders_up() {
        assert_eq!(default_filter(0), "warn");
        assert!(default_filter(1).contains("hon_guides=info"));
        assert!(default_filter(2).contains("hon_guides=debug"));
        assert_eq!(default_filter(9), "trace");
    }

    #[test]
    fn log_file_is_plain_text_and_appended() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("logs/run.log");

        for msg in ["first run", "second run"] {
            let file = open_log_file(&path).unwrap();
            let sub = subscriber(EnvFilter::new("info"), Some(file));
            tracing::subscriber::with_default(sub, || tracing::warn!(hero = "Chi", "{msg}"));
        }

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("first run"));
        assert!(text.contains("second run"));
        assert!(text.contains("hero=\"Chi\""));
        assert!(!text.contains('\u{1b}'), "ANSI escapes in log file: {text:?}");
    }
}
