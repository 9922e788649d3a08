// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for a run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of heroes selected.
    fn begin(&mut self, _total: usize) {}

    /// A hero is about to be processed.
    fn item_start(&mut self, _hero: &str) {}

    /// The guide for `hero` was written to `path`.
    fn item_done(&mut self, _hero: &str, _path: &Path) {}

    /// Expected miss (no guide by the author); nothing written.
    fn item_skipped(&mut self, _hero: &str, _reason: &str) {}

    /// The hero's pipeline failed; nothing written.
    fn item_failed(&mut self, _hero: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
