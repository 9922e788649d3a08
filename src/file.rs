// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::sanitize::strip_underscores;
use crate::error::{Result, ScrapeError};
use crate::heroes::Hero;

/// `hero_<id without underscores>_guide.txt`
pub fn guide_filename(hero: &Hero) -> String {
    format!("hero_{}_guide.txt", strip_underscores(&hero.internal_id))
}

/// Write one guide into `dir`, replacing any previous file for that hero.
/// Returns the path written to.
pub fn write_guide(dir: &Path, hero: &Hero, text: &str) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(guide_filename(hero));
    fs::write(&path, text).map_err(|e| ScrapeError::io(&path, e))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(ScrapeError::io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heroes::HeroCatalog;

    #[test]
    fn filename_drops_underscores() {
        let c = HeroCatalog::embedded().unwrap();
        assert_eq!(guide_filename(c.lookup("Blacksmith").unwrap()), "hero_dwarfmagi_guide.txt");
        assert_eq!(guide_filename(c.lookup("Moon Queen").unwrap()), "hero_krixi_guide.txt");
    }

    #[test]
    fn write_creates_dir_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested/guides");
        let hero = HeroCatalog::embedded().unwrap().lookup("Pebbles").unwrap();

        let p1 = write_guide(&dir, hero, "first").unwrap();
        let p2 = write_guide(&dir, hero, "second").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.file_name().unwrap(), "hero_rocky_guide.txt");
        assert_eq!(fs::read_to_string(&p1).unwrap(), "second");
    }

    #[test]
    fn file_in_place_of_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("guides");
        fs::write(&blocker, "").unwrap();
        let hero = HeroCatalog::embedded().unwrap().lookup("Chi").unwrap();
        assert!(matches!(write_guide(&blocker, hero, "x"), Err(ScrapeError::Io { .. })));
    }
}
