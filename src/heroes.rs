// src/heroes.rs

use std::{collections::BTreeMap, fs, path::Path, sync::OnceLock};

use serde::Deserialize;

use crate::error::{Result, ScrapeError};

/// Compiled-in hero table.
const EMBEDDED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/heroes.toml"));

static EMBEDDED_CATALOG: OnceLock<HeroCatalog> = OnceLock::new();

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub display_name: String,
    pub internal_id: String,
    special: Option<String>,
}

impl Hero {
    /// Client-side name: the override if there is one, else the display name without spaces.
    pub fn special_name(&self) -> String {
        match &self.special {
            Some(name) => name.clone(),
            None => self.display_name.replace(' ', ""),
        }
    }

    pub fn has_override(&self) -> bool {
        self.special.is_some()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    heroes: BTreeMap<String, Entry>,
}

#[derive(Deserialize)]
struct Entry {
    id: String,
    #[serde(default)]
    special: Option<String>,
}

/// Display name → hero. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct HeroCatalog {
    heroes: BTreeMap<String, Hero>,
}

impl HeroCatalog {
    /// The table shipped with the binary, parsed on first use.
    pub fn embedded() -> Result<&'static HeroCatalog> {
        if let Some(c) = EMBEDDED_CATALOG.get() {
            return Ok(c);
        }
        let parsed = Self::from_toml_str(EMBEDDED)?;
        Ok(EMBEDDED_CATALOG.get_or_init(|| parsed))
    }

    pub fn load(path: &Path) -> Result<HeroCatalog> {
        let text = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// TOML keys are unique, so duplicate display names are rejected by the parser.
    pub fn from_toml_str(text: &str) -> Result<HeroCatalog> {
        let file: CatalogFile = toml::from_str(text)?;
        let heroes = file
            .heroes
            .into_iter()
            .map(|(name, e)| {
                let hero = Hero {
                    display_name: name.clone(),
                    internal_id: e.id,
                    special: e.special.filter(|s| !s.trim().is_empty()),
                };
                (name, hero)
            })
            .collect();
        Ok(HeroCatalog { heroes })
    }

    pub fn lookup(&self, display_name: &str) -> Result<&Hero> {
        self.heroes
            .get(display_name)
            .ok_or_else(|| ScrapeError::UnmappedHero(s!(display_name)))
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Sorted by display name.
    pub fn iter(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.values()
    }
}
