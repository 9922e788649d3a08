// src/guide.rs
// Client guide record and its text encoding.
//
// Layout (one line, no newline):
//   <ts>``Hero_<special>`<name> Guide`<name>`1.00
//   `<starting>|`<essential>|`<offensive>|`<defensive>|||||`<abilities>``
// where every item is followed by '|', and abilities are '|'-joined.
// The client parses this positionally; do not change a byte of it.

use chrono::NaiveDateTime;

use crate::config::consts::{GUIDE_VERSION, ITEM_WINDOW, ITEM_WINDOWS};
use crate::heroes::Hero;

/// MM/dd/yy HH:mm:ss followed directly by AM/PM.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y %H:%M:%S%p";

/// Four build windows, in client order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSlots {
    pub starting: Vec<String>,
    pub essential: Vec<String>,
    pub offensive: Vec<String>,
    pub defensive: Vec<String>,
}

impl ItemSlots {
    /// Window by slot position: slots 0..8 are starting, 8..16 essential, and so on.
    /// Empty slots (`None`) are dropped inside their own window; slots past 32 are ignored.
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut windows: [Vec<String>; ITEM_WINDOWS] = Default::default();
        for (pos, slot) in slots.into_iter().take(ITEM_WINDOW * ITEM_WINDOWS).enumerate() {
            if let Some(name) = slot {
                windows[pos / ITEM_WINDOW].push(name);
            }
        }
        let [starting, essential, offensive, defensive] = windows;
        Self { starting, essential, offensive, defensive }
    }

    pub fn groups(&self) -> [&[String]; ITEM_WINDOWS] {
        [&self.starting, &self.essential, &self.offensive, &self.defensive]
    }

    pub fn len(&self) -> usize {
        self.groups().iter().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the guide page yields, before it is tied to a hero and a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuideBuild {
    pub items: ItemSlots,
    pub abilities: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guide {
    pub hero_display_name: String,
    pub hero_special_name: String,
    pub items: ItemSlots,
    pub abilities: Vec<String>,
    pub timestamp: NaiveDateTime,
}

impl Guide {
    pub fn new(hero: &Hero, build: GuideBuild, timestamp: NaiveDateTime) -> Self {
        Self {
            hero_display_name: hero.display_name.clone(),
            hero_special_name: hero.special_name(),
            items: build.items,
            abilities: build.abilities,
            timestamp,
        }
    }

    pub fn to_client_text(&self) -> String {
        let name = self.hero_display_name.as_str();
        let mut out = self.timestamp.format(TIMESTAMP_FORMAT).to_string();

        out.push_str("``");
        out.push_str(&join!("Hero_", &self.hero_special_name));
        out.push('`');
        out.push_str(&join!(name, " Guide"));
        out.push('`');
        out.push_str(name);
        out.push('`');
        out.push_str(GUIDE_VERSION);

        for group in self.items.groups() {
            push_items(&mut out, group);
        }

        out.push_str("||||`");
        out.push_str(&self.abilities.join("|"));
        out.push_str("``");
        out
    }
}

fn push_items(out: &mut String, items: &[String]) {
    out.push('`');
    for item in items {
        out.push_str(item);
        out.push('|');
    }
    out.push('|');
}
