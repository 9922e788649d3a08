// src/specs/ability_icon.rs
//! Decoding of the site's ability icon paths.
//!
//! The guide page draws each skill-up as a `div.icon` whose `style` carries a
//! background image such as `url(/images/heroes/krixi/abil2_128.png)`. The
//! file name encodes the 1-based ability slot as the last character before
//! the first `_`. The universal attribute boost uses a shared icon whose name
//! contains `boost`.
//!
//! This is an external naming convention, not something the client defines.
//! If the site changes its icon names, this file is the one to change.

use crate::core::html::last_segment;
use crate::error::{Result, ScrapeError};

pub const ATTRIBUTE_BOOST: &str = "Ability_AttributeBoost";
const ABILITY_PREFIX: &str = "Ability_";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbilityIcon {
    AttributeBoost,
    /// Slot digit as written in the file name (`'1'`..`'4'` in practice).
    Slot(char),
}

impl AbilityIcon {
    /// Decode from a full `style` attribute value.
    pub fn from_style(style: &str) -> Result<Self> {
        Self::from_token(last_segment(style))
    }

    /// Decode from the last path token, e.g. `abil1_128.png)`.
    pub fn from_token(token: &str) -> Result<Self> {
        if token.contains("boost") {
            return Ok(AbilityIcon::AttributeBoost);
        }
        let head = token.split('_').next().unwrap_or(token);
        match head.chars().last() {
            Some(c) if c.is_ascii_digit() => Ok(AbilityIcon::Slot(c)),
            _ => Err(ScrapeError::AbilityIcon(s!(token))),
        }
    }

    /// Client identifier, e.g. `Ability_Krixi2`.
    pub fn identifier(&self, hero_special_name: &str) -> String {
        match self {
            AbilityIcon::AttributeBoost => s!(ATTRIBUTE_BOOST),
            AbilityIcon::Slot(c) => {
                let mut id = join!(ABILITY_PREFIX, hero_special_name);
                id.push(*c);
                id
            }
        }
    }
}
