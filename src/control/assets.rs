//! Icon Assets
//!
//! Name to glyph lookup for the control's icons.

use std::collections::BTreeMap;

use super::{ControlError, ControlResult};

pub const EYES_CLOSED: &str = "eyes-closed";
pub const EYES_OPEN: &str = "eyes-open";

/// Icons the control cannot be built without
pub const REQUIRED_ICONS: [&str; 2] = [EYES_CLOSED, EYES_OPEN];

/// Icon catalog resolved by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    icons: BTreeMap<String, String>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::from_icons(default_icons())
    }
}

impl AssetCatalog {
    pub fn from_icons(icons: BTreeMap<String, String>) -> Self {
        Self { icons }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.icons.get(name).map(String::as_str).filter(|g| !g.is_empty())
    }

    /// Resolve a required icon, failing on a missing or empty glyph
    pub fn require(&self, name: &str) -> ControlResult<String> {
        self.lookup(name)
            .map(str::to_string)
            .ok_or_else(|| ControlError::MissingAsset(name.to_string()))
    }

    /// Startup integrity check for every required icon
    pub fn verify(&self) -> ControlResult<()> {
        REQUIRED_ICONS.iter().try_for_each(|name| self.require(name).map(|_| ()))
    }
}

pub fn default_icons() -> BTreeMap<String, String> {
    BTreeMap::from([
        (EYES_CLOSED.to_string(), "◡".to_string()),
        (EYES_OPEN.to_string(), "◉".to_string()),
    ])
}
