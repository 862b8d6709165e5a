use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::control::assets::default_icons;
use crate::control::AssetCatalog;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color for {field}: {value}")]
    InvalidColor { field: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Hex colors for the control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub label: String,
    pub border: String,
    pub unused: String,
    pub weak: String,
    pub medium: String,
    pub strong: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            label: "#585A69".to_string(),
            border: "#3096F0".to_string(),
            unused: "#D0D6DB".to_string(),
            weak: "#E55C5C".to_string(),
            medium: "#E5B55C".to_string(),
            strong: "#4CBF63".to_string(),
        }
    }
}

impl Palette {
    /// Parse every entry into an RGB value
    pub fn resolve(&self) -> ConfigResult<ResolvedPalette> {
        Ok(ResolvedPalette {
            label: parse_hex("label", &self.label)?,
            border: parse_hex("border", &self.border)?,
            unused: parse_hex("unused", &self.unused)?,
            weak: parse_hex("weak", &self.weak)?,
            medium: parse_hex("medium", &self.medium)?,
            strong: parse_hex("strong", &self.strong)?,
        })
    }
}

/// Palette as 0xRRGGBB values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub label: u32,
    pub border: u32,
    pub unused: u32,
    pub weak: u32,
    pub medium: u32,
    pub strong: u32,
}

impl Default for ResolvedPalette {
    fn default() -> Self {
        Self {
            label: 0x585A69,
            border: 0x3096F0,
            unused: 0xD0D6DB,
            weak: 0xE55C5C,
            medium: 0xE5B55C,
            strong: 0x4CBF63,
        }
    }
}

fn parse_hex(field: &'static str, value: &str) -> ConfigResult<u32> {
    let invalid = || ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    };
    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u32::from_str_radix(digits, 16).map_err(|_| invalid())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub placeholder: String,
    pub icons: BTreeMap<String, String>,
    pub palette: Palette,
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("password-field")
            .join("password-field.log");

        Self {
            title: "ENTER PASSWORD".to_string(),
            placeholder: "Type a password".to_string(),
            icons: default_icons(),
            palette: Palette::default(),
            log_path,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("password-field")
            .join("config.json")
    }

    /// Load from `path` (or the default path); a missing file yields defaults
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let path = path.map_or_else(Self::default_path, Path::to_path_buf);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn assets(&self) -> AssetCatalog {
        AssetCatalog::from_icons(self.icons.clone())
    }
}
