//! Site configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` that sits next
//! to `documents.json` in the source directory. Stock defaults are the base
//! layer; the user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Documentation"   # Page <title> and heading
//! # latest = "2.1"          # Override the index's latest version
//!
//! [labels]
//! version = "Version"       # Prefix of each version option
//! latest = "(Latest)"       # Suffix of the latest version option
//! modules = "Modules"       # Heading of the module checkboxes
//! tags = "Tags"             # Heading of the tag checkboxes
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#1b1b1b"
//! muted = "#6b6b6b"         # Facet headings, version labels
//! accent = "#0b5cad"        # Links, checked facets
//!
//! [colors.dark]
//! background = "#111315"
//! text = "#e8e8e8"
//! muted = "#9a9a9a"
//! accent = "#6fb1ff"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Title and latest-version override.
    pub site: SiteSection,
    /// Text of the facet controls.
    pub labels: Labels,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Reject values that would render an unusable page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if self.site.latest.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "site.latest must not be empty when set".into(),
            ));
        }
        if self.labels.version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "labels.version must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub title: String,
    /// When set, wins over the `latest` field of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            latest: None,
        }
    }
}

/// Facet control labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    /// Prefix of each version option: `"Version 2.1"`.
    pub version: String,
    /// Appended to the latest version option: `"Version 2.1 (Latest)"`.
    pub latest: String,
    pub modules: String,
    pub tags: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            version: "Version".to_string(),
            latest: "(Latest)".to_string(),
            modules: "Modules".to_string(),
            tags: "Tags".to_string(),
        }
    }
}

impl Labels {
    /// Text of a version option.
    pub fn version_option(&self, version: &str, latest: bool) -> String {
        if latest && !self.latest.is_empty() {
            format!("{} {} {}", self.version, version, self.latest)
        } else {
            format!("{} {}", self.version, version)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Facet headings and version labels.
    pub muted: String,
    /// Links and checked facets.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1b1b1b".to_string(),
            muted: "#6b6b6b".to_string(),
            accent: "#0b5cad".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111315".to_string(),
            text: "#e8e8e8".to_string(),
            muted: "#9a9a9a".to_string(),
            accent: "#6fb1ff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` when the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge user values over stock defaults, reject unknown keys, validate.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// A fully-commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# doc-facets configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.
#
# The file lives next to documents.json in the source directory.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Page <title> and heading.
title = "Documentation"

# Version shown when no version filter is set. When omitted, the "latest"
# field of documents.json is used, then the highest version in the index.
# latest = "2.1"

# ---------------------------------------------------------------------------
# Facet labels
# ---------------------------------------------------------------------------
[labels]
# Version options read "<version> <value>", plus "<latest>" for the latest one.
version = "Version"
latest = "(Latest)"

# Headings above the checkbox groups.
modules = "Modules"
tags = "Tags"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1b1b1b"
muted = "#6b6b6b"     # Facet headings, version labels
accent = "#0b5cad"    # Links, checked facets

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111315"
text = "#e8e8e8"
muted = "#9a9a9a"
accent = "#6fb1ff"
"##
}

/// CSS custom properties for both color schemes.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-muted: {light_muted};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-muted: {dark_muted};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_muted = colors.light.muted,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_muted = colors.dark.muted,
        dark_accent = colors.dark.accent,
    )
}
