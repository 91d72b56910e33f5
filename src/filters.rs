//! Active filter state and its URL fragment form.
//!
//! The fragment is the only externalized state of a filtered view, which is
//! what makes filtered listings shareable and bookmarkable:
//!
//! ```text
//! #version=2.1&module=Core&tag=getting+started
//! ```
//!
//! Parsing is a full replace. A fresh [`Filters`] is built from the fragment
//! and whatever was selected before is dropped. Writing keeps only the
//! non-empty fields, always in `version`, `module`, `tag` order.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// `key=value` pairs; anything else in the fragment is skipped.
static PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)=([^&=]+)").expect("fragment pair pattern is valid")
});

/// The three facet selections. An empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub version: String,
    pub module: String,
    pub tag: String,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.version.is_empty() && self.module.is_empty() && self.tag.is_empty()
    }

    /// Parse a fragment, with or without its leading `#`.
    ///
    /// Unknown keys and pairs that don't decode are ignored. When a key is
    /// repeated the last occurrence wins.
    pub fn from_fragment(fragment: &str) -> Self {
        let mut filters = Self::default();
        for caps in PAIR.captures_iter(fragment) {
            let (Some(key), Some(value)) = (decode(&caps[1]), decode(&caps[2])) else {
                continue;
            };
            match key.as_str() {
                "version" => filters.version = value,
                "module" => filters.module = value,
                "tag" => filters.tag = value,
                _ => {}
            }
        }
        filters
    }

    /// Encode the non-empty fields as `key=value&...`, without a leading `#`.
    pub fn to_fragment(&self) -> String {
        [
            ("version", &self.version),
            ("module", &self.module),
            ("tag", &self.tag),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }

    // ------------------------------------------------------------------------
    // Control transitions
    // ------------------------------------------------------------------------

    /// A new version drops the module and tag selections.
    pub fn with_version(version: &str) -> Self {
        Self {
            version: version.to_string(),
            ..Self::default()
        }
    }

    pub fn toggle_module(mut self, value: &str, checked: bool) -> Self {
        self.module = if checked { value.to_string() } else { String::new() };
        self
    }

    pub fn toggle_tag(mut self, value: &str, checked: bool) -> Self {
        self.tag = if checked { value.to_string() } else { String::new() };
        self
    }
}

/// `+` is a space; everything else is percent-decoded.
fn decode(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|s| s.into_owned())
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}
