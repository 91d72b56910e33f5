//! Shared types used across the derive, filter, and render stages.
//!
//! Documents are deserialized from the index file and never mutated
//! afterwards; every later stage borrows them.

use serde::{Deserialize, Deserializer, Serialize};

/// A single entry of the documentation index.
///
/// All string fields are required. A record without `tags`, or with
/// `"tags": null`, simply contributes no tag facets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Version label, e.g. `"2.1"` or `"0.49"`
    pub version: String,
    /// Owning module name
    pub module: String,
    /// Display title, used as link text in the match list
    pub title: String,
    /// URL of the document
    pub path: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl Document {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
