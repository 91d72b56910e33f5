//! Shared test utilities for the doc-facets test suite.
//!
//! Provides a compact document builder, a small two-version catalog that most
//! tests share, and a title extractor for grouped documents.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let catalog = sample_catalog();
//! assert_eq!(catalog.modules("1.0"), ["Core", "rest"]);
//! ```

use crate::catalog::Catalog;
use crate::types::Document;

// =========================================================================
// Builders
// =========================================================================

/// Build a document whose path is derived from its version and title.
pub fn doc(version: &str, module: &str, title: &str, tags: &[&str]) -> Document {
    Document {
        version: version.to_string(),
        module: module.to_string(),
        title: title.to_string(),
        path: format!("/{}/{}", version, title.to_lowercase().replace(' ', "-")),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Two versions, three modules, mixed-case tags. Latest is `2.0`.
///
/// ```text
/// 1.0  Core  Getting Started  [Tutorial]
/// 1.0  Core  configuration    [reference, howto]
/// 1.0  rest  Endpoints        [reference]
/// 2.0  Core  Getting Started  [Tutorial]
/// 2.0  Json  Parsing          [howto]
/// ```
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            doc("1.0", "Core", "Getting Started", &["Tutorial"]),
            doc("1.0", "Core", "configuration", &["reference", "howto"]),
            doc("1.0", "rest", "Endpoints", &["reference"]),
            doc("2.0", "Core", "Getting Started", &["Tutorial"]),
            doc("2.0", "Json", "Parsing", &["howto"]),
        ],
        "2.0",
    )
}

// =========================================================================
// Extractors
// =========================================================================

/// Titles of a document slice, in order.
pub fn titles<'a>(documents: &[&'a Document]) -> Vec<&'a str> {
    documents.iter().map(|d| d.title.as_str()).collect()
}
