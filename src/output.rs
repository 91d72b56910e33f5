//! CLI output formatting.
//!
//! Output leads with what the reader filters on: versions, modules, and
//! matching documents. Each entity gets a header line with its positional
//! index, followed by indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Versions
//! 001 1.0 (3 documents)
//!     Modules: Core, rest
//!     Tags: howto, reference, Tutorial
//! 002 2.0 (latest, 2 documents)
//!     Modules: Core, Json
//!     Tags: howto, Tutorial
//! ```
//!
//! ## Render
//!
//! ```text
//! Fragment: version=1.0&tag=howto
//! Version 1.0
//! 001 Core (1 match)
//!     configuration → /1.0/configuration
//!
//! Rendered 1 group, 1 match
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::catalog::Catalog;
use crate::view::View;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

/// Comma-separated values, or `-` for an empty list.
fn list(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Facet summary of a catalog, one entry per version.
pub fn format_check_output(catalog: &Catalog) -> Vec<String> {
    let mut lines = vec!["Versions".to_string()];

    for (i, version) in catalog.versions().iter().enumerate() {
        let count = catalog
            .documents()
            .iter()
            .filter(|d| &d.version == version)
            .count();
        let documents = plural(count, "document", "documents");
        let detail = if version == catalog.latest() {
            format!("latest, {}", documents)
        } else {
            documents
        };
        lines.push(format!("{} {} ({})", format_index(i + 1), version, detail));
        lines.push(format!("    Modules: {}", list(&catalog.modules(version))));
        lines.push(format!("    Tags: {}", list(&catalog.tags(version))));
    }

    if catalog.versions().iter().all(|v| v != catalog.latest()) {
        lines.push(String::new());
        lines.push(format!(
            "Latest version {:?} has no documents",
            catalog.latest()
        ));
    }

    lines
}

pub fn print_check_output(catalog: &Catalog) {
    for line in format_check_output(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Render
// ============================================================================

/// Summary of one settled filter pass.
///
/// `rewrites` lists the fragments written while settling; a non-empty list
/// means the requested selection was invalid and got reset.
pub fn format_render_output(view: &View, fragment: &str, rewrites: &[String]) -> Vec<String> {
    let mut lines = Vec::new();

    if !rewrites.is_empty() {
        lines.push("Invalid selection, filters reset".to_string());
    }
    lines.push(format!("Fragment: {}", fragment));
    lines.push(format!("Version {}", view.active_version));

    for (i, group) in view.groups.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            group.module,
            plural(group.documents.len(), "match", "matches")
        ));
        for document in &group.documents {
            lines.push(format!("    {} → {}", document.title, document.path));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Rendered {}, {}",
        plural(view.groups.len(), "group", "groups"),
        plural(view.match_count(), "match", "matches")
    ));
    lines
}

pub fn print_render_output(view: &View, fragment: &str, rewrites: &[String]) {
    for line in format_render_output(view, fragment, rewrites) {
        println!("{}", line);
    }
}
