//! HTML rendering of a [`View`].
//!
//! Each control the host page mounts has its own renderer, so a page can
//! swap in just the piece that changed:
//!
//! | Mount point | Renderer |
//! |-------------|----------|
//! | `body > nav .versions` (a `<select>`) | [`render_version_options`] |
//! | `body > nav .modules` | [`render_checkboxes`] |
//! | `body > nav .tags` | [`render_checkboxes`] |
//! | `body > main > article` | [`render_matches`] |
//!
//! [`render_page`] puts all four into a standalone document with the
//! configured colors, for static output and previews.
//!
//! Uses [maud](https://maud.lambda.xyz/). Document and label text is always
//! escaped; only the generated stylesheet is emitted raw.

use crate::config::{self, Labels, SiteConfig};
use crate::view::{FacetOption, MatchGroup, View};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

// ============================================================================
// Controls
// ============================================================================

/// `<option>` elements for the version select, the active one selected.
pub fn render_version_options(view: &View, labels: &Labels) -> Markup {
    html! {
        @for version in &view.versions {
            option value=(version.value) selected[version.selected] {
                (labels.version_option(&version.value, version.latest))
            }
        }
    }
}

/// One labelled checkbox per module or tag.
pub fn render_checkboxes(options: &[FacetOption]) -> Markup {
    html! {
        @for option in options {
            label {
                input type="checkbox" value=(option.value) checked[option.checked];
                span { (option.value) }
            }
        }
    }
}

/// The match list: a heading per module, then links to its documents.
pub fn render_matches(groups: &[MatchGroup]) -> Markup {
    html! {
        dl {
            @for group in groups {
                dt { (group.module) }
                dd {
                    ul {
                        @for document in &group.documents {
                            li { a href=(document.path) { (document.title) } }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page
// ============================================================================

/// A complete HTML document for `view`.
pub fn render_page(view: &View, config: &SiteConfig) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );
    let labels = &config.labels;

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.site.title) }
                style { (PreEscaped(css)) }
            }
            body {
                nav {
                    h1 { (config.site.title) }
                    select.versions { (render_version_options(view, labels)) }
                    h2 { (labels.modules) }
                    div.modules { (render_checkboxes(&view.modules)) }
                    h2 { (labels.tags) }
                    div.tags { (render_checkboxes(&view.tags)) }
                }
                main {
                    article { (render_matches(&view.groups)) }
                }
            }
        }
    }
}

/// Render `view` and write it to `path`, creating parent directories.
pub fn write_page(view: &View, config: &SiteConfig, path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_page(view, config).into_string())?;
    info!(path = %path.display(), matches = view.match_count(), "wrote page");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
