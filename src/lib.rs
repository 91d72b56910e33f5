//! # doc-facets
//!
//! Faceted browsing for generated documentation indexes. A flat list of
//! documents, each tagged with a version, a module, and free-form tags,
//! becomes a filterable listing whose state lives in the URL fragment.
//!
//! # Architecture: One Filter Pass
//!
//! Every fragment change runs the same pure pipeline:
//!
//! ```text
//! fragment ──► Filters ──► validate ──► View ──► HTML
//!   "version=2.1&tag=howto"        (facets + groups)
//! ```
//!
//! The catalog (documents plus the latest version) is injected once and
//! never mutated. The filter state is replaced only at event boundaries: a
//! fragment change or a control change. See [`session`] for the loop.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The `Document` record shared by every stage |
//! | [`collate`] | Case-insensitive and numeric-aware version ordering |
//! | [`catalog`] | Derives versions, modules, tags, and grouped documents |
//! | [`filters`] | Filter state, fragment parsing and writing, control transitions |
//! | [`view`] | Validation and the renderer-agnostic view model |
//! | [`session`] | Fragment/control event loop with the invalid-selection reset |
//! | [`render`] | Maud HTML for the facet controls, match list, and full page |
//! | [`index`] | Loads `documents.json` and resolves the latest version |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup for diagnostics |
//!
//! # Design Decisions
//!
//! ## One Error, Recovered Locally
//!
//! The only filter error is a selection the data doesn't offer for the
//! active version. It is never shown to the reader: the whole state resets
//! to empty and the fragment is rewritten, so stale bookmarks land on the
//! default listing instead of an empty one.
//!
//! ## The Fragment Is the Only State
//!
//! Nothing is persisted. A filtered view is fully described by its
//! fragment, which makes every listing shareable and bookmarkable.
//!
//! ## View Model First
//!
//! Deriving and validating never touch HTML. [`view::View`] carries
//! everything a renderer needs, so the maud renderer, the CLI summary, and
//! JSON dumps all sit on the same tested core.

pub mod catalog;
pub mod collate;
pub mod config;
pub mod filters;
pub mod index;
pub mod logging;
pub mod output;
pub mod render;
pub mod session;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
