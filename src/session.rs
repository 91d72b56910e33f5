//! The filter event loop.
//!
//! A page view reacts to two kinds of events:
//!
//! ```text
//! fragment changed ──► parse ──► validate ──► derive ──► View
//!        ▲                          │
//!        │                    invalid: write ""
//!        │
//! control changed ──► new Filters ──► write fragment
//! ```
//!
//! Writing the fragment is what triggers the next pass, so control changes
//! never render directly. [`Session::settle`] runs passes until one of them
//! yields a view. An invalid selection writes the empty fragment, and the
//! empty state is always valid, so settling takes at most two passes.

use crate::catalog::Catalog;
use crate::filters::Filters;
use crate::view::{self, View};
use tracing::debug;

/// Where the fragment lives: the browser location, a CLI argument, a test double.
pub trait Location {
    /// The current fragment, with or without its leading `#`.
    fn fragment(&self) -> String;
    fn set_fragment(&mut self, fragment: &str);
}

/// A fragment held in memory that remembers every write, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    pub fragment: String,
    pub writes: Vec<String>,
}

impl MemoryLocation {
    pub fn at(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_string(),
            writes: Vec::new(),
        }
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.writes.push(fragment.to_string());
    }
}

/// Outcome of a single fragment pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pass {
    Rendered(View),
    /// The fragment held an invalid selection; write this one and run again
    Rewrite(String),
}

/// Filter state of one page view over a fixed catalog.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    filters: Filters,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filters: Filters::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The state of the last successful pass.
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Handle a fragment change.
    ///
    /// The fragment fully replaces the current state. An invalid state is
    /// dropped as a whole: all three fields go back to empty together.
    pub fn fragment_changed(&mut self, fragment: &str) -> Pass {
        let parsed = Filters::from_fragment(fragment);
        match view::build(&self.catalog, &parsed) {
            Ok(view) => {
                debug!(fragment, groups = view.groups.len(), "filter pass");
                self.filters = parsed;
                Pass::Rendered(view)
            }
            Err(invalid) => {
                debug!(fragment, %invalid, "resetting filters");
                self.filters = Filters::default();
                Pass::Rewrite(self.filters.to_fragment())
            }
        }
    }

    /// Run passes from the location's current fragment until a view comes out.
    ///
    /// Rewrites are written back to `location` and the next pass runs on the
    /// written value directly, so a location that drops writes can't cause
    /// a loop.
    pub fn settle(&mut self, location: &mut impl Location) -> View {
        let mut fragment = location.fragment();
        loop {
            match self.fragment_changed(&fragment) {
                Pass::Rendered(view) => return view,
                Pass::Rewrite(next) => {
                    location.set_fragment(&next);
                    fragment = next;
                }
            }
        }
    }

    /// The version select changed: only the new version is kept.
    pub fn select_version(&mut self, version: &str, location: &mut impl Location) -> View {
        self.commit(Filters::with_version(version), location)
    }

    pub fn toggle_module(
        &mut self,
        module: &str,
        checked: bool,
        location: &mut impl Location,
    ) -> View {
        let next = self.filters.clone().toggle_module(module, checked);
        self.commit(next, location)
    }

    pub fn toggle_tag(&mut self, tag: &str, checked: bool, location: &mut impl Location) -> View {
        let next = self.filters.clone().toggle_tag(tag, checked);
        self.commit(next, location)
    }

    fn commit(&mut self, next: Filters, location: &mut impl Location) -> View {
        location.set_fragment(&next.to_fragment());
        self.filters = next;
        self.settle(location)
    }
}
