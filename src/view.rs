//! Filter validation and the declarative view model.
//!
//! [`build`] turns a catalog and a filter state into a [`View`]: the three
//! facet controls plus the grouped match list. It doesn't touch any output
//! format, so the same view drives the maud renderer in [`crate::render`],
//! the CLI summary, and JSON dumps.
//!
//! A filter value that the data doesn't offer for the active version makes
//! the whole state invalid. The caller recovers by starting over from the
//! empty state, which is always valid.

use crate::catalog::Catalog;
use crate::collate;
use crate::filters::Filters;
use crate::types::Document;
use serde::Serialize;
use thiserror::Error;

/// A filter value absent from its derived facet list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSelection {
    #[error("unknown version {0:?}")]
    Version(String),
    #[error("module {module:?} has no documents in version {version:?}")]
    Module { version: String, module: String },
    #[error("tag {tag:?} is not used in version {version:?}")]
    Tag { version: String, tag: String },
}

/// One entry of the version select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionOption {
    pub value: String,
    /// Equal to the host-supplied latest version
    pub latest: bool,
    pub selected: bool,
}

/// One module or tag checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub checked: bool,
}

/// A module heading with the documents that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchGroup {
    pub module: String,
    pub documents: Vec<Document>,
}

/// Everything a renderer needs for one filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub filters: Filters,
    pub active_version: String,
    pub versions: Vec<VersionOption>,
    pub modules: Vec<FacetOption>,
    pub tags: Vec<FacetOption>,
    /// Module groups ordered case-insensitively; never empty
    pub groups: Vec<MatchGroup>,
}

impl View {
    pub fn match_count(&self) -> usize {
        self.groups.iter().map(|g| g.documents.len()).sum()
    }
}

/// The version governing modules, tags, and matches.
pub fn active_version<'a>(catalog: &'a Catalog, filters: &'a Filters) -> &'a str {
    if filters.version.is_empty() {
        catalog.latest()
    } else {
        &filters.version
    }
}

/// Check every non-empty filter against the facets derived for the active version.
pub fn validate(catalog: &Catalog, filters: &Filters) -> Result<(), InvalidSelection> {
    let version = active_version(catalog, filters);

    if !filters.version.is_empty() && !catalog.versions().contains(&filters.version) {
        return Err(InvalidSelection::Version(filters.version.clone()));
    }
    if !filters.module.is_empty() && !catalog.modules(version).contains(&filters.module) {
        return Err(InvalidSelection::Module {
            version: version.to_string(),
            module: filters.module.clone(),
        });
    }
    if !filters.tag.is_empty() && !catalog.tags(version).contains(&filters.tag) {
        return Err(InvalidSelection::Tag {
            version: version.to_string(),
            tag: filters.tag.clone(),
        });
    }
    Ok(())
}

/// Validate `filters` and derive the view for them.
pub fn build(catalog: &Catalog, filters: &Filters) -> Result<View, InvalidSelection> {
    validate(catalog, filters)?;

    let version = active_version(catalog, filters);

    let versions = catalog
        .versions()
        .into_iter()
        .map(|v| VersionOption {
            latest: v == catalog.latest(),
            selected: v == version,
            value: v,
        })
        .collect();

    let checkboxes = |values: Vec<String>, selected: &str| -> Vec<FacetOption> {
        values
            .into_iter()
            .map(|value| FacetOption {
                checked: value == selected,
                value,
            })
            .collect()
    };

    let mut groups: Vec<MatchGroup> = catalog
        .groups(version)
        .into_iter()
        .filter_map(|group| {
            let documents: Vec<Document> = group
                .documents
                .into_iter()
                .filter(|doc| matches(doc, filters))
                .cloned()
                .collect();
            (!documents.is_empty()).then(|| MatchGroup {
                module: group.module.to_string(),
                documents,
            })
        })
        .collect();
    groups.sort_by(|x, y| collate::insensitive(&x.module, &y.module));

    Ok(View {
        filters: filters.clone(),
        active_version: version.to_string(),
        versions,
        modules: checkboxes(catalog.modules(version), &filters.module),
        tags: checkboxes(catalog.tags(version), &filters.tag),
        groups,
    })
}

/// Version, module, and tag constraints; unset ones pass everything.
fn matches(doc: &Document, filters: &Filters) -> bool {
    (filters.version.is_empty() || doc.version == filters.version)
        && (filters.module.is_empty() || doc.module == filters.module)
        && (filters.tag.is_empty() || doc.has_tag(&filters.tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn module_names(view: &View) -> Vec<&str> {
        view.groups.iter().map(|g| g.module.as_str()).collect()
    }

    fn group_titles<'a>(view: &'a View, module: &str) -> Vec<&'a str> {
        view.groups
            .iter()
            .find(|g| g.module == module)
            .map(|g| g.documents.iter().map(|d| d.title.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn empty_filters_show_latest_version() {
        let view = build(&sample_catalog(), &Filters::default()).unwrap();
        assert_eq!(view.active_version, "2.0");
        assert_eq!(module_names(&view), ["Core", "Json"]);
        let selected: Vec<&str> = view
            .versions
            .iter()
            .filter(|v| v.selected)
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(selected, ["2.0"]);
    }

    #[test]
    fn latest_version_is_flagged() {
        let view = build(&sample_catalog(), &Filters::with_version("1.0")).unwrap();
        let flags: Vec<(&str, bool, bool)> = view
            .versions
            .iter()
            .map(|v| (v.value.as_str(), v.latest, v.selected))
            .collect();
        assert_eq!(flags, [("1.0", false, true), ("2.0", true, false)]);
    }

    #[test]
    fn single_module_example() {
        let catalog = Catalog::new(
            vec![
                doc("1.0", "A", "Zeta", &["x"]),
                doc("1.0", "A", "Alpha", &["y"]),
            ],
            "1.0",
        );
        let view = build(&catalog, &Filters::default()).unwrap();
        let modules: Vec<&str> = view.modules.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(modules, ["A"]);
        assert_eq!(group_titles(&view, "A"), ["Alpha", "Zeta"]);
    }

    #[test]
    fn unknown_module_is_invalid() {
        let catalog = Catalog::new(
            vec![
                doc("1.0", "A", "Zeta", &["x"]),
                doc("1.0", "A", "Alpha", &["y"]),
            ],
            "1.0",
        );
        let filters = Filters::default().toggle_module("B", true);
        assert_eq!(
            build(&catalog, &filters),
            Err(InvalidSelection::Module {
                version: "1.0".to_string(),
                module: "B".to_string(),
            })
        );
    }

    #[test]
    fn unknown_version_is_invalid() {
        let err = validate(&sample_catalog(), &Filters::with_version("3.0")).unwrap_err();
        assert_eq!(err, InvalidSelection::Version("3.0".to_string()));
    }

    #[test]
    fn module_is_checked_against_active_version() {
        // "rest" exists only in 1.0, and the default version is 2.0
        let catalog = sample_catalog();
        let without_version = Filters::default().toggle_module("rest", true);
        assert!(validate(&catalog, &without_version).is_err());

        let with_version = Filters::with_version("1.0").toggle_module("rest", true);
        assert!(validate(&catalog, &with_version).is_ok());
    }

    #[test]
    fn tag_must_exist_in_active_version() {
        let catalog = sample_catalog();
        let filters = Filters::default().toggle_tag("reference", true);
        assert!(matches!(
            validate(&catalog, &filters),
            Err(InvalidSelection::Tag { .. })
        ));
    }

    #[test]
    fn tag_filter_drops_empty_groups() {
        let filters = Filters::with_version("1.0").toggle_tag("Tutorial", true);
        let view = build(&sample_catalog(), &filters).unwrap();
        assert_eq!(module_names(&view), ["Core"]);
        assert_eq!(group_titles(&view, "Core"), ["Getting Started"]);
        assert_eq!(view.match_count(), 1);
    }

    #[test]
    fn module_filter_keeps_only_that_group() {
        let filters = Filters::with_version("1.0").toggle_module("rest", true);
        let view = build(&sample_catalog(), &filters).unwrap();
        assert_eq!(module_names(&view), ["rest"]);
        let checked: Vec<&str> = view
            .modules
            .iter()
            .filter(|m| m.checked)
            .map(|m| m.value.as_str())
            .collect();
        assert_eq!(checked, ["rest"]);
    }

    #[test]
    fn groups_are_sorted_insensitively() {
        let catalog = Catalog::new(
            vec![
                doc("1.0", "beta", "a", &[]),
                doc("1.0", "Alpha", "b", &[]),
                doc("1.0", "Gamma", "c", &[]),
            ],
            "1.0",
        );
        let view = build(&catalog, &Filters::default()).unwrap();
        assert_eq!(module_names(&view), ["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn no_group_is_ever_empty() {
        let catalog = sample_catalog();
        for filters in [
            Filters::default(),
            Filters::with_version("1.0").toggle_tag("howto", true),
            Filters::with_version("1.0").toggle_module("Core", true),
            Filters::default().toggle_tag("howto", true),
        ] {
            let view = build(&catalog, &filters).unwrap();
            assert!(view.groups.iter().all(|g| !g.documents.is_empty()));
        }
    }

    #[test]
    fn building_is_deterministic() {
        let catalog = sample_catalog();
        let filters = Filters::with_version("1.0").toggle_tag("reference", true);
        assert_eq!(build(&catalog, &filters), build(&catalog, &filters));
    }

    #[test]
    fn latest_missing_from_data_yields_empty_facets() {
        let catalog = Catalog::new(vec![doc("1.0", "Core", "Intro", &["x"])], "9.9");
        let view = build(&catalog, &Filters::default()).unwrap();
        assert!(view.modules.is_empty());
        assert!(view.tags.is_empty());
        assert!(view.groups.is_empty());
        assert!(view.versions.iter().all(|v| !v.selected));
    }
}
