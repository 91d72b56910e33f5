//! Orderings used when deriving facet lists.
//!
//! Two comparators cover every list the catalog produces:
//!
//! - [`insensitive`] for module names, tags, and titles
//! - [`sort_versions`] for version labels, where numeric runs compare by
//!   magnitude (`"2.9"` < `"2.10"`)
//!
//! Both break ties on the exact string, so equal values always end up next
//! to each other and the adjacent-only dedup that follows every sort removes
//! all exact duplicates. Values differing only in case (`"Core"`, `"core"`)
//! are distinct and both survive.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// A run of digits starting at a word boundary. `"v2"` has none, `"2.10"` has two.
static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+").expect("numeric run pattern is valid"));

/// Case-insensitive ordering with an exact-string tie-break.
pub fn insensitive(x: &str, y: &str) -> Ordering {
    x.to_lowercase()
        .cmp(&y.to_lowercase())
        .then_with(|| x.cmp(y))
}

/// Sort case-insensitively and drop adjacent duplicates.
pub fn sort_insensitive(mut values: Vec<String>) -> Vec<String> {
    values.sort_by(|x, y| insensitive(x, y));
    values.dedup();
    values
}

/// Sort version labels numeric-aware and drop adjacent duplicates.
///
/// Each numeric run is left-padded with zeros to the width of the longest
/// run in the list, then keys are compared lexicographically. The padded
/// key is only used for ordering: labels come back unchanged.
///
/// Digits glued to a preceding letter or digit are not a run of their own,
/// so `"v10"` and `"v9"` keep plain string order (`"v10"` < `"v9"`).
pub fn sort_versions(values: Vec<String>) -> Vec<String> {
    let width = values
        .iter()
        .flat_map(|v| NUMERIC_RUN.find_iter(v).map(|m| m.len()))
        .max()
        .unwrap_or(0);

    let mut keyed: Vec<(String, String)> = values
        .into_iter()
        .map(|v| (expand(&v, width), v))
        .collect();
    keyed.sort();
    keyed.dedup_by(|a, b| a.1 == b.1);

    keyed.into_iter().map(|(_, v)| v).collect()
}

/// Left-pad every numeric run in `version` to `width` digits.
fn expand(version: &str, width: usize) -> String {
    NUMERIC_RUN
        .replace_all(version, |caps: &regex::Captures| {
            format!("{:0>width$}", &caps[0], width = width)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn insensitive_ignores_case_first() {
        assert_eq!(insensitive("alpha", "Beta"), Ordering::Less);
        assert_eq!(insensitive("Zeta", "alpha"), Ordering::Greater);
    }

    #[test]
    fn insensitive_breaks_ties_on_exact_string() {
        assert_eq!(insensitive("Core", "core"), Ordering::Less);
        assert_eq!(insensitive("core", "core"), Ordering::Equal);
    }

    #[test]
    fn sort_insensitive_orders_and_dedups() {
        let sorted = sort_insensitive(strings(&["rest", "Core", "json", "core", "Core", "rest"]));
        assert_eq!(sorted, strings(&["Core", "core", "json", "rest"]));
    }

    #[test]
    fn dedup_removes_interleaved_exact_duplicates() {
        // Without the tie-break, "Core" and "core" could alternate after a
        // stable case-insensitive sort and leave duplicates behind.
        let sorted = sort_insensitive(strings(&["Core", "core", "Core", "core"]));
        assert_eq!(sorted, strings(&["Core", "core"]));
    }

    #[test]
    fn versions_compare_numeric_runs_by_magnitude() {
        let sorted = sort_versions(strings(&["10", "9", "2.10", "2.9", "1.0"]));
        assert_eq!(sorted, strings(&["1.0", "2.9", "2.10", "9", "10"]));
    }

    #[test]
    fn versions_dedup_after_sort() {
        let sorted = sort_versions(strings(&["1.0", "2.0", "1.0", "2.0", "1.0"]));
        assert_eq!(sorted, strings(&["1.0", "2.0"]));
    }

    #[test]
    fn versions_with_long_runs_are_not_truncated() {
        let sorted = sort_versions(strings(&["1234", "999", "2"]));
        assert_eq!(sorted, strings(&["2", "999", "1234"]));
    }

    #[test]
    fn versions_keep_their_labels() {
        let sorted = sort_versions(strings(&["0.49", "0.5", "01"]));
        assert_eq!(sorted, strings(&["0.5", "0.49", "01"]));
    }

    #[test]
    fn runs_glued_to_letters_are_not_padded() {
        assert_eq!(expand("v2.10", 3), "v2.010");
        assert_eq!(expand("rc-1", 2), "rc-01");
    }

    #[test]
    fn prefixed_versions_keep_string_order() {
        let sorted = sort_versions(strings(&["1.0.10", "1.0.9", "1.0", "v10", "v9"]));
        assert_eq!(sorted, strings(&["1.0", "1.0.9", "1.0.10", "v10", "v9"]));
    }

    #[test]
    fn empty_version_list() {
        assert!(sort_versions(Vec::new()).is_empty());
    }
}
