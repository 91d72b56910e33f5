//! Facet derivation over a static document list.
//!
//! A [`Catalog`] is built once from the document list and the host-supplied
//! latest version, then queried on every filter pass. Nothing here caches:
//! each derived list is recomputed from the documents, which keeps every
//! query a pure function of its inputs.

use crate::collate;
use crate::types::Document;

/// Documents grouped under one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub module: &'a str,
    /// Ordered by title, case-insensitively
    pub documents: Vec<&'a Document>,
}

/// The document list together with the latest version label.
#[derive(Debug, Clone)]
pub struct Catalog {
    documents: Vec<Document>,
    latest: String,
}

impl Catalog {
    pub fn new(documents: Vec<Document>, latest: impl Into<String>) -> Self {
        Self {
            documents,
            latest: latest.into(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The version shown when no version filter is set.
    pub fn latest(&self) -> &str {
        &self.latest
    }

    /// Distinct versions, numeric runs compared by magnitude.
    pub fn versions(&self) -> Vec<String> {
        collate::sort_versions(self.documents.iter().map(|d| d.version.clone()).collect())
    }

    /// Distinct modules with at least one document in `version`.
    pub fn modules(&self, version: &str) -> Vec<String> {
        collate::sort_insensitive(
            self.in_version(version)
                .map(|d| d.module.clone())
                .collect(),
        )
    }

    /// Distinct tags carried by documents in `version`.
    pub fn tags(&self, version: &str) -> Vec<String> {
        collate::sort_insensitive(
            self.in_version(version)
                .flat_map(|d| d.tags.iter().cloned())
                .collect(),
        )
    }

    /// Documents in `version` grouped by module.
    ///
    /// Documents are sorted by title first, then binned; groups appear in
    /// the order their module is first met after that sort, not
    /// alphabetically.
    pub fn groups(&self, version: &str) -> Vec<Group<'_>> {
        let mut documents: Vec<&Document> = self
            .documents
            .iter()
            .filter(|d| d.version == version)
            .collect();
        documents.sort_by(|x, y| collate::insensitive(&x.title, &y.title));

        let mut groups: Vec<Group<'_>> = Vec::new();
        for doc in documents {
            match groups.iter_mut().find(|g| g.module == doc.module) {
                Some(group) => group.documents.push(doc),
                None => groups.push(Group {
                    module: &doc.module,
                    documents: vec![doc],
                }),
            }
        }
        groups
    }

    fn in_version<'a>(&'a self, version: &'a str) -> impl Iterator<Item = &'a Document> + 'a {
        self.documents.iter().filter(move |d| d.version == version)
    }
}
