//! Node Catalog: the typed, immutable record store of a collection.
//!
//! A [Catalog] owns one [NodeRecord] per stable ID, the repository-ordered ID
//! and title sequences, the ID→title map, and the set of duplicated titles.
//! It is constructed once from [RawNodeData] and never mutated afterwards;
//! derived sub-collections come from [crate::filter].

use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    path::{Path, PathBuf},
    sync::mpsc::Sender,
};

use crate::{
    error::ZettelError,
    event::CollectionEvent,
    properties::{NodeId, NodeRecord},
    repository::{NodeRepository, RawNodeData},
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    index: BTreeMap<NodeId, NodeRecord>,
    /// IDs in repository order (ascending). Filtering preserves relative order.
    ids: Vec<NodeId>,
    /// Titles index-aligned with `ids`. Title resolution picks the first match
    /// in this sequence.
    titles: Vec<String>,
    id_title_map: BTreeMap<NodeId, String>,
    duplicate_titles: BTreeSet<String>,
}

impl Catalog {
    /// Build a catalog from the repository's raw export.
    ///
    /// Fails with [ZettelError::Construction] on index misalignment or a
    /// repeated ID; no partial catalog is returned.
    pub fn construct(data: RawNodeData) -> Result<Catalog, ZettelError> {
        Self::construct_with_events(data, None)
    }

    /// Same as [Catalog::construct], additionally raising a
    /// [CollectionEvent::DuplicateTitlesDetected] advisory on `events` when
    /// the constructed catalog contains duplicated titles.
    pub fn construct_with_events(
        data: RawNodeData,
        events: Option<Sender<CollectionEvent>>,
    ) -> Result<Catalog, ZettelError> {
        data.validate()?;
        let mut records = Vec::with_capacity(data.len());
        let RawNodeData {
            ids,
            files,
            titles,
            tags,
            links,
        } = data;
        for ((((id, file), title), tags), links) in ids
            .into_iter()
            .zip(files)
            .zip(titles)
            .zip(tags)
            .zip(links)
        {
            records.push(NodeRecord {
                file,
                title,
                id,
                tags,
                links,
            });
        }
        Self::from_records(records, events)
    }

    /// Single blocking repository call followed by construction. Any
    /// repository failure surfaces as the construction failure, unretried.
    pub fn from_repository<R: NodeRepository>(
        repository: &R,
        location: &Path,
    ) -> Result<Catalog, ZettelError> {
        Catalog::construct(repository.load(location)?)
    }

    /// Build all lookup structures from an ordered record sequence. Shared by
    /// construction and by [crate::filter]'s rebuilds.
    pub(crate) fn from_records(
        records: Vec<NodeRecord>,
        events: Option<Sender<CollectionEvent>>,
    ) -> Result<Catalog, ZettelError> {
        let mut index = BTreeMap::new();
        let mut ids = Vec::with_capacity(records.len());
        let mut titles = Vec::with_capacity(records.len());
        let mut id_title_map = BTreeMap::new();
        let mut seen = BTreeSet::new();
        let mut duplicate_titles = BTreeSet::new();

        for record in records {
            // First occurrence stays unflagged; second and later flag the title.
            if !seen.insert(record.title.clone()) {
                duplicate_titles.insert(record.title.clone());
            }
            ids.push(record.id.clone());
            titles.push(record.title.clone());
            id_title_map.insert(record.id.clone(), record.title.clone());
            let id = record.id.clone();
            if index.insert(id.clone(), record).is_some() {
                return Err(ZettelError::Construction(format!(
                    "repository emitted more than one record for id {id}"
                )));
            }
        }

        if !duplicate_titles.is_empty() {
            tracing::warn!(
                count = duplicate_titles.len(),
                "collection contains duplicated titles; title lookups will be non-exhaustive"
            );
            if let Some(tx) = events {
                tx.send(CollectionEvent::DuplicateTitlesDetected {
                    titles: duplicate_titles.iter().cloned().collect(),
                })
                .ok();
            }
        }
        tracing::debug!(nodes = ids.len(), "constructed catalog");

        Ok(Catalog {
            index,
            ids,
            titles,
            id_title_map,
            duplicate_titles,
        })
    }

    pub fn get(&self, id: &NodeId) -> Option<&NodeRecord> {
        self.index.get(id)
    }

    pub(crate) fn get_by_id_str(&self, id: &str) -> Option<&NodeRecord> {
        self.index.get(id)
    }

    /// First record whose title matches, in repository order.
    pub(crate) fn first_title_match(&self, title: &str) -> Option<&NodeRecord> {
        let position = self.titles.iter().position(|t| t == title)?;
        self.index.get(&self.ids[position])
    }

    /// Records in repository order (ID ascending).
    pub fn records(&self) -> impl Iterator<Item = &NodeRecord> {
        self.ids.iter().filter_map(|id| self.index.get(id))
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Titles carried by two or more nodes, computed once at construction.
    pub fn duplicate_titles(&self) -> &BTreeSet<String> {
        &self.duplicate_titles
    }

    pub fn has_duplicate_titles(&self) -> bool {
        !self.duplicate_titles.is_empty()
    }

    pub fn id_title_map(&self) -> &BTreeMap<NodeId, String> {
        &self.id_title_map
    }

    /// ID → ordered link-target list, self-entry included.
    pub fn backlink_index(&self) -> BTreeMap<NodeId, Vec<NodeId>> {
        self.index
            .values()
            .map(|record| (record.id.clone(), record.links.clone()))
            .collect()
    }

    /// ID → owning file path. Multiple nodes may map to the same file.
    pub fn file_index(&self) -> BTreeMap<NodeId, PathBuf> {
        self.index
            .values()
            .map(|record| (record.id.clone(), record.file.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catalog({} nodes, {} duplicated titles)",
            self.len(),
            self.duplicate_titles.len()
        )
    }
}
