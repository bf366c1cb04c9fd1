//! [crate::properties] contains the basic building blocks for assembling and
//! manipulating [crate::catalog::Catalog]s and associated structures.

use serde::{Deserialize, Serialize};
use std::{
    borrow::Borrow,
    collections::BTreeSet,
    fmt::{Display, Formatter},
    path::PathBuf,
};

/// Stable node identifier.
///
/// An opaque string assigned by the repository, unique within a collection and
/// stable across renames of the note's title or file. `NodeId`s sort by their
/// string value, which is also the order the repository emits records in.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Sound for BTreeMap/BTreeSet lookup by &str: ordering, equality, and hashing
// all delegate to the inner String.
impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single addressable unit of content (file or heading) in the collection.
///
/// Records are owned exclusively by the [crate::catalog::Catalog] and keyed by
/// [NodeId]. The `links` list is ordered as it appears in the source; by
/// repository convention its first element is the node's own ID.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Path of the file the node lives in. Multiple nodes may share a file.
    pub file: PathBuf,
    /// Human-readable title. Not guaranteed unique within the collection.
    pub title: String,
    pub id: NodeId,
    pub tags: BTreeSet<String>,
    /// Ordered link targets, self-entry first by convention. Targets are not
    /// guaranteed to exist in the collection.
    pub links: Vec<NodeId>,
}

impl NodeRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Link targets excluding the conventional self-reference. This is the
    /// list orphan analysis counts as outgoing.
    pub fn non_self_links(&self) -> impl Iterator<Item = &NodeId> {
        self.links.iter().filter(move |target| **target != self.id)
    }
}

impl Display for NodeRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.title)
    }
}
