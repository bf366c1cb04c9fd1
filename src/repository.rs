//! The external data-source seam.
//!
//! A [NodeRepository] is an external collaborator that, given a location,
//! produces the flat relational export of a collection: four ordered,
//! index-aligned per-node attribute sequences keyed by a fifth sequence of
//! stable IDs in ascending order. The repository is consulted exactly once,
//! at construction time. Any failure is a hard construction failure with no
//! partial result and no retry.

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::{error::ZettelError, properties::NodeId};

/// The raw, index-aligned export of a node collection.
///
/// Index `i` across all five sequences describes one node. `ids` is sorted
/// ascending per the repository contract; each entry of `links` starts with
/// the owning node's own ID by convention.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNodeData {
    pub ids: Vec<NodeId>,
    pub files: Vec<PathBuf>,
    pub titles: Vec<String>,
    pub tags: Vec<BTreeSet<String>>,
    pub links: Vec<Vec<NodeId>>,
}

impl RawNodeData {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check the index-alignment invariant: every attribute sequence must have
    /// exactly one entry per ID.
    pub fn validate(&self) -> Result<(), ZettelError> {
        let count = self.ids.len();
        for (name, len) in [
            ("files", self.files.len()),
            ("titles", self.titles.len()),
            ("tags", self.tags.len()),
            ("links", self.links.len()),
        ] {
            if len != count {
                return Err(ZettelError::Construction(format!(
                    "index-aligned sequences disagree: {count} ids but {len} {name} entries"
                )));
            }
        }
        Ok(())
    }
}

/// External collaborator producing [RawNodeData] for a collection location.
///
/// Implementations own all I/O concerns (database files, network exports,
/// fixtures). Errors fold into [ZettelError] via its `From` conversions, e.g.
/// `std::io::Error` through [ZettelError::Io].
pub trait NodeRepository {
    fn load(&self, location: &Path) -> Result<RawNodeData, ZettelError>;
}
