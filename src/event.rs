use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::properties::NodeId;

/// Non-fatal advisory signals raised while querying a collection.
///
/// Delivered over an optional `std::sync::mpsc` channel. Consumers may log,
/// surface, or ignore them; a missing or closed receiver never aborts the
/// call that raised the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionEvent {
    /// A title-based lookup resolved ambiguously. Carries the ambiguous title
    /// and the ID of the record chosen (first match in collection order).
    DuplicateTitle { title: String, resolved: NodeId },
    /// Construction found titles shared by two or more nodes. Title lookups
    /// against this catalog will be non-exhaustive.
    DuplicateTitlesDetected { titles: Vec<String> },
}

impl Display for CollectionEvent {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CollectionEvent::DuplicateTitle { .. } => write!(f, "DuplicateTitle"),
            CollectionEvent::DuplicateTitlesDetected { .. } => {
                write!(f, "DuplicateTitlesDetected")
            }
        }
    }
}
