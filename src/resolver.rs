//! Identifier Resolver: classify and resolve strings against the collection's
//! two identifier namespaces.
//!
//! A lookup string may be a stable node ID or a human-readable title. IDs are
//! unique; titles are not. [Resolver::classify] checks ID membership first and
//! title membership second, so an ID match always wins when a string could
//! belong to both namespaces. An ambiguous title match resolves to the first
//! matching record in repository order alongside a non-fatal
//! [CollectionEvent::DuplicateTitle] advisory.

use std::sync::mpsc::Sender;

use crate::{
    catalog::Catalog,
    error::ZettelError,
    event::CollectionEvent,
    properties::{NodeId, NodeRecord},
};

/// Classification of a lookup string against the current node set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Id,
    Title,
    Unresolvable,
}

#[derive(Debug)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    events: Option<Sender<CollectionEvent>>,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Resolver {
            catalog,
            events: None,
        }
    }

    /// A resolver that raises advisory events on `events`. A dropped receiver
    /// never fails the triggering call.
    pub fn with_events(catalog: &'a Catalog, events: Sender<CollectionEvent>) -> Self {
        Resolver {
            catalog,
            events: Some(events),
        }
    }

    /// Two ordered membership checks; ID membership takes precedence.
    pub fn classify(&self, identifier: &str) -> IdentifierKind {
        if self.catalog.contains_id(identifier) {
            IdentifierKind::Id
        } else if self.catalog.contains_title(identifier) {
            IdentifierKind::Title
        } else {
            IdentifierKind::Unresolvable
        }
    }

    /// Resolve an identifier to its record.
    ///
    /// A title that is a member of the duplicate-title set resolves to the
    /// first matching record in repository order and raises a
    /// [CollectionEvent::DuplicateTitle] advisory. An unresolvable identifier
    /// fails with [ZettelError::NotFound] naming the identifier.
    pub fn resolve(&self, identifier: &str) -> Result<&'a NodeRecord, ZettelError> {
        let not_found = || ZettelError::NotFound(identifier.to_string());
        match self.classify(identifier) {
            IdentifierKind::Id => self.catalog.get_by_id_str(identifier).ok_or_else(not_found),
            IdentifierKind::Title => {
                let record = self
                    .catalog
                    .first_title_match(identifier)
                    .ok_or_else(not_found)?;
                if self.catalog.duplicate_titles().contains(identifier) {
                    self.advise_duplicate(identifier, &record.id);
                }
                Ok(record)
            }
            IdentifierKind::Unresolvable => Err(not_found()),
        }
    }

    /// Title of the node named by `identifier` (either namespace).
    pub fn title_of(&self, identifier: &str) -> Result<&'a str, ZettelError> {
        Ok(&self.resolve(identifier)?.title)
    }

    /// Stable ID of the node named by `identifier` (either namespace).
    pub fn id_of(&self, identifier: &str) -> Result<&'a NodeId, ZettelError> {
        Ok(&self.resolve(identifier)?.id)
    }

    /// Ordered link-target list of the node named by `identifier`, self-entry
    /// included.
    pub fn links_of(&self, identifier: &str) -> Result<&'a [NodeId], ZettelError> {
        Ok(&self.resolve(identifier)?.links)
    }

    fn advise_duplicate(&self, title: &str, resolved: &NodeId) {
        tracing::warn!(
            title,
            %resolved,
            "title is duplicated; resolving to the first match in collection order"
        );
        if let Some(tx) = &self.events {
            tx.send(CollectionEvent::DuplicateTitle {
                title: title.to_string(),
                resolved: resolved.clone(),
            })
            .ok();
        }
    }
}
