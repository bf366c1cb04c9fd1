//! # zettel-core
//!
//! A Rust library for assembling a flat relational export of a personal knowledge
//! collection into a queryable in-memory graph of notes.
//!
//! ## Overview
//!
//! zettel-core consumes the raw per-node attribute sequences produced by a
//! [`repository::NodeRepository`] (IDs, file paths, titles, tag sets, link-target
//! lists) and builds two tightly coupled structures:
//!
//! - **[`catalog::Catalog`]**: Typed node records with ID and title lookup maps,
//!   plus the set of titles shared by more than one node.
//! - **[`graph::LinkGraph`]**: A directed multigraph over node IDs, with orphan
//!   classification and a collection-level connectivity flag.
//!
//! On top of that pair sit two query surfaces:
//!
//! - **[`resolver::Resolver`]**: Classifies an arbitrary string against the two
//!   identifier namespaces (stable ID vs. human-readable title, ID winning ties)
//!   and resolves it to a record, signalling ambiguous title matches through a
//!   non-fatal [`event::CollectionEvent`] advisory.
//! - **[`filter`]**: Derives fresh, independently consistent `Catalog` +
//!   `LinkGraph` pairs restricted by exact or prefix-pattern tag predicates,
//!   inclusive or exclusive, without ever mutating the source.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use zettel_core::{catalog::Catalog, filter, graph::LinkGraph, resolver::Resolver};
//! use zettel_core::repository::RawNodeData;
//!
//! # fn main() -> Result<(), zettel_core::ZettelError> {
//! let data = RawNodeData {
//!     ids: vec!["1".into(), "2".into()],
//!     files: vec!["a.org".into(), "b.org".into()],
//!     titles: vec!["Alpha".into(), "Beta".into()],
//!     tags: vec![
//!         BTreeSet::from(["math".to_string()]),
//!         BTreeSet::from(["music".to_string()]),
//!     ],
//!     links: vec![vec!["1".into()], vec!["2".into(), "1".into()]],
//! };
//!
//! let catalog = Catalog::construct(data)?;
//! let graph = LinkGraph::construct(&catalog);
//! assert!(graph.is_connected());
//!
//! let resolver = Resolver::new(&catalog);
//! let node = resolver.resolve("Alpha")?;
//! assert_eq!(node.id.as_str(), "1");
//!
//! let tags = BTreeSet::from(["math".to_string()]);
//! let (sub, sub_graph) = filter::filter_by_tags(&catalog, &tags, false)?;
//! assert_eq!(sub.len(), 1);
//! assert!(!sub_graph.is_connected());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Guide
//!
//! Start with [`repository`] for the input contract, then [`catalog`] and
//! [`graph`] for construction, [`resolver`] for lookups, and [`filter`] for
//! derived sub-collections.

pub mod catalog;
pub mod error;
pub mod event;
pub mod filter;
pub mod graph;
pub mod properties;
pub mod repository;
pub mod resolver;
#[cfg(test)]
mod tests;

pub use error::*;
