//! Filter Engine: derive independent sub-collections by tag predicates.
//!
//! Every filter reads an immutable source [Catalog], selects records with a
//! per-node predicate (optionally negated via `exclude`), and rebuilds a
//! fresh [Catalog] + [LinkGraph] pair from the retained set alone: duplicate
//! titles, the ID↔title map, the multigraph, and the orphan set are all
//! recomputed. Retained records keep their original relative order, and
//! nothing in the result aliases the source.
//!
//! Link-list entries that target dropped nodes stay in the retained records
//! and appear in the rebuilt multigraph as dangling edges, matching the
//! construction-time treatment of unknown targets. Orphan analysis on the
//! derived pair only counts references among retained records.

use regex::Regex;
use std::collections::BTreeSet;

use crate::{
    catalog::Catalog,
    error::ZettelError,
    graph::LinkGraph,
    properties::NodeRecord,
};

/// Retain nodes whose tag set intersects `tags`; with `exclude`, retain the
/// complement instead.
///
/// An empty `tags` set intersects nothing, so inclusive filtering yields an
/// empty collection and exclusive filtering yields the full one.
pub fn filter_by_tags(
    catalog: &Catalog,
    tags: &BTreeSet<String>,
    exclude: bool,
) -> Result<(Catalog, LinkGraph), ZettelError> {
    derive(
        catalog,
        |record| tags.iter().any(|tag| record.has_tag(tag)),
        exclude,
    )
}

/// Retain nodes where some prefix-anchored pattern matches some tag; patterns
/// combine with OR. With `exclude`, retain the complement instead.
///
/// Each pattern is compiled anchored at the start of the tag, so `"proj"`
/// matches `"project"` and `"proj/active"` but not `"subproject"`. An invalid
/// pattern fails the whole call with [ZettelError::Pattern].
pub fn filter_by_tag_pattern(
    catalog: &Catalog,
    patterns: &[String],
    exclude: bool,
) -> Result<(Catalog, LinkGraph), ZettelError> {
    let compiled = patterns
        .iter()
        .map(|pattern| Regex::new(&format!("^(?:{pattern})")))
        .collect::<Result<Vec<Regex>, _>>()?;
    derive(
        catalog,
        |record| {
            compiled
                .iter()
                .any(|rx| record.tags.iter().any(|tag| rx.is_match(tag)))
        },
        exclude,
    )
}

/// Derive the sub-collection of non-orphan nodes. Orphan analysis on the
/// result is recomputed from the retained set like every other derivation.
pub fn remove_orphans(
    catalog: &Catalog,
    graph: &LinkGraph,
) -> Result<(Catalog, LinkGraph), ZettelError> {
    derive(
        catalog,
        |record| !graph.orphans().contains(&record.id),
        false,
    )
}

fn derive<F>(
    catalog: &Catalog,
    predicate: F,
    exclude: bool,
) -> Result<(Catalog, LinkGraph), ZettelError>
where
    F: Fn(&NodeRecord) -> bool,
{
    let retained: Vec<NodeRecord> = catalog
        .records()
        .filter(|record| predicate(record) != exclude)
        .cloned()
        .collect();
    tracing::debug!(
        source = catalog.len(),
        retained = retained.len(),
        exclude,
        "deriving filtered sub-collection"
    );
    let derived = Catalog::from_records(retained, None)?;
    let graph = LinkGraph::construct(&derived);
    Ok((derived, graph))
}
