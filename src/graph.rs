//! Link Graph: the directed multigraph of backlinks plus orphan analysis.
//!
//! Every occurrence of a target ID in a record's link list becomes one edge,
//! so edge multiplicity between an ordered pair equals the number of times
//! the source's body references the target. Self-loops are permitted, and
//! dangling targets (IDs absent from the catalog) are retained as vertices
//! rather than rejected.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::{catalog::Catalog, properties::NodeId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkGraph {
    graph: petgraph::Graph<NodeId, ()>,
    orphans: BTreeSet<NodeId>,
    is_connected: bool,
}

impl Default for LinkGraph {
    fn default() -> Self {
        LinkGraph {
            graph: petgraph::Graph::new(),
            orphans: BTreeSet::new(),
            is_connected: true,
        }
    }
}

impl LinkGraph {
    /// Build the multigraph and orphan classification for a catalog.
    ///
    /// A node is an orphan iff its link list minus the conventional self-entry
    /// is empty *and* no other record's link list contains its ID. The
    /// connectivity flag is true iff the orphan set is empty.
    pub fn construct(catalog: &Catalog) -> LinkGraph {
        let mut graph = petgraph::Graph::new();
        let mut id_to_index: BTreeMap<NodeId, NodeIndex> = BTreeMap::new();

        // Intern catalog nodes first so records without links still appear as
        // vertices, then dangling targets as they are encountered.
        for record in catalog.records() {
            id_to_index
                .entry(record.id.clone())
                .or_insert_with(|| graph.add_node(record.id.clone()));
        }
        for record in catalog.records() {
            let source = id_to_index[&record.id];
            for target in &record.links {
                let sink = *id_to_index
                    .entry(target.clone())
                    .or_insert_with(|| graph.add_node(target.clone()));
                graph.add_edge(source, sink, ());
            }
        }

        // IDs referenced by some *other* record's link list.
        let mut referenced: BTreeSet<&NodeId> = BTreeSet::new();
        for record in catalog.records() {
            referenced.extend(record.non_self_links());
        }

        let mut orphans = BTreeSet::new();
        for record in catalog.records() {
            let points_to = record.non_self_links().next().is_some();
            let pointed_to = referenced.contains(&record.id);
            if !points_to && !pointed_to {
                orphans.insert(record.id.clone());
            }
        }
        let is_connected = orphans.is_empty();
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            orphans = orphans.len(),
            is_connected,
            "constructed link graph"
        );

        LinkGraph {
            graph,
            orphans,
            is_connected,
        }
    }

    pub fn as_graph(&self) -> &petgraph::Graph<NodeId, ()> {
        &self.graph
    }

    /// Nodes with no outgoing non-self link and no incoming link from another
    /// node.
    pub fn orphans(&self) -> &BTreeSet<NodeId> {
        &self.orphans
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.graph.node_weights().any(|weight| weight == id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of parallel edges from `source` to `sink`, i.e. how many times
    /// `source`'s link list names `sink`.
    pub fn multiplicity(&self, source: &NodeId, sink: &NodeId) -> usize {
        self.graph
            .raw_edges()
            .iter()
            .filter(|edge| {
                self.graph[edge.source()] == *source && self.graph[edge.target()] == *sink
            })
            .count()
    }
}

impl std::fmt::Display for LinkGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LinkGraph({} nodes, {} edges, {} orphans)",
            self.node_count(),
            self.edge_count(),
            self.orphans.len()
        )
    }
}
