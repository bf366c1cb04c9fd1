//! End-to-end integration tests: repository seam through construction,
//! resolution, and filtered derivation.

mod common;

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::mpsc;

use test_log::test;

use common::raw_export;
use zettel_core::{
    catalog::Catalog,
    event::CollectionEvent,
    filter::filter_by_tags,
    graph::LinkGraph,
    properties::NodeId,
    repository::{NodeRepository, RawNodeData},
    resolver::{IdentifierKind, Resolver},
    ZettelError,
};

/// In-memory repository standing in for the external collaborator.
struct FixtureRepository {
    data: RawNodeData,
    fail: bool,
}

impl NodeRepository for FixtureRepository {
    fn load(&self, location: &Path) -> Result<RawNodeData, ZettelError> {
        if self.fail {
            return Err(ZettelError::Io(format!(
                "export unreachable at {}",
                location.display()
            )));
        }
        Ok(self.data.clone())
    }
}

fn scenario() -> RawNodeData {
    raw_export(&[
        ("1", "X", &["t1"], &["1"]),
        ("2", "Y", &["t2"], &["2", "1"]),
        ("3", "Z", &["t1"], &["3"]),
    ])
}

#[test]
fn repository_failure_aborts_construction_with_no_partial_result() {
    let repository = FixtureRepository {
        data: scenario(),
        fail: true,
    };
    let result = Catalog::from_repository(&repository, Path::new("export.db"));
    match result {
        Err(ZettelError::Io(msg)) => assert!(msg.contains("export.db")),
        other => panic!("expected Io failure, got {other:?}"),
    }
}

#[test]
fn full_pipeline_matches_the_reference_scenario() {
    let repository = FixtureRepository {
        data: scenario(),
        fail: false,
    };
    let catalog = Catalog::from_repository(&repository, Path::new("export.db")).unwrap();
    let graph = LinkGraph::construct(&catalog);

    // N1 is referenced by N2; N3 has no outgoing beyond self and no incoming.
    assert_eq!(graph.orphans(), &BTreeSet::from([NodeId::from("3")]));
    assert!(!graph.is_connected());

    let resolver = Resolver::new(&catalog);
    assert_eq!(resolver.classify("1"), IdentifierKind::Id);
    assert_eq!(resolver.classify("X"), IdentifierKind::Title);
    assert_eq!(resolver.classify("W"), IdentifierKind::Unresolvable);

    // Derive the {t1} sub-collection and recompute everything on it.
    let tags = BTreeSet::from(["t1".to_string()]);
    let (sub, sub_graph) = filter_by_tags(&catalog, &tags, false).unwrap();
    let ids: Vec<&str> = sub.records().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(
        sub_graph.orphans(),
        &BTreeSet::from([NodeId::from("1"), NodeId::from("3")]),
        "N2's reference to N1 left with N2"
    );
    assert!(!sub_graph.is_connected());

    // The source pair is untouched by the derivation.
    assert_eq!(catalog.len(), 3);
    assert_eq!(graph.orphans().len(), 1);
}

#[test]
fn duplicate_title_advisories_flow_to_the_consumer_channel() {
    let data = raw_export(&[
        ("1", "A", &[], &["1"]),
        ("2", "B", &[], &["2", "1"]),
        ("3", "A", &[], &["3"]),
    ]);
    let (tx, rx) = mpsc::channel();
    let catalog = Catalog::construct_with_events(data, Some(tx.clone())).unwrap();
    assert!(matches!(
        rx.try_recv().unwrap(),
        CollectionEvent::DuplicateTitlesDetected { .. }
    ));

    let resolver = Resolver::with_events(&catalog, tx);
    let record = resolver.resolve("A").unwrap();
    assert_eq!(record.id, NodeId::from("1"));

    let event = rx.try_recv().unwrap();
    assert_eq!(
        event,
        CollectionEvent::DuplicateTitle {
            title: "A".to_string(),
            resolved: NodeId::from("1"),
        }
    );
    // Events serialize for consumers that forward them.
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("DuplicateTitle"));
}
