//! Shared test utilities for collection testing.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::{properties::NodeId, repository::RawNodeData};

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Build a [RawNodeData] from `(id, title, tags, links)` tuples. File paths
/// are synthesized from the ID. Entries must already be ID-ascending, per the
/// repository contract.
pub fn raw(entries: &[(&str, &str, &[&str], &[&str])]) -> RawNodeData {
    let mut data = RawNodeData::default();
    for (id, title, tags, links) in entries {
        data.ids.push(NodeId::from(*id));
        data.files.push(PathBuf::from(format!("notes/{id}.org")));
        data.titles.push(title.to_string());
        data.tags
            .push(BTreeSet::from_iter(tags.iter().map(|t| t.to_string())));
        data.links
            .push(links.iter().map(|l| NodeId::from(*l)).collect());
    }
    data
}

/// The three-node scenario used throughout:
/// N1(id=1, "X", {t1}, [1]); N2(id=2, "Y", {t2}, [1,2]); N3(id=3, "Z", {t1}, [3]).
/// N2 references N1; N3 only references itself.
pub fn three_node_collection() -> RawNodeData {
    init_logging();
    raw(&[
        ("1", "X", &["t1"], &["1"]),
        ("2", "Y", &["t2"], &["2", "1"]),
        ("3", "Z", &["t1"], &["3"]),
    ])
}

/// Titles ["A", "B", "A"] across three IDs, for duplicate-title behavior.
pub fn duplicate_title_collection() -> RawNodeData {
    init_logging();
    raw(&[
        ("1", "A", &["t1"], &["1"]),
        ("2", "B", &[], &["2", "1"]),
        ("3", "A", &["t2"], &["3", "2"]),
    ])
}
