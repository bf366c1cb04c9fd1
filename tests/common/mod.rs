//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use zettel_core::properties::NodeId;
use zettel_core::repository::RawNodeData;

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times — subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Build a [RawNodeData] from `(id, title, tags, links)` tuples, synthesizing
/// one file path per node.
#[allow(dead_code)]
pub fn raw_export(entries: &[(&str, &str, &[&str], &[&str])]) -> RawNodeData {
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
