//! Structural delta between two canonical topology graphs.
//!
//! Nodes compare by identifier, links by their ordered `(source, target)`
//! pair plus weight. A link whose pair exists in both graphs with a
//! different weight shows up twice: in `added` with the new weight and in
//! `removed` with the old one, so consumers can detect cost changes by
//! intersecting the two sets on endpoints. Result sets are sorted, making
//! the serialized diff of identical inputs byte-stable regardless of the
//! graphs' insertion order.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::warn;
use serde::Serialize;

use crate::error::TopologyError;
use crate::models::{Link, NetJsonNode, TopologyGraph};

/// The delta document produced by [diff]. Metadata describes the `new`
/// snapshot, the more recent one being authoritative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyDiff {
    pub protocol: Option<String>,
    pub version: Option<String>,
    pub revision: Option<String>,
    pub metric: Option<String>,
    pub added: GraphDelta,
    pub removed: GraphDelta,
}

/// One direction of a delta: the nodes and links present on one side only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphDelta {
    pub nodes: Vec<NetJsonNode>,
    pub links: Vec<Link>,
}

impl GraphDelta {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}

impl TopologyDiff {
    /// True when the two snapshots were structurally identical.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn to_json(&self) -> Result<String, TopologyError> {
        serde_json::to_string(self).map_err(TopologyError::Serialize)
    }

    pub fn to_json_pretty(&self) -> Result<String, TopologyError> {
        serde_json::to_string_pretty(self).map_err(TopologyError::Serialize)
    }
}

/// Computes the structural delta between an `old` and a `new` snapshot.
///
/// Both graphs are only read; comparing graphs with different protocols is
/// allowed (a warning is logged since the weight semantics may differ), the
/// caller is responsible for interpreting such diffs.
pub fn diff(old: &TopologyGraph, new: &TopologyGraph) -> TopologyDiff {
    if old.protocol() != new.protocol() {
        warn!(
            "comparing topologies with different protocols: {:?} vs {:?}",
            old.protocol(),
            new.protocol()
        );
    }
    TopologyDiff {
        protocol: new.protocol.clone(),
        version: new.version.clone(),
        revision: new.revision.clone(),
        metric: new.metric.clone(),
        added: GraphDelta {
            nodes: node_delta(new, old),
            links: link_delta(new, old),
        },
        removed: GraphDelta {
            nodes: node_delta(old, new),
            links: link_delta(old, new),
        },
    }
}

/// Nodes of `from` absent from `against`, sorted by identifier.
fn node_delta(from: &TopologyGraph, against: &TopologyGraph) -> Vec<NetJsonNode> {
    let known: HashSet<&str> = against.nodes().iter().map(String::as_str).collect();
    from.nodes()
        .iter()
        .filter(|node| !known.contains(node.as_str()))
        .cloned()
        .sorted()
        .map(NetJsonNode::new)
        .collect()
}

/// Links of `from` whose `(source, target)` pair is absent from `against`
/// or carries a different weight there, sorted by endpoint pair.
fn link_delta(from: &TopologyGraph, against: &TopologyGraph) -> Vec<Link> {
    let known: HashMap<(&str, &str), Option<f64>> = against
        .links()
        .iter()
        .map(|link| ((link.source.as_str(), link.target.as_str()), link.weight))
        .collect();
    from.links()
        .iter()
        .filter(|link| {
            known.get(&(link.source.as_str(), link.target.as_str())) != Some(&link.weight)
        })
        .cloned()
        .sorted_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)))
        .collect()
}
