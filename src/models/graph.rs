use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// A single weighted link between two nodes.
///
/// `weight` is the link cost in the protocol's metric. `None` is only
/// meaningful for costless protocols (manual/static topologies); decoders
/// for cost-carrying protocols always fill it in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Option<f64>) -> Self {
        Link {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// The canonical, protocol-agnostic topology graph every decoder converges
/// on.
///
/// A graph is an immutable value: it is accumulated through a
/// [GraphBuilder] during one parse invocation and never mutated afterwards.
/// Nodes and links iterate in insertion order, which is the stable order the
/// serializer renders them in.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyGraph {
    pub(crate) protocol: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) revision: Option<String>,
    pub(crate) metric: Option<String>,
    pub(crate) nodes: Vec<String>,
    pub(crate) links: Vec<Link>,
}

impl TopologyGraph {
    /// Routing protocol name, e.g. `olsr` or `static`.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// Metric name the link weights are expressed in, e.g. `ETX`.
    pub fn metric(&self) -> Option<&str> {
        self.metric.as_deref()
    }

    /// Node identifiers in insertion order, free of duplicates.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Links in insertion order, at most one per ordered
    /// `(source, target)` pair.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node == id)
    }
}

/// Accumulates nodes and links during a parse invocation and yields an
/// immutable [TopologyGraph].
///
/// Endpoints of every added link are inserted as nodes, so the "every link
/// endpoint exists in `nodes`" invariant holds by construction. Inserting a
/// link for an already-known `(source, target)` pair overwrites its weight
/// in place (last write wins) without creating a second edge or changing
/// the link's position.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    protocol: Option<String>,
    version: Option<String>,
    revision: Option<String>,
    metric: Option<String>,
    nodes: Vec<String>,
    node_set: HashSet<String>,
    links: Vec<Link>,
    link_index: HashMap<(String, String), usize>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder::default()
    }

    pub fn set_protocol(&mut self, protocol: impl Into<String>) {
        self.protocol = Some(protocol.into());
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn set_revision(&mut self, revision: impl Into<String>) {
        self.revision = Some(revision.into());
    }

    pub fn set_metric(&mut self, metric: impl Into<String>) {
        self.metric = Some(metric.into());
    }

    /// Adds a node; duplicate identifiers are ignored. Identity is exact
    /// string equality, no case or whitespace normalization.
    pub fn add_node(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.node_set.insert(id.clone()) {
            self.nodes.push(id);
        }
    }

    /// Adds a link, inserting both endpoints as nodes if absent.
    pub fn add_link(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: Option<f64>,
    ) {
        let source = source.into();
        let target = target.into();
        self.add_node(source.clone());
        self.add_node(target.clone());
        match self.link_index.entry((source.clone(), target.clone())) {
            Entry::Occupied(entry) => {
                self.links[*entry.get()].weight = weight;
            }
            Entry::Vacant(entry) => {
                entry.insert(self.links.len());
                self.links.push(Link {
                    source,
                    target,
                    weight,
                });
            }
        }
    }

    /// Consumes the builder and hands the finished graph to the caller.
    pub fn build(self) -> TopologyGraph {
        TopologyGraph {
            protocol: self.protocol,
            version: self.version,
            revision: self.revision,
            metric: self.metric,
            nodes: self.nodes,
            links: self.links,
        }
    }
}
