//! NetJSON `NetworkGraph` output documents.
//!
//! Field order of the serialized document is fixed by struct declaration
//! order, and nodes/links render in the graph's insertion order, so
//! serializing the same graph twice yields byte-identical output.

use serde::Serialize;

use crate::error::TopologyError;
use crate::models::graph::{Link, TopologyGraph};

/// The `type` constant carried by every full-graph document.
pub const NETWORK_GRAPH_TYPE: &str = "NetworkGraph";

/// Protocol name of costless manual topologies, exempt from the metric
/// requirement.
pub const STATIC_PROTOCOL: &str = "static";

/// A NetJSON NetworkGraph document rendered from a [TopologyGraph].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetJsonGraph {
    #[serde(rename = "type")]
    pub doc_type: &'static str,
    pub protocol: String,
    pub version: String,
    pub revision: Option<String>,
    pub metric: Option<String>,
    pub nodes: Vec<NetJsonNode>,
    pub links: Vec<Link>,
}

/// A node entry in a NetworkGraph document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetJsonNode {
    pub id: String,
}

impl NetJsonNode {
    pub fn new(id: impl Into<String>) -> Self {
        NetJsonNode { id: id.into() }
    }
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, TopologyError> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(TopologyError::SchemaValidation { field }),
    }
}

impl TopologyGraph {
    /// Renders the graph as a structured NetworkGraph document.
    ///
    /// Validates the metadata invariants first: `protocol` and `version`
    /// must be non-empty, and `metric` must be present unless the protocol
    /// is `static`.
    pub fn to_document(&self) -> Result<NetJsonGraph, TopologyError> {
        let protocol = required(&self.protocol, "protocol")?;
        let version = required(&self.version, "version")?;
        if protocol != STATIC_PROTOCOL {
            required(&self.metric, "metric")?;
        }
        Ok(NetJsonGraph {
            doc_type: NETWORK_GRAPH_TYPE,
            protocol,
            version,
            revision: self.revision.clone(),
            metric: self.metric.clone(),
            nodes: self.nodes.iter().cloned().map(NetJsonNode::new).collect(),
            links: self.links.clone(),
        })
    }

    /// Renders the graph as NetJSON text.
    pub fn to_json(&self) -> Result<String, TopologyError> {
        serde_json::to_string(&self.to_document()?).map_err(TopologyError::Serialize)
    }

    /// Renders the graph as indented NetJSON text.
    pub fn to_json_pretty(&self) -> Result<String, TopologyError> {
        serde_json::to_string_pretty(&self.to_document()?).map_err(TopologyError::Serialize)
    }
}
