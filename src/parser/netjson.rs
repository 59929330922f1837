//! NetJSON NetworkGraph decoder.
//!
//! The document carries its own metadata, so this decoder also populates
//! `protocol`/`version`/`revision`/`metric` on the builder. Documents with
//! protocol `static` describe costless manual topologies and keep absent
//! weights absent; for every other protocol an omitted cost gets the
//! default weight.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FormatError, TopologyError};
use crate::models::{GraphBuilder, NETWORK_GRAPH_TYPE, STATIC_PROTOCOL};

/// Weight assigned to links whose document omits a cost while the protocol
/// does define one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Deserialize)]
struct RawGraph {
    #[serde(rename = "type")]
    doc_type: String,
    protocol: String,
    version: String,
    #[serde(default)]
    revision: Option<String>,
    #[serde(default)]
    metric: Option<String>,
    nodes: Vec<RawNode>,
    links: Vec<RawLink>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RawLink {
    source: String,
    target: String,
    #[serde(default)]
    weight: Option<f64>,
    // older NetJSON documents carry the weight under "cost"
    #[serde(default)]
    cost: Option<f64>,
}

pub fn parse(data: &Value, builder: &mut GraphBuilder) -> Result<(), TopologyError> {
    let raw: RawGraph =
        serde_json::from_value(data.clone()).map_err(FormatError::InvalidStructure)?;
    if raw.doc_type != NETWORK_GRAPH_TYPE {
        return Err(FormatError::WrongDocumentType {
            expected: NETWORK_GRAPH_TYPE,
            found: raw.doc_type,
        }
        .into());
    }

    let costless = raw.protocol == STATIC_PROTOCOL;
    builder.set_protocol(raw.protocol);
    builder.set_version(raw.version);
    if let Some(revision) = raw.revision {
        builder.set_revision(revision);
    }
    if let Some(metric) = raw.metric {
        builder.set_metric(metric);
    }

    for node in raw.nodes {
        builder.add_node(node.id);
    }
    for link in raw.links {
        let weight = link.weight.or(link.cost);
        let weight = match (weight, costless) {
            (None, false) => Some(DEFAULT_WEIGHT),
            (weight, _) => weight,
        };
        builder.add_link(link.source, link.target, weight);
    }
    Ok(())
}
