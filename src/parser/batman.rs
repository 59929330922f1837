//! batman-adv decoder for the visualization data published by alfred.
//!
//! Each `vis` entry describes one originator by its primary interface MAC
//! and the neighbors it can reach. alfred emits the TQ metric as a quoted
//! decimal string, newer tools emit a plain number; both are accepted.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FormatError, TopologyError};
use crate::models::GraphBuilder;

#[derive(Debug, Deserialize)]
struct VisDump {
    vis: Vec<VisEntry>,
}

#[derive(Debug, Deserialize)]
struct VisEntry {
    primary: String,
    #[serde(default)]
    neighbors: Vec<VisNeighbor>,
}

#[derive(Debug, Deserialize)]
struct VisNeighbor {
    neighbor: String,
    metric: MetricValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    fn as_f64(&self) -> Result<f64, FormatError> {
        match self {
            MetricValue::Number(value) => Ok(*value),
            MetricValue::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| FormatError::InvalidCost(text.clone())),
        }
    }
}

pub fn parse(data: &Value, builder: &mut GraphBuilder) -> Result<(), TopologyError> {
    let raw: VisDump =
        serde_json::from_value(data.clone()).map_err(FormatError::InvalidStructure)?;
    for entry in raw.vis {
        // isolated originators still appear as nodes
        builder.add_node(entry.primary.clone());
        for neighbor in entry.neighbors {
            let metric = neighbor.metric.as_f64()?;
            builder.add_link(entry.primary.clone(), neighbor.neighbor, Some(metric));
        }
    }
    Ok(())
}
