//! OLSR jsoninfo topology decoder.
//!
//! Consumes the `topology` table of the olsrd jsoninfo plugin: one entry
//! per directed link, cost under `tcEdgeCost` (or `cost` on older plugin
//! versions). The format always carries a cost, so an entry without one is
//! malformed rather than defaulted.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FormatError, TopologyError};
use crate::models::GraphBuilder;

#[derive(Debug, Deserialize)]
struct TopologyDump {
    topology: Vec<TopologyEntry>,
}

#[derive(Debug, Deserialize)]
struct TopologyEntry {
    #[serde(rename = "lastHopIP")]
    last_hop_ip: String,
    #[serde(rename = "destinationIP")]
    destination_ip: String,
    #[serde(rename = "tcEdgeCost", default)]
    tc_edge_cost: Option<f64>,
    #[serde(default)]
    cost: Option<f64>,
}

pub fn parse(data: &Value, builder: &mut GraphBuilder) -> Result<(), TopologyError> {
    let raw: TopologyDump =
        serde_json::from_value(data.clone()).map_err(FormatError::InvalidStructure)?;
    for entry in raw.topology {
        let cost = entry
            .tc_edge_cost
            .or(entry.cost)
            .ok_or(FormatError::MissingKey("tcEdgeCost"))?;
        builder.add_link(entry.last_hop_ip, entry.destination_ip, Some(cost));
    }
    Ok(())
}
