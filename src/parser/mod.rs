use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

pub mod batman;
pub mod netjson;
pub mod olsr;

use crate::error::TopologyError;
use crate::io::{resolve, FetchOptions};
use crate::models::{GraphBuilder, TopologyGraph};

pub use crate::io::DataSource;

/// Per-protocol metadata defaults, applied before the decoder runs.
struct ProtocolDefaults {
    protocol: Option<&'static str>,
    version: Option<&'static str>,
    metric: Option<&'static str>,
}

/// The supported topology source formats.
///
/// Each variant maps to one decoder module turning that protocol's document
/// shape into the canonical graph. [Protocol::NetJson] is also the vehicle
/// for `static` manual topologies, which carry their metadata in the
/// document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// NetJSON NetworkGraph documents, including `static` topologies.
    NetJson,
    /// OLSR jsoninfo topology output.
    Olsr,
    /// batman-adv visualization data as published by alfred.
    BatmanAdv,
}

impl Protocol {
    fn defaults(&self) -> ProtocolDefaults {
        match self {
            // NetJSON documents carry their own metadata
            Protocol::NetJson => ProtocolDefaults {
                protocol: None,
                version: None,
                metric: None,
            },
            Protocol::Olsr => ProtocolDefaults {
                protocol: Some("olsr"),
                version: Some("0.8"),
                metric: Some("ETX"),
            },
            Protocol::BatmanAdv => ProtocolDefaults {
                protocol: Some("batman-adv"),
                version: Some("2014.3.0"),
                metric: Some("TQ"),
            },
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Protocol::NetJson => "netjson",
            Protocol::Olsr => "olsr",
            Protocol::BatmanAdv => "batman-adv",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Protocol {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "netjson" | "static" => Ok(Protocol::NetJson),
            "olsr" => Ok(Protocol::Olsr),
            "batman-adv" | "batman" => Ok(Protocol::BatmanAdv),
            _ => Err(TopologyError::UnknownProtocol(s.to_string())),
        }
    }
}

/// Parses one topology snapshot into a [TopologyGraph].
///
/// Construction takes the protocol and the data reference; optional
/// metadata overrides and fetch options chain on top:
///
/// ```no_run
/// use topodiff::{Protocol, TopologyParser};
/// use std::time::Duration;
///
/// let graph = TopologyParser::new(Protocol::Olsr, "http://127.0.0.1:9090/topology")
///     .with_timeout(Duration::from_secs(5))
///     .with_metric("ETX")
///     .parse()
///     .unwrap();
/// println!("{}", graph.to_json().unwrap());
/// ```
pub struct TopologyParser {
    protocol: Protocol,
    source: DataSource,
    version: Option<String>,
    revision: Option<String>,
    metric: Option<String>,
    options: FetchOptions,
}

impl TopologyParser {
    pub fn new(protocol: Protocol, source: impl Into<DataSource>) -> TopologyParser {
        TopologyParser {
            protocol,
            source: source.into(),
            version: None,
            revision: None,
            metric: None,
            options: FetchOptions::default(),
        }
    }

    /// Overrides the protocol version; wins over defaults and
    /// document-supplied values.
    pub fn with_version(self, version: impl Into<String>) -> TopologyParser {
        TopologyParser {
            version: Some(version.into()),
            ..self
        }
    }

    /// Overrides the protocol revision.
    pub fn with_revision(self, revision: impl Into<String>) -> TopologyParser {
        TopologyParser {
            revision: Some(revision.into()),
            ..self
        }
    }

    /// Overrides the metric name.
    pub fn with_metric(self, metric: impl Into<String>) -> TopologyParser {
        TopologyParser {
            metric: Some(metric.into()),
            ..self
        }
    }

    /// Bounds HTTP requests and telnet connects/reads. There is no internal
    /// retry; a timeout fails the invocation.
    pub fn with_timeout(mut self, timeout: Duration) -> TopologyParser {
        self.options.timeout = Some(timeout);
        self
    }

    /// Toggles TLS certificate verification for HTTPS references.
    pub fn with_verify(mut self, verify: bool) -> TopologyParser {
        self.options.verify = verify;
        self
    }

    /// Resolves the data reference, runs the protocol decoder and returns
    /// the finished graph.
    pub fn parse(self) -> Result<TopologyGraph, TopologyError> {
        let data = resolve(self.source, &self.options)?;

        let mut builder = GraphBuilder::new();
        let defaults = self.protocol.defaults();
        if let Some(protocol) = defaults.protocol {
            builder.set_protocol(protocol);
        }
        if let Some(version) = defaults.version {
            builder.set_version(version);
        }
        if let Some(metric) = defaults.metric {
            builder.set_metric(metric);
        }

        match self.protocol {
            Protocol::NetJson => netjson::parse(&data, &mut builder)?,
            Protocol::Olsr => olsr::parse(&data, &mut builder)?,
            Protocol::BatmanAdv => batman::parse(&data, &mut builder)?,
        }

        // explicit overrides always win
        if let Some(version) = self.version {
            builder.set_version(version);
        }
        if let Some(revision) = self.revision {
            builder.set_revision(revision);
        }
        if let Some(metric) = self.metric {
            builder.set_metric(metric);
        }

        Ok(builder.build())
    }
}
